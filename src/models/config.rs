//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Directory where uploaded objects are stored on disk.
    pub media_root: String,
    /// Public base URL under which the media directory is served.
    pub media_base_url: String,
}

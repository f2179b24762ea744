//! DTOs bridging services with the HTTP layer.

pub mod api;

use std::path::PathBuf;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use equitrack::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// File-backed test database removed on drop.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(name);
        let _ = std::fs::remove_file(&path);

        let database_url = path.to_str().expect("valid temp path");
        let pool = establish_connection_pool(database_url).expect("connection pool");
        let mut conn = pool.get().expect("pooled connection");
        conn.run_pending_migrations(MIGRATIONS).expect("migrations");

        Self { pool, path }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
        for suffix in ["-wal", "-shm"] {
            let mut sidecar = self.path.clone().into_os_string();
            sidecar.push(suffix);
            let _ = std::fs::remove_file(sidecar);
        }
    }
}

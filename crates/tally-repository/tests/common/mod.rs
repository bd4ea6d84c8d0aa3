//! Common test infrastructure for database integration tests.

use std::sync::Arc;
use tally_config::DatabaseConfig;
use tally_repository::{create_pool, DatabasePool};
use tempfile::TempDir;

/// Test database wrapper.
///
/// Owns a temporary directory holding a fresh SQLite file with the schema
/// applied. The file is removed when the wrapper is dropped.
pub struct TestDatabase {
    _dir: TempDir,
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a new, empty test database.
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("clicks_test.db");

        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            min_connections: 1,
            max_connections: 5,
            ..DatabaseConfig::default()
        };

        let pool = create_pool(&config)
            .await
            .expect("Failed to open test database");

        Self { _dir: dir, pool }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }
}

//! Database connection pool management.

use async_trait::async_trait;
use shaku::Component;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tally_config::DatabaseConfig;
use tally_core::{Interface, TallyError, TallyResult};
use tracing::{debug, info, warn};

/// Schema statements, applied in order on startup. Each one is idempotent.
const SCHEMA: &[&str] = &[include_str!("../schema/001_create_users.sql")];

/// Interface for database pool operations.
///
/// This trait abstracts database pool functionality for dependency injection.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying SQLite pool.
    fn inner(&self) -> &SqlitePool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> TallyResult<()>;

    /// Creates the tables if they do not exist yet.
    async fn initialize_schema(&self) -> TallyResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: SqlitePool,
}

impl DatabasePool {
    /// Opens a connection pool from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or the database cannot be opened.
    pub async fn connect(config: &DatabaseConfig) -> TallyResult<Self> {
        info!("Connecting to SQLite database at {}", config.url);

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| TallyError::Configuration(format!("Invalid database URL: {e}")))?
            .create_if_missing(config.create_if_missing)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(config.busy_timeout());

        let pool = SqlitePoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                TallyError::from(e)
            })?;

        info!("SQLite connection pool established");
        Ok(Self { pool })
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    async fn health_check(&self) -> TallyResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| TallyError::Unavailable(format!("Health check failed: {e}")))?;
        Ok(())
    }

    async fn initialize_schema(&self) -> TallyResult<()> {
        info!("Initializing database schema...");
        for statement in SCHEMA {
            debug!("Applying schema statement");
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| TallyError::Database(format!("Schema initialization failed: {e}")))?;
        }
        info!("Database schema ready");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Opens a shared database pool and makes sure the schema exists.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the schema cannot be created.
pub async fn create_pool(config: &DatabaseConfig) -> TallyResult<Arc<DatabasePool>> {
    let pool = DatabasePool::connect(config).await?;
    pool.initialize_schema().await?;
    Ok(Arc::new(pool))
}

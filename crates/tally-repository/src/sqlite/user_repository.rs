//! SQLite user repository implementation.

use crate::{traits::UserRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tally_core::{TallyError, TallyResult, User, UserId};
use tracing::{debug, warn};

/// SQLite user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct SqliteUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteUserRepository {
    /// Creates a new SQLite user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), row.username, row.clicks, row.created_at)
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_username(&self, username: &str) -> TallyResult<Option<User>> {
        debug!("Finding user by username: {}", username);

        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, username, clicks, created_at
            FROM users
            WHERE username = ?
            ",
        )
        .bind(username)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, username: &str) -> TallyResult<User> {
        debug!("Inserting user: {}", username);

        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (username, clicks)
            VALUES (?, 0)
            RETURNING id, username, clicks, created_at
            ",
        )
        .bind(username)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn set_clicks(&self, username: &str, clicks: i64) -> TallyResult<Option<User>> {
        debug!("Setting clicks for {} to {}", username, clicks);

        let row = sqlx::query_as::<_, UserRow>(
            r"
            UPDATE users
            SET clicks = ?
            WHERE username = ?
            RETURNING id, username, clicks, created_at
            ",
        )
        .bind(clicks)
        .bind(username)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn increment_clicks(&self, username: &str) -> TallyResult<Option<User>> {
        debug!("Incrementing clicks for {}", username);

        // SQLite would silently promote an overflowing integer to REAL.
        let row = sqlx::query_as::<_, UserRow>(
            r"
            UPDATE users
            SET clicks = clicks + 1
            WHERE username = ? AND clicks < ?
            RETURNING id, username, clicks, created_at
            ",
        )
        .bind(username)
        .bind(i64::MAX)
        .fetch_optional(self.pool.inner())
        .await?;

        match row {
            Some(row) => Ok(Some(row.into())),
            None => match self.find_by_username(username).await? {
                Some(_) => {
                    warn!("Click count for {} is at its maximum", username);
                    Err(TallyError::counter_overflow(username))
                }
                None => Ok(None),
            },
        }
    }

    async fn find_all_by_clicks(&self) -> TallyResult<Vec<User>> {
        debug!("Listing users by clicks");

        let rows = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, username, clicks, created_at
            FROM users
            ORDER BY clicks DESC, id ASC
            ",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}

//! User entity.

use crate::id::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted click counter for one username.
///
/// `id`, `username`, and `created_at` never change after creation; only
/// `clicks` is mutated, and only through storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier
    pub id: UserId,
    /// Unique, case-sensitive username
    pub username: String,
    /// Current click count (may be negative when set explicitly)
    pub clicks: i64,
    /// When the row was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user from its stored parts.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>, clicks: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username: username.into(),
            clicks,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_new() {
        let now = Utc::now();
        let user = User::new(UserId::new(1), "alice", 0, now);

        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.username, "alice");
        assert_eq!(user.clicks, 0);
        assert_eq!(user.created_at, now);
    }

    #[test]
    fn test_user_accepts_negative_clicks() {
        let user = User::new(UserId::new(2), String::from("bob"), -3, Utc::now());
        assert_eq!(user.clicks, -3);
    }
}

//! Repository trait definitions.

use async_trait::async_trait;
use tally_core::{Interface, TallyResult, User};

/// User repository trait.
///
/// Lookups return `Ok(None)` for an unknown username; turning that into a
/// not-found error is the service's job.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> TallyResult<Option<User>>;

    /// Inserts a user with zero clicks.
    ///
    /// Fails with `TallyError::Conflict` if the username is already taken.
    async fn insert(&self, username: &str) -> TallyResult<User>;

    /// Overwrites the click count and returns the updated row.
    async fn set_clicks(&self, username: &str, clicks: i64) -> TallyResult<Option<User>>;

    /// Adds one click in a single server-side update and returns the updated row.
    ///
    /// Fails with `TallyError::CounterOverflow` when the count is already `i64::MAX`;
    /// the stored row is left unchanged.
    async fn increment_clicks(&self, username: &str) -> TallyResult<Option<User>>;

    /// Lists every user, most clicks first, ties in creation order.
    async fn find_all_by_clicks(&self) -> TallyResult<Vec<User>>;
}

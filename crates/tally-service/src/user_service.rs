//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateClicksRequest, UserResponse};
use async_trait::async_trait;
use tally_core::{Interface, TallyResult};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Registers a username, or returns the existing user unchanged.
    async fn create_user(&self, request: CreateUserRequest) -> TallyResult<UserResponse>;

    /// Gets a user by username.
    async fn get_user(&self, username: &str) -> TallyResult<UserResponse>;

    /// Overwrites a user's click count.
    async fn set_clicks(&self, username: &str, request: UpdateClicksRequest) -> TallyResult<UserResponse>;

    /// Adds one click to a user.
    async fn increment_clicks(&self, username: &str) -> TallyResult<UserResponse>;

    /// Lists all users, most clicks first.
    async fn list_users(&self) -> TallyResult<Vec<UserResponse>>;
}

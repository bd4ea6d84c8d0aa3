//! User service implementation.

use crate::dto::{CreateUserRequest, UpdateClicksRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tally_core::{TallyError, TallyResult, User, ValidateExt};
use tally_repository::UserRepository;
use tracing::{debug, info, warn};

/// User service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    async fn find_existing(&self, username: &str) -> TallyResult<User> {
        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| TallyError::not_found("User", username))
    }

    /// Fetches the row another writer created first, or reports the creation as failed.
    async fn reread_after_conflict(&self, username: &str) -> TallyResult<User> {
        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| TallyError::creation("User", username))
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, request: CreateUserRequest) -> TallyResult<UserResponse> {
        debug!("Creating user: {}", request.username);

        request.validate_request()?;

        if let Some(user) = self.user_repository.find_by_username(&request.username).await? {
            debug!("User already exists: {}", user.username);
            return Ok(UserResponse::from(user));
        }

        let user = match self.user_repository.insert(&request.username).await {
            Ok(user) => user,
            Err(e) if e.is_conflict() => {
                warn!("Conflict creating user {}: {}", request.username, e);
                self.reread_after_conflict(&request.username).await?
            }
            Err(e) => return Err(e),
        };

        info!("User ready: {} (id {})", user.username, user.id);
        Ok(UserResponse::from(user))
    }

    async fn get_user(&self, username: &str) -> TallyResult<UserResponse> {
        debug!("Getting user: {}", username);

        let user = self.find_existing(username).await?;
        Ok(UserResponse::from(user))
    }

    async fn set_clicks(&self, username: &str, request: UpdateClicksRequest) -> TallyResult<UserResponse> {
        debug!("Setting clicks for {}: {}", username, request.clicks);

        let user = self
            .user_repository
            .set_clicks(username, request.clicks)
            .await?
            .ok_or_else(|| TallyError::not_found("User", username))?;

        info!("Clicks set for {}: {}", username, user.clicks);
        Ok(UserResponse::from(user))
    }

    async fn increment_clicks(&self, username: &str) -> TallyResult<UserResponse> {
        debug!("Incrementing clicks for {}", username);

        let user = self
            .user_repository
            .increment_clicks(username)
            .await?
            .ok_or_else(|| TallyError::not_found("User", username))?;

        debug!("Clicks for {} now {}", username, user.clicks);
        Ok(UserResponse::from(user))
    }

    async fn list_users(&self) -> TallyResult<Vec<UserResponse>> {
        debug!("Listing users");

        let users = self.user_repository.find_all_by_clicks().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

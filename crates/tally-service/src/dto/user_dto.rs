//! User-related DTOs.

use serde::{Deserialize, Serialize};
use tally_core::{User, UserId};
use utoipa::ToSchema;
use validator::Validate;

/// Request to register a username.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
}

/// Request to overwrite a user's click count.
///
/// Any integer is accepted, including negative values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateClicksRequest {
    pub clicks: i64,
}

/// User response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(value_type = i64)]
    pub id: UserId,
    pub username: String,
    pub clicks: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            clicks: user.clicks,
        }
    }
}

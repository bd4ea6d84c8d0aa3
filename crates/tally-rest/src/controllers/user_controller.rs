//! Click counter controller.

use crate::{
    extractors::ValidatedJson,
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Router,
};
use tally_service::{CreateUserRequest, UpdateClicksRequest, UserResponse};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:username", get(get_user))
        .route("/:username/clicks", put(set_clicks))
        .route("/:username/increment", post(increment_clicks))
}

/// List all users, most clicks first.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Users ordered by clicks descending", body = [UserResponse])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");

    let response = state.user_service.list_users().await?;
    ok(response)
}

/// Register a username, or return the existing user unchanged.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "The new or existing user", body = UserResponse),
        (status = 400, description = "Malformed body or user could not be created", body = tally_core::ErrorResponse),
        (status = 422, description = "Empty username", body = tally_core::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<UserResponse> {
    debug!("Create user request: {}", request.username);

    let response = state.user_service.create_user(request).await?;
    ok(response)
}

/// Get a user by username.
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Case-sensitive username")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "User not found", body = tally_core::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", username);

    let response = state.user_service.get_user(&username).await?;
    ok(response)
}

/// Overwrite a user's click count.
#[utoipa::path(
    put,
    path = "/users/{username}/clicks",
    tag = "users",
    params(("username" = String, Path, description = "Case-sensitive username")),
    request_body = UpdateClicksRequest,
    responses(
        (status = 200, description = "The updated user", body = UserResponse),
        (status = 404, description = "User not found", body = tally_core::ErrorResponse)
    )
)]
pub async fn set_clicks(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateClicksRequest>,
) -> ApiResult<UserResponse> {
    debug!("Set clicks request: {} -> {}", username, request.clicks);

    let response = state.user_service.set_clicks(&username, request).await?;
    ok(response)
}

/// Add one click to a user.
#[utoipa::path(
    post,
    path = "/users/{username}/increment",
    tag = "users",
    params(("username" = String, Path, description = "Case-sensitive username")),
    responses(
        (status = 200, description = "The updated user", body = UserResponse),
        (status = 404, description = "User not found", body = tally_core::ErrorResponse),
        (status = 409, description = "Click count is already at its maximum", body = tally_core::ErrorResponse)
    )
)]
pub async fn increment_clicks(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<UserResponse> {
    debug!("Increment request: {}", username);

    let response = state.user_service.increment_clicks(&username).await?;
    ok(response)
}

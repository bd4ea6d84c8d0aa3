//! OpenAPI documentation configuration.

use crate::controllers::{HealthResponse, ReadinessResponse};
use crate::router::RootResponse;
use tally_core::{ErrorResponse, FieldError};
use tally_service::{CreateUserRequest, UpdateClicksRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Click Tally API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Click Counter API",
        description = "Per-user click counters backed by SQLite",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::router::root,
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::set_clicks,
        crate::controllers::user_controller::increment_clicks,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            CreateUserRequest,
            UpdateClicksRequest,
            UserResponse,
            RootResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "users", description = "Click counters"),
        (name = "health", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/",
            "/users",
            "/users/{username}",
            "/users/{username}/clicks",
            "/users/{username}/increment",
            "/health",
            "/ready",
            "/live",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}

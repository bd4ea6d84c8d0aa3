//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tally_core::{ErrorResponse, TallyError};
use tracing::{debug, error};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub TallyError);

impl From<TallyError> for AppError {
    fn from(err: TallyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = self.0.error_code(), "Request failed: {}", self.0);
        } else {
            debug!(code = self.0.error_code(), "Request rejected: {}", self.0);
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: TallyError) -> StatusCode {
        AppError(err).into_response().status()
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(status_of(TallyError::not_found("User", "bob")), StatusCode::NOT_FOUND);
        assert_eq!(status_of(TallyError::creation("User", "alice")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(TallyError::validation("empty")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(TallyError::conflict("dup")), StatusCode::CONFLICT);
        assert_eq!(
            status_of(TallyError::Unavailable("pool closed".to_string())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(TallyError::Database("disk I/O".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

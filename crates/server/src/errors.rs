use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::booking::errors::BookingError;

/// HTTP boundary wrapper for booking errors: known kinds pass through with
/// their status, repository failures are logged and replaced with a generic
/// message.
#[derive(Debug)]
pub struct ApiError(pub BookingError);

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BookingError::Unauthenticated => (StatusCode::UNAUTHORIZED, self.0.to_string()),
            BookingError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            BookingError::NotFound => (StatusCode::NOT_FOUND, self.0.to_string()),
            // Owner mismatch is reported as 401, the same shape as a missing session.
            BookingError::Unauthorized => (StatusCode::UNAUTHORIZED, self.0.to_string()),
            BookingError::Repository(detail) => {
                error!(code = self.0.code(), error = %detail, "booking repository failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

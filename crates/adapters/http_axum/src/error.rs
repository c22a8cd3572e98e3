//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use ledstrip_domain::error::LedStripError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`LedStripError`] to an HTTP response with appropriate status code.
pub struct ApiError(LedStripError);

impl From<LedStripError> for ApiError {
    fn from(err: LedStripError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            LedStripError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LedStripError::Color(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LedStripError::Strip(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LedStripError::Driver(err) => {
                tracing::error!(error = %err, "driver error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

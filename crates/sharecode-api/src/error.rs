//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use sharecode_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Newtype over [`AppError`] carrying the HTTP response mapping.
///
/// Handlers return `Result<_, ApiError>` so that `?` on an [`AppResult`]
/// converts automatically.
///
/// [`AppResult`]: sharecode_core::AppResult
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match err.kind {
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Entropy => {
                tracing::error!(error = %err.message, "Entropy source failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "ENTROPY_FAILURE")
            }
            ErrorKind::Configuration => {
                tracing::error!(error = %err.message, "Configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
            }
            ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "SERIALIZATION_ERROR"),
            ErrorKind::Internal => {
                tracing::error!(error = %err.message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: err.message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

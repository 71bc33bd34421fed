//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use shelf_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
}

/// Newtype over [`AppError`] so handlers can return it with `?`.
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
        let status = match err.kind {
            ErrorKind::Validation | ErrorKind::InvalidOperation | ErrorKind::Conflict => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::Unauthenticated | ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Database | ErrorKind::Cache => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Infrastructure failures are logged server-side and masked in
        // the response body.
        let message = if status.is_server_error() || status == StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
            "Internal error".to_string()
        } else {
            err.message
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

//! Unified API error type with Axum `IntoResponse` support.
//!
//! Every failure leaves the service as `{"success": false, "error": ...}`.
//! Store failures are logged here and replaced by a fixed message so that
//! driver detail never reaches the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use items_protocol::{ErrorResponse, ValidationError};

use crate::store::StoreError;

pub const LIST_FAILED: &str = "Server error while fetching items";
pub const CREATE_FAILED: &str = "Server error while adding item";
pub const DELETE_FAILED: &str = "Server error while deleting item";
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// API error type that converts to proper HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Log a failed store operation and downgrade it to a generic 500.
    pub fn store(operation: &'static str, public_message: &str, err: StoreError) -> Self {
        tracing::error!(operation, error = %err, "store operation failed");
        ApiError::Internal(public_message.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, axum::Json(ErrorResponse::new(message))).into_response()
    }
}

/// Convenience alias.
pub type ApiResult<T> = Result<T, ApiError>;

//! Liveness endpoint.

use axum::Json;
use items_protocol::StatusResponse;

/// GET /status — fixed payload, never touches the store.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::running())
}

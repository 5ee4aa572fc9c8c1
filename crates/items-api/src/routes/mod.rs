//! API route definitions and router builder.

pub mod items;
pub mod status;

use axum::Router;
use axum::routing::{delete, get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/status", get(status::status))
        .route("/items", get(items::list_items).post(items::create_item))
        .route("/items/{id}", delete(items::delete_item))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

//! Item endpoints. Each handler makes exactly one store call.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use items_protocol::{
    CreateItemRequest, CreateItemResponse, DeleteItemResponse, ListItemsResponse, ValidationError,
};

use crate::error::{
    ApiError, ApiResult, CREATE_FAILED, DELETE_FAILED, ITEM_NOT_FOUND, LIST_FAILED,
};
use crate::state::AppState;

/// GET /items — list all items, most recent first.
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<ListItemsResponse>> {
    let items = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::store("list_items", LIST_FAILED, e))?;

    tracing::debug!(count = items.len(), "items listed");
    Ok(Json(ListItemsResponse::new(items)))
}

/// POST /items — create an item from `{name, description?}`.
///
/// Input is validated before the store is touched. The body is parsed as
/// plain JSON first so a wrong-typed field is reported by name.
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateItemResponse>)> {
    let Json(value) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected item body");
        ApiError::from(ValidationError::NotAnObject)
    })?;
    let new_item = CreateItemRequest::from_value(value)?.validate()?;

    let item = state
        .store
        .create(new_item)
        .await
        .map_err(|e| ApiError::store("create_item", CREATE_FAILED, e))?;

    tracing::info!(item_id = item.id, name = %item.name, "item created");
    Ok((StatusCode::CREATED, Json(CreateItemResponse::new(item))))
}

/// DELETE /items/{id} — delete one item by id.
///
/// A non-integer id cannot name an item, so it is answered like a missing one.
pub async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteItemResponse>> {
    let Path(id) = path.map_err(|_| ApiError::NotFound(ITEM_NOT_FOUND.into()))?;

    let deleted = state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::store("delete_item", DELETE_FAILED, e))?;

    if !deleted {
        tracing::debug!(item_id = id, "delete target not found");
        return Err(ApiError::NotFound(ITEM_NOT_FOUND.into()));
    }

    tracing::info!(item_id = id, "item deleted");
    Ok(Json(DeleteItemResponse::deleted(id)))
}

//! JSON response envelopes returned by the items API.
//!
//! Every data route answers with a `success` flag; failures carry a
//! human-readable `error` and nothing else.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Body of `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub language: String,
}

impl StatusResponse {
    pub fn running() -> Self {
        Self {
            status: "OK".into(),
            message: "API is running".into(),
            language: "Rust/Axum".into(),
        }
    }
}

/// Body of a successful `GET /items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItemsResponse {
    pub success: bool,
    pub count: usize,
    pub items: Vec<Item>,
}

impl ListItemsResponse {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            success: true,
            count: items.len(),
            items,
        }
    }
}

/// Body of a successful `POST /items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemResponse {
    pub success: bool,
    pub item: Item,
}

impl CreateItemResponse {
    pub fn new(item: Item) -> Self {
        Self {
            success: true,
            item,
        }
    }
}

/// Body of a successful `DELETE /items/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteItemResponse {
    pub fn deleted(id: i64) -> Self {
        Self {
            success: true,
            message: format!("Item {id} deleted"),
        }
    }
}

/// Body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

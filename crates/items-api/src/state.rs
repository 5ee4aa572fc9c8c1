//! Shared application state for the Axum server.
//!
//! Holds only the item store handle. The PostgreSQL store keeps connection
//! parameters, never a connection, so no state survives between requests.

use std::sync::Arc;

use crate::config::{ApiConfig, StoreKind};
use crate::store::{ItemStore, MemoryItemStore, PgItemStore};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
}

impl AppState {
    /// Create state around any store implementation.
    pub fn new(store: impl ItemStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create state backed by an empty in-memory store (for tests).
    pub fn in_memory() -> Self {
        Self::new(MemoryItemStore::new())
    }

    /// Create state for the store selected in `config`.
    pub fn from_config(config: &ApiConfig) -> Self {
        match config.store {
            StoreKind::Postgres => Self::new(PgItemStore::new(config.database.connect_options())),
            StoreKind::Memory => Self::in_memory(),
        }
    }
}

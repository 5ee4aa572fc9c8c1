//! Item storage behind a trait, so routes never see a connection.
//!
//! Two backends:
//! - [`PgItemStore`]: opens a fresh PostgreSQL connection per call (production).
//! - [`MemoryItemStore`]: process-local `RwLock<Vec>` (tests and development).

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use items_protocol::{Item, NewItem};

pub use memory::MemoryItemStore;
pub use postgres::PgItemStore;

/// Failure of a single store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("database query failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// Create / list / delete over the items table. Each call is one round-trip.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, most recent `created_at` first.
    async fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Persist a validated item; the store assigns `id` and `created_at`.
    async fn create(&self, item: NewItem) -> Result<Item, StoreError>;

    /// Remove an item. Returns `false` when no row matched `id`.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// Backend name (for logging).
    fn backend_name(&self) -> &str;
}

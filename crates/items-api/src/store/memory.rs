//! In-memory item store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use items_protocol::{Item, NewItem};
use tokio::sync::RwLock;

use super::{ItemStore, StoreError};

/// Item store held in process memory. Mirrors the PostgreSQL semantics:
/// serial ids starting at 1 and strictly increasing `created_at` values.
#[derive(Debug, Clone, Default)]
pub struct MemoryItemStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    last_created_at: Option<DateTime<Utc>>,
    items: Vec<Item>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing rows, keeping their ids and timestamps.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items: Vec<Item> = items.into_iter().collect();
        let inner = Inner {
            last_id: items.iter().map(|i| i.id).max().unwrap_or(0),
            last_created_at: items.iter().map(|i| i.created_at).max(),
            items,
        };
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let mut items = self.inner.read().await.items.clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let mut inner = self.inner.write().await;

        let now = Utc::now();
        let created_at = match inner.last_created_at {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        inner.last_id += 1;
        inner.last_created_at = Some(created_at);

        let item = Item {
            id: inner.last_id,
            name: item.name().to_string(),
            description: item.description().map(str::to_string),
            created_at,
        };
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.items.len();
        inner.items.retain(|i| i.id != id);
        Ok(inner.items.len() != before)
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

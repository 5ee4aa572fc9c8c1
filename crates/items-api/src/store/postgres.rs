//! PostgreSQL-backed item store with a connection per operation.

use async_trait::async_trait;
use items_protocol::{Item, NewItem};
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};

use super::{ItemStore, StoreError};
use crate::db;

/// Opens a new connection for every call and closes it before returning,
/// on success and failure alike. Mutations commit before the close.
#[derive(Debug, Clone)]
pub struct PgItemStore {
    options: PgConnectOptions,
}

impl PgItemStore {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    async fn open(&self) -> Result<PgConnection, StoreError> {
        db::connect(&self.options).await.map_err(StoreError::Connect)
    }
}

async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::debug!(error = %e, "error closing database connection");
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let mut conn = self.open().await?;
        let result = db::items::list_all(&mut conn).await;
        release(conn).await;

        let rows = result.map_err(StoreError::Query)?;
        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let mut conn = self.open().await?;
        let result = db::items::insert(&mut conn, &item).await;
        release(conn).await;

        result.map(Item::from).map_err(StoreError::Query)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let mut conn = self.open().await?;
        let result = db::items::delete(&mut conn, id).await;
        release(conn).await;

        Ok(result.map_err(StoreError::Query)?.is_some())
    }

    fn backend_name(&self) -> &str {
        "postgres"
    }
}

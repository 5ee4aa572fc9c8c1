//! Item queries.
//!
//! Columns are cast on the way out (`int8`, `timestamptz`) so rows decode the
//! same whether the pre-existing table uses `SERIAL`/`TIMESTAMP` or
//! `BIGSERIAL`/`TIMESTAMPTZ`.

use chrono::{DateTime, Utc};
use items_protocol::{Item, NewItem};
use sqlx::{Connection, PgConnection};

/// Item row returned from the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
        }
    }
}

/// List all items, most recent first.
pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<ItemRow>, sqlx::Error> {
    sqlx::query_as::<_, ItemRow>(
        "SELECT id::int8 AS id, name, description, created_at::timestamptz AS created_at
         FROM items ORDER BY created_at DESC",
    )
    .fetch_all(conn)
    .await
}

/// Insert a new item and commit. The store assigns `id` and `created_at`.
pub async fn insert(conn: &mut PgConnection, item: &NewItem) -> Result<ItemRow, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let row = sqlx::query_as::<_, ItemRow>(
        "INSERT INTO items (name, description) VALUES ($1, $2)
         RETURNING id::int8 AS id, name, description, created_at::timestamptz AS created_at",
    )
    .bind(item.name())
    .bind(item.description())
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;
    Ok(row)
}

/// Delete an item by id and commit. Returns the deleted id, or `None` if no
/// row matched.
pub async fn delete(conn: &mut PgConnection, id: i64) -> Result<Option<i64>, sqlx::Error> {
    let mut tx = conn.begin().await?;
    let deleted = sqlx::query_scalar::<_, i64>("DELETE FROM items WHERE id = $1 RETURNING id::int8")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(deleted)
}

//! Database access layer for PostgreSQL.
//!
//! Functions here work on a single `PgConnection`; callers own its lifetime.
//! There is deliberately no pool.

pub mod items;

use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};

/// Open one PostgreSQL connection.
pub async fn connect(options: &PgConnectOptions) -> Result<PgConnection, sqlx::Error> {
    PgConnection::connect_with(options).await
}

/// Create the `items` table if it does not exist yet.
pub async fn ensure_schema(options: &PgConnectOptions) -> Result<(), sqlx::Error> {
    let mut conn = connect(options).await?;

    tracing::info!("ensuring items schema");
    sqlx::raw_sql(include_str!("../../migrations/001_items.sql"))
        .execute(&mut conn)
        .await?;
    tracing::info!("items schema ready");

    conn.close().await
}

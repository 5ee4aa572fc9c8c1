//! Items API — REST server over the PostgreSQL `items` table.

use std::future::IntoFuture;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use items_api::config::{ApiConfig, StoreKind};
use items_api::db;
use items_api::routes::build_router;
use items_api::shutdown::shutdown_signal;
use items_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "items-api starting");

    let config = ApiConfig::from_env()?;

    match config.store {
        StoreKind::Postgres => {
            tracing::info!(
                host = %config.database.host,
                port = config.database.port,
                user = %config.database.user,
                database = %config.database.name,
                "using PostgreSQL store (connection per request)"
            );
            // The database may start after us; requests will report 500 until it does.
            if let Err(e) = db::ensure_schema(&config.database.connect_options()).await {
                tracing::warn!(error = %e, "could not ensure items schema at startup");
            }
        }
        StoreKind::Memory => {
            tracing::warn!("ITEMS_STORE=memory — items live in process memory only");
        }
    }

    let app = build_router(AppState::from_config(&config));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    tokio::select! {
        result = axum::serve(listener, app).into_future() => result?,
        () = shutdown_signal() => {
            tracing::info!("shutdown signal received, closing items-api");
        }
    }

    tracing::info!("items-api stopped");
    Ok(())
}

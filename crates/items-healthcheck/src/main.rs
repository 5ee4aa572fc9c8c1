//! Items API health-check probe.
//!
//! Exits 0 when `GET http://localhost:$API_PORT/status` answers 200 within
//! five seconds, 1 otherwise.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use items_healthcheck::{ProbeConfig, probe};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let result = match ProbeConfig::from_env() {
        Ok(config) => probe(&config.url, config.timeout).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            tracing::debug!("items-api healthy");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!(error = %e, "items-api unhealthy");
            ExitCode::FAILURE
        }
    }
}

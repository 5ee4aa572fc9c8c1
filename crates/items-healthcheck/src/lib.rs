//! Health-check probe for the items API.
//!
//! Issues a single `GET /status` with a bounded timeout. Only an exact
//! `200 OK` counts as healthy; every other outcome (other status codes,
//! timeouts, refused connections, transport errors) is a failure. The binary
//! maps that to exit codes 0 / 1 for a process supervisor.

use std::time::Duration;

use reqwest::StatusCode;

/// Timeout for the single status request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Port the API listens on when `API_PORT` is unset.
pub const DEFAULT_API_PORT: u16 = 3000;

/// Where and how long to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub url: String,
    pub timeout: Duration,
}

/// Why the probe considers the API unhealthy.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("API_PORT must be a port number, got '{0}'")]
    InvalidPort(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {status}")]
    UnexpectedStatus { url: String, status: StatusCode },
}

impl ProbeConfig {
    /// Build from the process environment (`API_PORT`).
    pub fn from_env() -> Result<Self, ProbeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProbeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("API_PORT").filter(|v| !v.is_empty()) {
            None => DEFAULT_API_PORT,
            Some(v) => v.trim().parse().map_err(|_| ProbeError::InvalidPort(v))?,
        };

        Ok(Self {
            url: status_url(port),
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

/// Status route of an API listening on localhost.
pub fn status_url(port: u16) -> String {
    format!("http://localhost:{port}/status")
}

/// Probe `url` once. `Ok(())` means the API answered exactly 200.
pub async fn probe(url: &str, timeout: Duration) -> Result<(), ProbeError> {
    let transport = |source: reqwest::Error| ProbeError::Transport {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(transport)?;

    let response = client.get(url).send().await.map_err(transport)?;

    match response.status() {
        StatusCode::OK => Ok(()),
        status => Err(ProbeError::UnexpectedStatus {
            url: url.to_string(),
            status,
        }),
    }
}

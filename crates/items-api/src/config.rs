//! API server configuration, loaded from environment variables.

use sqlx::postgres::PgConnectOptions;

/// Top-level API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen address (API_HOST, e.g. "0.0.0.0").
    pub host: String,
    /// Listen port (API_PORT).
    pub port: u16,
    /// PostgreSQL connection parameters.
    pub database: DatabaseConfig,
    /// Which item store backs the routes (ITEMS_STORE).
    pub store: StoreKind,
}

/// PostgreSQL connection parameters. Each request opens its own connection
/// from these; nothing is pooled.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

/// Backing store selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreKind {
    #[default]
    Postgres,
    /// Process-local store for development; contents are lost on exit.
    Memory,
}

/// Invalid environment values. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be 'postgres' or 'memory', got '{value}'")]
    InvalidStore { var: &'static str, value: String },
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_db_host() -> String {
    "db".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_password() -> String {
    "password".to_string()
}

fn default_db_name() -> String {
    "myapp".to_string()
}

impl ApiConfig {
    /// Load config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup. Unset and empty
    /// variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let store = match var("ITEMS_STORE") {
            None => StoreKind::default(),
            Some(v) if v.eq_ignore_ascii_case("postgres") => StoreKind::Postgres,
            Some(v) if v.eq_ignore_ascii_case("memory") => StoreKind::Memory,
            Some(value) => {
                return Err(ConfigError::InvalidStore {
                    var: "ITEMS_STORE",
                    value,
                });
            }
        };

        Ok(Self {
            host: var("API_HOST").unwrap_or_else(default_host),
            port: parse_port("API_PORT", var("API_PORT"))?.unwrap_or_else(default_port),
            database: DatabaseConfig {
                host: var("DB_HOST").unwrap_or_else(default_db_host),
                port: parse_port("DB_PORT", var("DB_PORT"))?.unwrap_or_else(default_db_port),
                user: var("DB_USER").unwrap_or_else(default_db_user),
                password: var("DB_PASSWORD").unwrap_or_else(default_db_password),
                name: var("DB_NAME").unwrap_or_else(default_db_name),
            },
            store,
        })
    }

    /// Socket address string for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(var: &'static str, value: Option<String>) -> Result<Option<u16>, ConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { var, value: v })
        })
        .transpose()
}

impl DatabaseConfig {
    /// Connection options for a single PostgreSQL connection.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database: DatabaseConfig::default(),
            store: StoreKind::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: default_db_password(),
            name: default_db_name(),
        }
    }
}

//! Database connection configuration.
//!
//! Supports configuration via environment variables:
//! - `SCHEMADOC_DB_HOST`: Database server hostname
//! - `SCHEMADOC_DB_NAME`: Database name
//! - `SCHEMADOC_DB_PORT`: Port (optional, defaults to 1433)
//! - `SCHEMADOC_DB_USER`: Username
//! - `SCHEMADOC_DB_PASSWORD`: Password

use std::env;

/// Error type for connection configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// SQL Server connection configuration.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Server hostname.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database name.
    pub database: String,
    /// Username.
    pub username: Option<String>,
    /// Password.
    pub password: Option<String>,
    /// Trust the server certificate (for dev/testing).
    pub trust_cert: bool,
}

impl ConnectionConfig {
    /// Create a connection config with defaults for everything but the host
    /// and database.
    pub fn new(host: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 1433,
            database: database.into(),
            username: None,
            password: None,
            trust_cert: false,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `SCHEMADOC_DB_HOST`: Server hostname
    /// - `SCHEMADOC_DB_NAME`: Database name
    ///
    /// Optional:
    /// - `SCHEMADOC_DB_PORT`: Server port
    /// - `SCHEMADOC_DB_USER`: Username
    /// - `SCHEMADOC_DB_PASSWORD`: Password
    pub fn from_env() -> Result<Self, ConnectionError> {
        let host = env::var("SCHEMADOC_DB_HOST")
            .map_err(|_| ConnectionError::MissingEnvVar("SCHEMADOC_DB_HOST".to_string()))?;
        let database = env::var("SCHEMADOC_DB_NAME")
            .map_err(|_| ConnectionError::MissingEnvVar("SCHEMADOC_DB_NAME".to_string()))?;

        let port = match env::var("SCHEMADOC_DB_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| {
                ConnectionError::InvalidConfig(format!("invalid SCHEMADOC_DB_PORT: {value}"))
            })?,
            Err(_) => 1433,
        };

        Ok(Self {
            host,
            port,
            database,
            username: env::var("SCHEMADOC_DB_USER").ok(),
            password: env::var("SCHEMADOC_DB_PASSWORD").ok(),
            trust_cert: false,
        })
    }
}

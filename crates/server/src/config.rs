//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `RXSHOPS_HOST` - Bind address (default: 127.0.0.1)
//! - `RXSHOPS_PORT` - Listen port (default: 5001)
//! - `RXSHOPS_DATA_DIR` - Local fallback data directory (default: ./data)
//! - `BLOB_ENDPOINT` - Object store base URL; unset switches all storage
//!   to the local filesystem fallback
//! - `BLOB_CONTAINER` - Container name (default: rxshops-data)
//! - `BLOB_ACCESS_KEY` - Bearer token for the object store
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_CONTAINER: &str = "rxshops-data";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Remote object store connection settings.
#[derive(Debug, Clone)]
pub struct BlobConfig {
    /// Base URL of the object store.
    pub endpoint: Url,
    /// Container all collection documents live in.
    pub container: String,
    /// Bearer token presented on every request.
    pub access_key: SecretString,
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory for local fallback documents.
    pub data_dir: PathBuf,
    /// Remote store settings; `None` means local-only operation.
    pub blob: Option<BlobConfig>,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// A missing or unparseable `BLOB_ENDPOINT` is not fatal: the server
    /// logs a warning and runs against local files instead, matching the
    /// storage layer's fallback contract.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `RXSHOPS_HOST` or
    /// `RXSHOPS_PORT` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host: IpAddr = get_env_or_default("RXSHOPS_HOST", "127.0.0.1")
            .parse()
            .map_err(|e| ConfigError::InvalidValue("RXSHOPS_HOST".to_string(), format!("{e}")))?;

        let port: u16 = get_env_or_default("RXSHOPS_PORT", &DEFAULT_PORT.to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("RXSHOPS_PORT".to_string(), format!("{e}")))?;

        let data_dir = PathBuf::from(get_env_or_default("RXSHOPS_DATA_DIR", "data"));

        let blob = match std::env::var("BLOB_ENDPOINT") {
            Ok(raw) => match Url::parse(&raw) {
                Ok(endpoint) => Some(BlobConfig {
                    endpoint,
                    container: get_env_or_default("BLOB_CONTAINER", DEFAULT_CONTAINER),
                    access_key: SecretString::from(
                        std::env::var("BLOB_ACCESS_KEY").unwrap_or_default(),
                    ),
                }),
                Err(e) => {
                    tracing::warn!(error = %e, "BLOB_ENDPOINT is not a valid URL; using local storage fallback");
                    None
                }
            },
            Err(_) => None,
        };

        Ok(Self {
            host,
            port,
            data_dir,
            blob,
            sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            sentry_environment: std::env::var("SENTRY_ENVIRONMENT").ok(),
        })
    }

    /// The socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 5001,
            data_dir: PathBuf::from("data"),
            blob: None,
            sentry_dsn: None,
            sentry_environment: None,
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5001");
    }
}

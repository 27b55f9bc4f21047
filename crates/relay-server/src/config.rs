//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Relay server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `TRACE_ADDR` | Server bind address | `0.0.0.0:5000` |
    ///
    /// The SMS provider and assistant read their own variables; see
    /// `sms-gateway` and `sonar-assistant`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("TRACE_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        Ok(Self { addr })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TRACE_ADDR format")]
    InvalidAddr,
}

//! Configuration for the relay client.

use std::env;
use std::time::Duration;

/// Configuration for connecting to the SOS relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Base URL of the relay server (e.g., "http://localhost:5000").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl RelayConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `TRACE_RELAY_URL` | Relay server base URL | `http://localhost:5000` |
    pub fn from_env() -> Self {
        let base_url =
            env::var("TRACE_RELAY_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
        Self::new(base_url)
    }

    /// Get the send-sos endpoint URL.
    pub fn send_sos_url(&self) -> String {
        format!("{}/send-sos", self.base_url)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}

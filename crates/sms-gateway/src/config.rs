//! Configuration for the SMS provider client.

use std::env;
use std::time::Duration;

use crate::error::SmsError;

/// Configuration for connecting to the SMS provider.
#[derive(Debug, Clone)]
pub struct SmsConfig {
    /// Base URL of the provider's REST API.
    pub base_url: String,
    /// API key for bearer authentication.
    pub api_key: String,
    /// Sender id or number the messages originate from.
    pub sender_id: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl SmsConfig {
    /// Create a new configuration.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            sender_id: sender_id.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SMS_API_URL` | Provider base URL | `https://api.sms.example.com` |
    /// | `SMS_API_KEY` | Provider API key | (required) |
    /// | `SMS_SENDER_ID` | Sender id or number | `TRACE` |
    pub fn from_env() -> Result<Self, SmsError> {
        let base_url = env::var("SMS_API_URL")
            .unwrap_or_else(|_| "https://api.sms.example.com".to_string());

        let api_key = env::var("SMS_API_KEY")
            .map_err(|_| SmsError::Config("SMS_API_KEY not set".to_string()))?;

        let sender_id = env::var("SMS_SENDER_ID").unwrap_or_else(|_| "TRACE".to_string());

        Ok(Self::new(base_url, api_key, sender_id))
    }

    /// Get the message send endpoint URL.
    pub fn send_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_url() {
        let config = SmsConfig::new("https://api.sms.example.com", "key", "TRACE");
        assert_eq!(config.send_url(), "https://api.sms.example.com/v1/messages");
    }
}

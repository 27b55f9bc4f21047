//! Error types for the SMS provider client.

use thiserror::Error;

/// Errors that can occur when sending through the SMS provider.
#[derive(Debug, Error)]
pub enum SmsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider rejected the request.
    #[error("provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The provider accepted the request but reported a send failure.
    #[error("send failed: {0}")]
    SendFailed(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

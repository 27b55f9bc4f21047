//! Error types for assistant operations.

use thiserror::Error;

/// Errors that can occur during assistant processing.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The upstream API could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The question could not be processed.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// Processing timed out.
    #[error("processing timed out")]
    Timeout,
}

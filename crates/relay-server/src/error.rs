//! Error types for the relay server.

use assistant_core::AssistantError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sms_gateway::SmsError;
use thiserror::Error;

/// Errors that can occur in the relay server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// SMS provider error.
    #[error("SMS error: {0}")]
    Sms(#[from] SmsError),

    /// Assistant error.
    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = match &self {
            ServerError::Sms(err) => {
                tracing::error!("SMS error: {}", err);
                "Failed to send SOS".to_string()
            }
            ServerError::Assistant(err) => {
                tracing::error!("Assistant error: {}", err);
                err.to_string()
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type for relay operations.
pub type Result<T> = std::result::Result<T, ServerError>;

//! Wire types and the sender trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SmsError;

/// Parameters for sending a message.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SendParams {
    /// Recipient phone number.
    pub to: String,
    /// Sender id or number.
    pub from: String,
    /// The message text.
    pub body: String,
}

/// Raw provider response for a send.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SendResponse {
    /// Provider message id.
    pub id: Option<String>,
    /// Provider-reported status, e.g. "queued" or "failed".
    #[serde(default)]
    pub status: Option<String>,
    /// Provider-reported failure detail.
    pub error: Option<String>,
}

/// Result of an accepted send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsReceipt {
    /// Provider message id.
    pub message_id: String,
    /// Provider-reported status.
    pub status: String,
}

/// A sink for outbound text messages.
///
/// Implemented by [`crate::SmsClient`] and by mocks in relay tests. This
/// trait is object-safe and can be used with `Arc<dyn SmsSender>`.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send a text message to a recipient.
    async fn send_sms(&self, to: &str, body: &str) -> Result<SmsReceipt, SmsError>;
}

//! The dispatch seam between the controller and the relay endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The emergency dispatch payload.
///
/// Constructed fresh per send attempt; never persisted. Serialized
/// camelCase to match the relay endpoint's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SosRequest {
    /// Phone number the emergency message is sent to.
    pub recipient_phone_number: String,
    /// Full message text, including the interpolated place name.
    pub message_body: String,
    /// Latitude of the last known fix.
    pub latitude: f64,
    /// Longitude of the last known fix.
    pub longitude: f64,
}

/// Result of an accepted dispatch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SosReceipt {
    /// Provider message id, if the relay reported one.
    pub message_id: Option<String>,
}

/// Errors that can occur while dispatching an SOS.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request never reached the relay endpoint.
    #[error("network error: {0}")]
    Network(String),

    /// The relay endpoint rejected the request.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The relay endpoint responded with a body we could not interpret.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<&DispatchError> for crate::state::FailureReason {
    fn from(err: &DispatchError) -> Self {
        match err {
            DispatchError::Network(_) => crate::state::FailureReason::Network,
            DispatchError::Server { .. } | DispatchError::MalformedResponse(_) => {
                crate::state::FailureReason::Server
            }
        }
    }
}

/// A sink for emergency dispatches.
///
/// Implemented by the relay HTTP client and by mocks in tests. This trait
/// is object-safe and can be used with `Arc<dyn SosDispatcher>`.
#[async_trait]
pub trait SosDispatcher: Send + Sync {
    /// Issue a single dispatch to the relay endpoint.
    async fn dispatch(&self, request: SosRequest) -> Result<SosReceipt, DispatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = SosRequest {
            recipient_phone_number: "+919142016901".to_string(),
            message_body: "EMERGENCY ALERT!".to_string(),
            latitude: 19.0760,
            longitude: 72.8777,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["recipientPhoneNumber"], "+919142016901");
        assert_eq!(json["messageBody"], "EMERGENCY ALERT!");
        assert_eq!(json["latitude"], 19.0760);
        assert_eq!(json["longitude"], 72.8777);
    }

    #[test]
    fn test_receipt_parses_message_id() {
        let receipt: SosReceipt = serde_json::from_str(r#"{"messageId": "SM123"}"#).unwrap();
        assert_eq!(receipt.message_id.as_deref(), Some("SM123"));

        let empty: SosReceipt = serde_json::from_str("{}").unwrap();
        assert!(empty.message_id.is_none());
    }
}

//! SOS forwarding route.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::state::AppState;

/// Incoming SOS payload from the app.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSosRequest {
    pub recipient_phone_number: String,
    pub message_body: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Response for an accepted SOS.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSosResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// Forward an SOS to the SMS provider.
///
/// Pass-through only: shape validation happens in the extractor, then the
/// message goes straight to the provider with a live-location link.
pub async fn send_sos(
    State(state): State<AppState>,
    Json(req): Json<SendSosRequest>,
) -> Result<Json<SendSosResponse>> {
    info!(recipient = %req.recipient_phone_number, "Forwarding SOS");

    let body = compose_body(&req);
    let receipt = state
        .sms
        .send_sms(&req.recipient_phone_number, &body)
        .await?;

    info!(message_id = %receipt.message_id, "SOS forwarded");
    Ok(Json(SendSosResponse {
        success: true,
        message_id: Some(receipt.message_id),
    }))
}

/// Append a live-location link to the message body.
fn compose_body(req: &SendSosRequest) -> String {
    format!(
        "{}\nLive location: https://maps.google.com/?q={},{}",
        req.message_body, req.latitude, req.longitude
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use crate::state::AppState;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use mock_assistant::EchoAssistant;
    use sms_gateway::{async_trait, SmsError, SmsReceipt, SmsSender};
    use tower::ServiceExt;

    struct RecordingSms {
        count: AtomicUsize,
        fail: bool,
        last: Mutex<Option<(String, String)>>,
    }

    impl RecordingSms {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                count: AtomicUsize::new(0),
                fail: false,
                last: Mutex::new(None),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                count: AtomicUsize::new(0),
                fail: true,
                last: Mutex::new(None),
            })
        }

        fn count(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }

        fn last(&self) -> Option<(String, String)> {
            self.last.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SmsSender for RecordingSms {
        async fn send_sms(&self, to: &str, body: &str) -> std::result::Result<SmsReceipt, SmsError> {
            self.count.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((to.to_string(), body.to_string()));
            if self.fail {
                return Err(SmsError::SendFailed("provider down".to_string()));
            }
            Ok(SmsReceipt {
                message_id: "SM1".to_string(),
                status: "queued".to_string(),
            })
        }
    }

    fn app(sms: Arc<RecordingSms>) -> axum::Router {
        routes::router().with_state(AppState::new(sms, Arc::new(EchoAssistant::new())))
    }

    fn sos_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/send-sos")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "recipientPhoneNumber": "+919142016901",
            "messageBody": "EMERGENCY ALERT!",
            "latitude": 19.0760,
            "longitude": 72.8777
        })
    }

    #[tokio::test]
    async fn test_send_sos_forwards_once() {
        let sms = RecordingSms::ok();
        let response = app(sms.clone())
            .oneshot(sos_request(valid_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["messageId"], "SM1");

        assert_eq!(sms.count(), 1);
        let (to, body) = sms.last().unwrap();
        assert_eq!(to, "+919142016901");
        assert!(body.starts_with("EMERGENCY ALERT!"));
        assert!(body.contains("https://maps.google.com/?q=19.076,72.8777"));
    }

    #[tokio::test]
    async fn test_send_sos_maps_gateway_failure() {
        let sms = RecordingSms::failing();
        let response = app(sms.clone())
            .oneshot(sos_request(valid_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Failed to send SOS");
        assert_eq!(sms.count(), 1);
    }

    #[tokio::test]
    async fn test_send_sos_rejects_malformed_body() {
        let sms = RecordingSms::ok();
        let body = serde_json::json!({ "messageBody": "no recipient" });
        let response = app(sms.clone()).oneshot(sos_request(body)).await.unwrap();

        assert!(response.status().is_client_error());
        assert_eq!(sms.count(), 0);
    }

    #[tokio::test]
    async fn test_root_probe() {
        let sms = RecordingSms::ok();
        let response = app(sms)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Backend server is running.");
    }
}

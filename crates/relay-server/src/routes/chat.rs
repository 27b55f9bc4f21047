//! Travel assistant chat route.

use assistant_core::ChatMessage;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::state::AppState;

/// Incoming chat question, with the client-held conversation so far.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// The assistant's answer.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// Answer a travel-safety question.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    debug!(turns = req.history.len(), "Chat question received");

    let answer = state.assistant.reply(&req.question, &req.history).await?;

    Ok(Json(ChatResponse { answer }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use crate::state::AppState;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use mock_assistant::{Assistant, ScriptedAssistant};
    use sms_gateway::{async_trait, SmsError, SmsReceipt, SmsSender};
    use tower::ServiceExt;

    struct NoSms;

    #[async_trait]
    impl SmsSender for NoSms {
        async fn send_sms(
            &self,
            _to: &str,
            _body: &str,
        ) -> std::result::Result<SmsReceipt, SmsError> {
            Err(SmsError::SendFailed("unused".to_string()))
        }
    }

    fn app(assistant: Arc<dyn Assistant>) -> axum::Router {
        routes::router().with_state(AppState::new(Arc::new(NoSms), assistant))
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let assistant = Arc::new(ScriptedAssistant::new("fallback"));
        assistant.push_answer("Stay in lit areas.");

        let body = serde_json::json!({
            "question": "Is Kyoto safe at night?",
            "history": [
                {"role": "user", "content": "Hi"},
                {"role": "assistant", "content": "Hello! How can I help?"}
            ]
        });

        let response = app(assistant.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["answer"], "Stay in lit areas.");
        assert_eq!(assistant.questions(), vec!["Is Kyoto safe at night?"]);
    }

    #[tokio::test]
    async fn test_chat_history_is_optional() {
        let assistant = Arc::new(ScriptedAssistant::new("Hello!"));

        let body = serde_json::json!({ "question": "Hi" });
        let response = app(assistant)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}

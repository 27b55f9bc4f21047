//! Delayed assistant implementation - wraps another assistant with artificial delay.

use std::time::Duration;

use assistant_core::{async_trait, Assistant, AssistantError, ChatMessage};
use tokio::time::sleep;

/// An assistant that wraps another assistant and adds artificial delay.
///
/// Useful for testing timeout handling and simulating AI processing latency.
pub struct DelayedAssistant<A: Assistant> {
    inner: A,
    delay: Duration,
}

impl<A: Assistant> DelayedAssistant<A> {
    /// Create a new DelayedAssistant wrapping the given assistant.
    pub fn new(inner: A, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create an assistant with a delay in milliseconds.
    pub fn with_millis(inner: A, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }
}

#[async_trait]
impl<A: Assistant> Assistant for DelayedAssistant<A> {
    async fn reply(
        &self,
        question: &str,
        history: &[ChatMessage],
    ) -> Result<String, AssistantError> {
        sleep(self.delay).await;
        self.inner.reply(question, history).await
    }

    fn name(&self) -> &str {
        "DelayedAssistant"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EchoAssistant;
    use std::time::Instant;

    #[tokio::test]
    async fn test_delayed_assistant() {
        let assistant = DelayedAssistant::with_millis(EchoAssistant::new(), 100);

        let start = Instant::now();
        let answer = assistant.reply("test", &[]).await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(answer, "test");
        assert!(elapsed >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_assistant_name() {
        let assistant = DelayedAssistant::with_millis(EchoAssistant::new(), 0);
        assert_eq!(assistant.name(), "DelayedAssistant");
    }
}

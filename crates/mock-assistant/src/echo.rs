//! Echo assistant implementation - echoes questions back.

use assistant_core::{async_trait, Assistant, AssistantError, ChatMessage};

/// A simple assistant that echoes the question back.
///
/// Useful for testing the chat flow without any AI processing.
#[derive(Debug, Clone, Default)]
pub struct EchoAssistant {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoAssistant {
    /// Create a new EchoAssistant with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoAssistant with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_assistant::EchoAssistant;
    ///
    /// let assistant = EchoAssistant::with_prefix("You asked: ");
    /// // Will answer with "You asked: <original question>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Assistant for EchoAssistant {
    async fn reply(
        &self,
        question: &str,
        _history: &[ChatMessage],
    ) -> Result<String, AssistantError> {
        Ok(match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, question),
            None => question.to_string(),
        })
    }

    fn name(&self) -> &str {
        "EchoAssistant"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_no_prefix() {
        let assistant = EchoAssistant::new();
        let answer = assistant.reply("Hello!", &[]).await.unwrap();
        assert_eq!(answer, "Hello!");
    }

    #[tokio::test]
    async fn test_echo_with_prefix() {
        let assistant = EchoAssistant::with_prefix("You asked: ");
        let answer = assistant.reply("Hello!", &[]).await.unwrap();
        assert_eq!(answer, "You asked: Hello!");
    }

    #[tokio::test]
    async fn test_assistant_name() {
        assert_eq!(EchoAssistant::new().name(), "EchoAssistant");
    }

    #[tokio::test]
    async fn test_assistant_is_ready() {
        assert!(EchoAssistant::new().is_ready().await);
    }
}

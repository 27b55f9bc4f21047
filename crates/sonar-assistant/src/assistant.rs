//! SonarAssistant implementation using the Perplexity API.

use assistant_core::{
    async_trait, Assistant, AssistantError, ChatMessage, ConversationHistory,
};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::SonarConfig;

/// An assistant implementation backed by Perplexity's Sonar models.
///
/// `reply` answers from the caller-supplied conversation; `converse`
/// additionally maintains per-conversation history on the assistant side.
pub struct SonarAssistant {
    client: Client,
    config: SonarConfig,
    history: ConversationHistory,
}

impl SonarAssistant {
    /// Create a new SonarAssistant with the given configuration.
    pub fn new(config: SonarConfig) -> Result<Self, AssistantError> {
        let client = Client::builder().build().map_err(|e| {
            AssistantError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        let history = ConversationHistory::new(config.max_history_turns);

        info!(model = %config.model, "SonarAssistant initialized");

        Ok(Self {
            client,
            config,
            history,
        })
    }

    /// Create a SonarAssistant from environment variables.
    ///
    /// See [`SonarConfig::from_env`] for the variables involved.
    pub fn from_env() -> Result<Self, AssistantError> {
        Self::new(SonarConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &SonarConfig {
        &self.config
    }

    /// Answer a question in a named conversation, keeping history here.
    pub async fn converse(
        &self,
        conversation: &str,
        question: &str,
    ) -> Result<String, AssistantError> {
        let history = self.history.get(conversation).await;
        let answer = self.reply(question, &history).await?;
        self.history.add_exchange(conversation, question, &answer).await;
        Ok(answer)
    }

    /// Clear the history of a specific conversation.
    pub async fn clear_history(&self, conversation: &str) {
        self.history.clear(conversation).await;
    }

    /// Build the messages array for a chat completion request.
    fn build_messages(&self, question: &str, history: &[ChatMessage]) -> Vec<ChatMessage> {
        let mut messages = Vec::new();

        if let Some(ref system_prompt) = self.config.system_prompt {
            messages.push(ChatMessage::system(system_prompt.clone()));
        }

        messages.extend_from_slice(history);
        messages.push(ChatMessage::user(question));

        messages
    }

    /// Make a chat completion request to the Perplexity API.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, AssistantError> {
        let url = format!("{}/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(model = %request.model, "Sending request to Perplexity API");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(AssistantError::ProcessingFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(AssistantError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AssistantError::ProcessingFailed(format!("Failed to parse response: {}", e))
        })?;

        Ok(completion)
    }
}

#[async_trait]
impl Assistant for SonarAssistant {
    async fn reply(
        &self,
        question: &str,
        history: &[ChatMessage],
    ) -> Result<String, AssistantError> {
        debug!(turns = history.len(), "Answering question");

        let messages = self.build_messages(question, history);
        let completion = self.chat_completion(messages).await?;

        let answer = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .map(|s| s.to_string())
            .unwrap_or_else(|| {
                warn!("No content in response, using default");
                "I'm sorry, I couldn't generate a response.".to_string()
            });

        if let Some(usage) = completion.usage {
            debug!(
                prompt = usage.prompt_tokens,
                completion = usage.completion_tokens,
                "Token usage"
            );
        }

        Ok(answer)
    }

    fn name(&self) -> &str {
        "SonarAssistant"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant() -> SonarAssistant {
        SonarAssistant::new(SonarConfig::builder().api_key("test-key").build()).unwrap()
    }

    #[test]
    fn test_build_messages_without_system_prompt() {
        let assistant = assistant();
        let history = vec![
            ChatMessage::user("Is Goa safe?"),
            ChatMessage::assistant("Generally, yes."),
        ];

        let messages = assistant.build_messages("And at night?", &history);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].content, "Is Goa safe?");
        assert_eq!(messages[2].role, "user");
        assert_eq!(messages[2].content, "And at night?");
    }

    #[test]
    fn test_build_messages_with_system_prompt() {
        let assistant = SonarAssistant::new(
            SonarConfig::builder()
                .api_key("test-key")
                .system_prompt("You are a travel-safety assistant")
                .build(),
        )
        .unwrap();

        let messages = assistant.build_messages("Hello", &[]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
    }

    #[test]
    fn test_assistant_name() {
        assert_eq!(assistant().name(), "SonarAssistant");
    }
}

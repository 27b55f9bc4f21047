//! Configuration for SonarAssistant.

use std::env;

use assistant_core::AssistantError;

/// Configuration for SonarAssistant.
#[derive(Debug, Clone)]
pub struct SonarConfig {
    /// Perplexity API URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Optional system prompt.
    pub system_prompt: Option<String>,

    /// Maximum tokens for response.
    pub max_tokens: Option<u32>,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum number of conversation turns to keep in history.
    pub max_history_turns: usize,
}

impl Default for SonarConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.perplexity.ai".to_string(),
            api_key: String::new(),
            model: "sonar-pro".to_string(),
            system_prompt: None,
            max_tokens: Some(1024),
            temperature: Some(0.7),
            max_history_turns: 10,
        }
    }
}

impl SonarConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `PERPLEXITY_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `PERPLEXITY_API_URL` - API URL (default: https://api.perplexity.ai)
    /// - `PERPLEXITY_MODEL` - Model name (default: sonar-pro)
    /// - `PERPLEXITY_SYSTEM_PROMPT` - System prompt
    /// - `PERPLEXITY_MAX_TOKENS` - Max tokens (default: 1024)
    /// - `PERPLEXITY_TEMPERATURE` - Temperature (default: 0.7)
    /// - `PERPLEXITY_MAX_HISTORY_TURNS` - Max history turns (default: 10)
    pub fn from_env() -> Result<Self, AssistantError> {
        let api_key = env::var("PERPLEXITY_API_KEY")
            .map_err(|_| AssistantError::Configuration("PERPLEXITY_API_KEY not set".to_string()))?;

        let api_url = env::var("PERPLEXITY_API_URL")
            .unwrap_or_else(|_| "https://api.perplexity.ai".to_string());

        let model = env::var("PERPLEXITY_MODEL").unwrap_or_else(|_| "sonar-pro".to_string());

        let system_prompt = env::var("PERPLEXITY_SYSTEM_PROMPT").ok();

        let max_tokens = env::var("PERPLEXITY_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(1024));

        let temperature = env::var("PERPLEXITY_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(0.7));

        let max_history_turns = env::var("PERPLEXITY_MAX_HISTORY_TURNS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            api_url,
            api_key,
            model,
            system_prompt,
            max_tokens,
            temperature,
            max_history_turns,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> SonarConfigBuilder {
        SonarConfigBuilder::default()
    }
}

/// Builder for SonarConfig.
#[derive(Debug, Default)]
pub struct SonarConfigBuilder {
    config: SonarConfig,
}

impl SonarConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the system prompt.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = Some(prompt.into());
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the max history turns.
    pub fn max_history_turns(mut self, turns: usize) -> Self {
        self.config.max_history_turns = turns;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SonarConfig {
        self.config
    }
}

//! Perplexity Sonar-based travel assistant.
//!
//! This crate implements the [`assistant_core::Assistant`] trait on top of
//! the Perplexity chat-completions API. The assistant answers
//! travel-safety questions for the "TRACE Bot" chat entry and keeps
//! per-conversation history for the interactive flow.
//!
//! # Example
//!
//! ```no_run
//! use assistant_core::Assistant;
//! use sonar_assistant::{SonarAssistant, SonarConfig};
//!
//! # async fn example() -> Result<(), assistant_core::AssistantError> {
//! let assistant = SonarAssistant::new(SonarConfig::from_env()?)?;
//!
//! let answer = assistant.reply("Is Kyoto safe at night?", &[]).await?;
//! println!("Bot: {}", answer);
//! # Ok(())
//! # }
//! ```

mod api_types;
mod assistant;
mod config;

pub use assistant::SonarAssistant;
pub use config::SonarConfig;

// Re-export assistant-core types for convenience
pub use assistant_core::{async_trait, Assistant, AssistantError, ChatMessage, ConversationHistory};

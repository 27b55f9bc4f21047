//! Mock assistant implementations for chat flow testing.
//!
//! This crate provides mock implementations of the `Assistant` trait:
//! - `EchoAssistant` - Echoes questions back
//! - `ScriptedAssistant` - Returns canned answers in order
//! - `DelayedAssistant` - Wraps another assistant with artificial delay
//!
//! For production answers, use the `sonar-assistant` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_assistant::{Assistant, EchoAssistant};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_assistant::AssistantError> {
//!     let assistant = EchoAssistant::new();
//!
//!     let answer = assistant.reply("Is Kyoto safe?", &[]).await?;
//!     println!("Bot: {}", answer);
//!     Ok(())
//! }
//! ```

mod delayed;
mod echo;
mod scripted;

// Re-export assistant-core types for convenience
pub use assistant_core::{async_trait, Assistant, AssistantError, ChatMessage};

// Export mock implementations
pub use delayed::DelayedAssistant;
pub use echo::EchoAssistant;
pub use scripted::ScriptedAssistant;

//! Core trait and types for travel assistant implementations.
//!
//! This crate provides the shared interface for the "TRACE Bot" travel
//! assistant. It defines:
//!
//! - [`Assistant`] - The trait all assistant implementations must implement
//! - [`ChatMessage`] - A single role/content turn of a conversation
//! - [`ConversationHistory`] - Per-conversation history with trimming
//! - [`AssistantError`] - Error types for assistant operations
//!
//! # Example
//!
//! ```rust
//! use assistant_core::{Assistant, AssistantError, ChatMessage};
//! use async_trait::async_trait;
//!
//! struct MyAssistant;
//!
//! #[async_trait]
//! impl Assistant for MyAssistant {
//!     async fn reply(
//!         &self,
//!         question: &str,
//!         _history: &[ChatMessage],
//!     ) -> Result<String, AssistantError> {
//!         Ok(format!("You asked: {}", question))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyAssistant"
//!     }
//! }
//! ```

mod error;
mod history;
mod message;
mod trait_def;

pub use error::AssistantError;
pub use history::ConversationHistory;
pub use message::ChatMessage;
pub use trait_def::Assistant;

// Re-export async_trait for convenience
pub use async_trait::async_trait;

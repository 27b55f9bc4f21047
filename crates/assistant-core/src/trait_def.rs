//! The Assistant trait definition.

use async_trait::async_trait;

use crate::error::AssistantError;
use crate::message::ChatMessage;

/// A trait for answering travel-safety questions.
///
/// Implementations range from canned test assistants to full AI backends.
/// The caller supplies the prior conversation; implementations that keep
/// their own history can ignore it. This trait is object-safe and can be
/// used with `Arc<dyn Assistant>`.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Answer a question given the prior conversation.
    async fn reply(
        &self,
        question: &str,
        history: &[ChatMessage],
    ) -> Result<String, AssistantError>;

    /// Get a human-readable name for this assistant implementation.
    fn name(&self) -> &str;

    /// Check if the assistant is ready to answer questions.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}

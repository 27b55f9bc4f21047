//! Conversation history management.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::message::ChatMessage;

/// Per-conversation history.
#[derive(Debug, Default)]
pub struct ConversationHistory {
    /// Map from conversation id to its message history.
    histories: RwLock<HashMap<String, Vec<ChatMessage>>>,
    /// Maximum number of turns (user + assistant pairs) to keep.
    max_turns: usize,
}

impl ConversationHistory {
    /// Create a new conversation history with the given max turns.
    pub fn new(max_turns: usize) -> Self {
        Self {
            histories: RwLock::new(HashMap::new()),
            max_turns,
        }
    }

    /// Get the history for a conversation.
    pub async fn get(&self, conversation: &str) -> Vec<ChatMessage> {
        let histories = self.histories.read().await;
        histories.get(conversation).cloned().unwrap_or_default()
    }

    /// Add a question and its answer to the history.
    pub async fn add_exchange(&self, conversation: &str, question: &str, answer: &str) {
        let mut histories = self.histories.write().await;
        let history = histories.entry(conversation.to_string()).or_default();

        history.push(ChatMessage::user(question));
        history.push(ChatMessage::assistant(answer));

        // Trim to max turns (each turn is 2 messages)
        let max_messages = self.max_turns * 2;
        if history.len() > max_messages {
            let to_remove = history.len() - max_messages;
            history.drain(0..to_remove);
        }
    }

    /// Clear the history of a specific conversation.
    pub async fn clear(&self, conversation: &str) {
        let mut histories = self.histories.write().await;
        histories.remove(conversation);
    }

    /// Clear all conversation histories.
    pub async fn clear_all(&self) {
        let mut histories = self.histories.write().await;
        histories.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_get_history() {
        let history = ConversationHistory::new(5);

        history.add_exchange("tourist-1", "Is Goa safe?", "Generally, yes.").await;
        history.add_exchange("tourist-1", "And at night?", "Stay in lit areas.").await;

        let messages = history.get("tourist-1").await;
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "user");
        assert_eq!(messages[0].content, "Is Goa safe?");
        assert_eq!(messages[1].role, "assistant");
        assert_eq!(messages[1].content, "Generally, yes.");
    }

    #[tokio::test]
    async fn test_history_trimming() {
        let history = ConversationHistory::new(2); // Keep only 2 turns

        history.add_exchange("t", "Q1", "A1").await;
        history.add_exchange("t", "Q2", "A2").await;
        history.add_exchange("t", "Q3", "A3").await;

        let messages = history.get("t").await;
        assert_eq!(messages.len(), 4); // 2 turns = 4 messages
        assert_eq!(messages[0].content, "Q2"); // First turn trimmed
    }

    #[tokio::test]
    async fn test_separate_conversations() {
        let history = ConversationHistory::new(5);

        history.add_exchange("a", "Hello A", "Hi A!").await;
        history.add_exchange("b", "Hello B", "Hi B!").await;

        assert_eq!(history.get("a").await.len(), 2);
        assert_eq!(history.get("b").await.len(), 2);
        assert_eq!(history.get("a").await[0].content, "Hello A");
    }

    #[tokio::test]
    async fn test_clear_conversation() {
        let history = ConversationHistory::new(5);

        history.add_exchange("t", "Hello", "Hi!").await;
        assert_eq!(history.get("t").await.len(), 2);

        history.clear("t").await;
        assert_eq!(history.get("t").await.len(), 0);
    }
}

//! Scripted assistant implementation - canned answers in order.

use std::collections::VecDeque;
use std::sync::Mutex;

use assistant_core::{async_trait, Assistant, AssistantError, ChatMessage};

/// An assistant that returns a fixed sequence of answers.
///
/// Each call consumes the next scripted answer; once the script is
/// exhausted, every further call returns the fallback answer. Questions
/// are recorded for assertions.
#[derive(Debug, Default)]
pub struct ScriptedAssistant {
    answers: Mutex<VecDeque<String>>,
    fallback: String,
    questions: Mutex<Vec<String>>,
}

impl ScriptedAssistant {
    /// Create an assistant that always answers with `fallback`.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            answers: Mutex::new(VecDeque::new()),
            fallback: fallback.into(),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Queue an answer to return before falling back.
    pub fn push_answer(&self, answer: impl Into<String>) {
        if let Ok(mut answers) = self.answers.lock() {
            answers.push_back(answer.into());
        }
    }

    /// Questions seen so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.questions
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Assistant for ScriptedAssistant {
    async fn reply(
        &self,
        question: &str,
        _history: &[ChatMessage],
    ) -> Result<String, AssistantError> {
        if let Ok(mut questions) = self.questions.lock() {
            questions.push(question.to_string());
        }

        let scripted = self.answers.lock().ok().and_then(|mut a| a.pop_front());
        Ok(scripted.unwrap_or_else(|| self.fallback.clone()))
    }

    fn name(&self) -> &str {
        "ScriptedAssistant"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_answers_in_order() {
        let assistant = ScriptedAssistant::new("I don't know.");
        assistant.push_answer("First answer");
        assistant.push_answer("Second answer");

        assert_eq!(assistant.reply("Q1", &[]).await.unwrap(), "First answer");
        assert_eq!(assistant.reply("Q2", &[]).await.unwrap(), "Second answer");
        assert_eq!(assistant.reply("Q3", &[]).await.unwrap(), "I don't know.");
    }

    #[tokio::test]
    async fn test_records_questions() {
        let assistant = ScriptedAssistant::new("ok");
        assistant.reply("Is Goa safe?", &[]).await.unwrap();
        assistant.reply("And at night?", &[]).await.unwrap();

        assert_eq!(assistant.questions(), vec!["Is Goa safe?", "And at night?"]);
    }
}

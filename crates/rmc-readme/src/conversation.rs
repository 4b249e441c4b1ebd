//! Chat transcript driving the pipeline.

use rmc_core::ChatMessage;
use rmc_github::JsonFetch;
use rmc_llm::Generator;

use crate::pipeline::ReadmeAgent;

/// Prefix of every AI turn that reports a failure.
pub const ERROR_PREFIX: &str = "Error: ";

/// Append-only list of user and AI turns.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    failures: usize,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of AI turns that reported an error.
    #[must_use]
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Submit one repository URL.
    ///
    /// Empty input is ignored and returns `None`. Otherwise a user turn is
    /// appended, the pipeline runs, and the AI turn (document or
    /// `"Error: ..."`) is appended and returned.
    pub async fn submit<F, G>(
        &mut self,
        agent: &ReadmeAgent<F, G>,
        input: &str,
    ) -> Option<&ChatMessage>
    where
        F: JsonFetch,
        G: Generator,
    {
        if input.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(input));

        let reply = match agent.run(input).await {
            Ok(document) => document,
            Err(error) => {
                tracing::warn!(%error, input, "README generation failed");
                self.failures += 1;
                format!("{ERROR_PREFIX}{error}")
            }
        };
        self.messages.push(ChatMessage::ai(reply));
        self.messages.last()
    }
}

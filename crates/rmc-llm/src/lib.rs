//! # rmc-llm
//!
//! Language-model generation for readmecraft.
//!
//! [`Generator`] is the seam the README pipeline calls; [`GeminiClient`] is
//! the production implementation.

mod error;
mod gemini;

pub use error::LlmError;
pub use gemini::GeminiClient;

use std::future::Future;

/// Text returned when the API response carries no candidate text.
pub const EMPTY_OBJECT: &str = "{}";

/// One prompt in, one completion out.
pub trait Generator: Send + Sync {
    /// Submit `prompt` as a single user message and return the first
    /// candidate's text.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] when the call itself fails.
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// [`Generator`] returning a canned reply and recording prompts.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    reply: Option<String>,
    prompts: std::sync::Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl ScriptedGenerator {
    /// Always answer with `reply`.
    #[must_use]
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            prompts: std::sync::Mutex::default(),
        }
    }

    /// Always fail with an API error.
    #[must_use]
    pub fn failing() -> Self {
        Self::default()
    }

    /// Prompts received so far.
    ///
    /// # Panics
    ///
    /// Panics if the prompt log mutex is poisoned.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Generator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .map_err(|_| LlmError::Parse("prompt log poisoned".to_string()))?
            .push(prompt.to_string());

        self.reply.clone().ok_or_else(|| LlmError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        })
    }
}

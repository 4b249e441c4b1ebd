//! Gemini generation configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    String::from("gemini-2.5-flash")
}

fn default_api_base() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// Google AI Studio API key.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// API root; requests go to `{api_base}/models/{model}:generateContent`.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.model.is_empty()
    }
}

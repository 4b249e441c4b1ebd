//! Fields contributed by the language model.

use serde::{Deserialize, Serialize};

/// Model output after sanitization. Every field may be absent or empty; the
/// renderer substitutes defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFields {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub usage: Vec<String>,
}

impl GeneratedFields {
    /// Description, if present and non-empty.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Non-empty feature entries, in order.
    pub fn features(&self) -> impl Iterator<Item = &str> {
        non_empty(&self.features)
    }

    /// Non-empty usage entries, in order.
    pub fn usage(&self) -> impl Iterator<Item = &str> {
        non_empty(&self.usage)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description().is_none()
            && self.features().next().is_none()
            && self.usage().next().is_none()
    }
}

fn non_empty(items: &[String]) -> impl Iterator<Item = &str> {
    items.iter().map(String::as_str).filter(|s| !s.is_empty())
}

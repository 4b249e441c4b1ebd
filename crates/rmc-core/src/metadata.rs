//! Merged repository metadata record.

use serde::{Deserialize, Serialize};

/// License value used when the platform reports no license.
pub const UNLICENSED: &str = "unlicensed";

/// Placeholder structure line used when the tree walk fails.
pub const STRUCTURE_UNAVAILABLE: &str = "Project structure unavailable due to API limitations";

/// Final structure line appended when the walk hit a configured bound.
pub const STRUCTURE_TRUNCATED: &str = "… (truncated)";

/// Repository info, language list and rendered file tree for one repository.
///
/// Built once per request and never mutated afterwards. Serialized verbatim
/// into the generation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    pub owner: String,
    pub repo: String,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub repo_url: String,
    /// SPDX identifier, or [`UNLICENSED`].
    pub license: String,
    /// Language names in the order the languages endpoint returned them.
    pub languages: Vec<String>,
    /// Rendered tree lines, pre-order.
    pub structure: Vec<String>,
}

impl RepositoryMetadata {
    /// Display name: `name`, then `repo`, then `full_name`, then `"Project"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        [&self.name, &self.repo, &self.full_name]
            .into_iter()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or("Project")
    }

    #[must_use]
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

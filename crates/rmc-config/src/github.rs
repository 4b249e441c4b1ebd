//! GitHub API configuration.

use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    String::from("https://api.github.com")
}

fn default_user_agent() -> String {
    String::from("readmecraft/0.1")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubConfig {
    /// Personal access token sent as `Authorization: token <token>`.
    #[serde(default)]
    pub token: String,

    /// REST API root, without trailing slash.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_base: default_api_base(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GitHubConfig {
    /// A token is present. Requests still go out without one, at the
    /// unauthenticated rate limit.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }
}

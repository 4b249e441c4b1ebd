//! GitHub API error types.

use thiserror::Error;

/// Errors that can occur when talking to the GitHub REST API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub returned a non-success status code.
    #[error("GitHub API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by GitHub.
        status: u16,
        /// `message` field of the error body, or the raw body.
        message: String,
    },

    /// The request quota is exhausted.
    #[error("GitHub rate limit exceeded{}", reset_suffix(.reset_epoch_secs))]
    RateLimited {
        /// HTTP status as received: 429, or 403 with the quota used up.
        status: u16,
        /// `x-ratelimit-reset` header value, when present.
        reset_epoch_secs: Option<u64>,
    },

    /// Failed to parse a GitHub response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl GitHubError {
    /// HTTP status behind this error, if GitHub answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::RateLimited { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }
}

#[allow(clippy::ref_option)]
fn reset_suffix(reset_epoch_secs: &Option<u64>) -> String {
    reset_epoch_secs.map_or_else(String::new, |reset| format!(" (resets at unix time {reset})"))
}

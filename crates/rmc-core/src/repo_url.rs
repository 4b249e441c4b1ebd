//! GitHub URL resolution.
//!
//! Input is free text. The first `github.com/<owner>/<repo>` occurrence wins,
//! where the repo segment must be followed by end of input, `/` or `.`.
//! Case, scheme and a trailing `.git` are left exactly as captured.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ResolveError;

static GITHUB_REPO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/([^/]+)/([^/]+)(?:$|\.|/)").expect("static pattern compiles")
});

/// `(owner, repo)` pair identifying one GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoIdentifier {
    pub owner: String,
    pub repo: String,
}

impl RepoIdentifier {
    /// Extract the owner and repository name from a GitHub URL.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidUrl`] when the input has no
    /// `github.com/<owner>/<repo>` shape.
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        let captures = GITHUB_REPO_PATTERN
            .captures(input)
            .ok_or_else(|| ResolveError::InvalidUrl(input.to_string()))?;

        Ok(Self {
            owner: captures[1].to_string(),
            repo: captures[2].to_string(),
        })
    }
}

impl FromStr for RepoIdentifier {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

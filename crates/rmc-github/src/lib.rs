//! # rmc-github
//!
//! GitHub REST client for readmecraft.
//!
//! Turns a [`RepoIdentifier`] into a [`rmc_core::RepositoryMetadata`] record:
//! - repository info (`/repos/{owner}/{repo}`)
//! - language breakdown (`/repos/{owner}/{repo}/languages`)
//! - rendered file tree (`/repos/{owner}/{repo}/contents/{path}`, walked)

#[cfg(any(test, feature = "test-support"))]
pub mod fixture;

mod error;
mod http;
mod repo_data;
mod walker;

pub use error::GitHubError;
pub use http::{GITHUB_ACCEPT, HttpFetcher, JsonFetch, check_response};
pub use repo_data::{LicenseInfo, RepoInfo};
pub use walker::TreeListing;

use rmc_config::{GitHubConfig, WalkConfig};
use rmc_core::RepoIdentifier;

/// GitHub API client, generic over the transport.
#[derive(Debug, Clone)]
pub struct GitHubClient<F = HttpFetcher> {
    fetch: F,
    api_base: String,
    walk: WalkConfig,
}

impl GitHubClient<HttpFetcher> {
    /// Build a reqwest-backed client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Http`] if the underlying client fails to build.
    pub fn from_config(github: &GitHubConfig, walk: WalkConfig) -> Result<Self, GitHubError> {
        Ok(Self::with_fetcher(
            HttpFetcher::new(github)?,
            &github.api_base,
            walk,
        ))
    }
}

impl<F: JsonFetch> GitHubClient<F> {
    /// Build a client over any [`JsonFetch`] implementation.
    #[must_use]
    pub fn with_fetcher(fetch: F, api_base: &str, walk: WalkConfig) -> Self {
        Self {
            fetch,
            api_base: api_base.trim_end_matches('/').to_string(),
            walk,
        }
    }

    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetch
    }

    /// `{api_base}/repos/{owner}/{repo}{suffix}` with encoded owner and repo.
    fn repo_url(&self, id: &RepoIdentifier, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}{suffix}",
            self.api_base,
            urlencoding::encode(&id.owner),
            urlencoding::encode(&id.repo),
        )
    }
}

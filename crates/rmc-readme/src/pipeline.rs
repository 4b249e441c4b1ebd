//! End-to-end README generation.

use rmc_core::{RepoIdentifier, ResolveError};
use rmc_github::{GitHubClient, GitHubError, HttpFetcher, JsonFetch};
use rmc_llm::{GeminiClient, Generator, LlmError};
use thiserror::Error;

use crate::prompt::build_prompt;
use crate::render::render_readme;
use crate::sanitize::sanitize;

/// Everything that can stop a README from being produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input is not a GitHub repository URL. No request was sent.
    #[error(transparent)]
    InvalidUrl(#[from] ResolveError),

    /// Repository info or languages could not be fetched.
    #[error("failed to fetch repo: {0}")]
    Upstream(#[from] GitHubError),

    /// Metadata could not be serialized into the prompt.
    #[error("failed to build prompt: {0}")]
    Prompt(#[from] serde_json::Error),

    /// The generation call failed.
    #[error("generation failed: {0}")]
    Generation(#[from] LlmError),
}

/// Resolver → metadata → prompt → model → sanitizer → renderer.
///
/// Holds no per-request state; concurrent [`Self::run`] calls are independent.
#[derive(Debug)]
pub struct ReadmeAgent<F = HttpFetcher, G = GeminiClient> {
    github: GitHubClient<F>,
    generator: G,
}

impl<F: JsonFetch, G: Generator> ReadmeAgent<F, G> {
    #[must_use]
    pub const fn new(github: GitHubClient<F>, generator: G) -> Self {
        Self { github, generator }
    }

    #[must_use]
    pub const fn github(&self) -> &GitHubClient<F> {
        &self.github
    }

    #[must_use]
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate a README for the repository named in `repo_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] for an invalid URL, a failed repository or
    /// languages lookup, or a failed generation call. Malformed model output
    /// is not an error; the document falls back to defaults.
    pub async fn run(&self, repo_url: &str) -> Result<String, PipelineError> {
        let id = RepoIdentifier::parse(repo_url)?;
        tracing::info!(%id, "generating README");

        let metadata = self.github.fetch_repo_data(&id).await?;
        let prompt = build_prompt(&metadata)?;
        let raw = self.generator.generate(&prompt).await?;
        let generated = sanitize(&raw);
        if generated.is_empty() {
            tracing::warn!(%id, "model output contributed no fields; rendering defaults");
        }

        Ok(render_readme(&metadata, &generated))
    }
}

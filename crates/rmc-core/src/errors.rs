//! Input resolution errors.
//!
//! Upstream, generation and configuration errors live in their own crates.
//! They converge in `rmc-readme::PipelineError`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The input does not contain a `github.com/<owner>/<repo>` path.
    #[error("Invalid GitHub repo URL: {0}")]
    InvalidUrl(String),
}

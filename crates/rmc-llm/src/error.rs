//! Generation error types.

use thiserror::Error;

/// Errors raised by the generation call itself. Malformed model *output* is
/// not an error here; it is absorbed during sanitization.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The generation API returned a non-success status code.
    #[error("generation API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API response envelope could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

//! Errors raised while loading `readmecraft.toml` and environment overrides.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `READMECRAFT_*` variable failed to parse or merge.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section needed for this run is missing its credential, e.g.
    /// `gemini` without `GEMINI_API_KEY`.
    #[error("Configuration section '{section}' is not configured (missing required fields)")]
    NotConfigured { section: String },

    /// A value parsed but is unusable, such as a non-HTTP `api_base` or a
    /// `--config` path that does not exist.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

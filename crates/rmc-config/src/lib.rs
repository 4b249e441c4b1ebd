//! # rmc-config
//!
//! Layered configuration loading for readmecraft using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`READMECRAFT_*` prefix, `__` as separator)
//! 2. Conventional variables `GITHUB_TOKEN` and `GEMINI_API_KEY`
//! 3. An explicit file passed with `--config`
//! 4. Project-level `./readmecraft.toml`
//! 5. User-level `~/.config/readmecraft/config.toml`
//! 6. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `READMECRAFT_GITHUB__TOKEN` -> `github.token`, `READMECRAFT_WALK__MAX_DEPTH` -> `walk.max_depth`.
//!
//! # Usage
//!
//! ```no_run
//! use rmc_config::ReadmeConfig;
//!
//! let config = ReadmeConfig::load_with_dotenv().expect("config");
//! if !config.github.is_configured() {
//!     eprintln!("GitHub token missing; using unauthenticated rate limit");
//! }
//! ```

mod error;
mod gemini;
mod github;
mod walk;

pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use github::GitHubConfig;
pub use walk::WalkConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name, resolved against the current directory.
pub const LOCAL_CONFIG_FILE: &str = "readmecraft.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReadmeConfig {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub walk: WalkConfig,
}

impl ReadmeConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with an extra TOML file layered above the
    /// project-local file and below the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `path` does not exist, a source fails to
    /// parse, or a value is invalid.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                reason: format!("file not found: {}", path.display()),
            });
        }
        Self::extract(Self::layered(Some(path)))
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::layered(None)
    }

    /// Fail with [`ConfigError::NotConfigured`] unless generation can run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the Gemini section lacks
    /// an API key or model.
    pub fn require_gemini(&self) -> Result<&GeminiConfig, ConfigError> {
        if self.gemini.is_configured() {
            Ok(&self.gemini)
        } else {
            Err(ConfigError::NotConfigured {
                section: "gemini".to_string(),
            })
        }
    }

    /// Check values that figment cannot validate on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for non-HTTP API base URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("github.api_base", &self.github.api_base),
            ("gemini.api_base", &self.gemini.api_base),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("expected an http(s) URL, got '{value}'"),
                });
            }
        }
        Ok(())
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn layered(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit --config file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Conventional credential variables
        figment = figment
            .merge(Env::raw().only(&["GITHUB_TOKEN"]).map(|_| "github.token".into()))
            .merge(Env::raw().only(&["GEMINI_API_KEY"]).map(|_| "gemini.api_key".into()));

        // Layer 5: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("READMECRAFT_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("readmecraft").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ReadmeConfig::default();
        assert!(!config.github.is_configured());
        assert!(!config.gemini.is_configured());
        assert_eq!(config.walk, WalkConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn require_gemini_reports_section() {
        let err = ReadmeConfig::default().require_gemini().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { section } if section == "gemini"));
    }

    #[test]
    fn validate_rejects_non_http_base() {
        let mut config = ReadmeConfig::default();
        config.github.api_base = "ftp://example.com".into();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "github.api_base"));
    }

    #[test]
    fn load_with_missing_file_fails() {
        let err = ReadmeConfig::load_with_file(Path::new("/nonexistent/readmecraft.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}

use std::path::Path;

use anyhow::Context;
use rmc_config::ReadmeConfig;
use rmc_github::GitHubClient;
use rmc_llm::GeminiClient;
use rmc_readme::ReadmeAgent;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ReadmeConfig> {
    let config = match &flags.config {
        Some(path) => {
            dotenvy::dotenv().ok();
            ReadmeConfig::load_with_file(Path::new(path))
        }
        None => ReadmeConfig::load_with_dotenv(),
    }
    .context("failed to load readmecraft configuration")?;

    tracing::debug!(
        github_api = %config.github.api_base,
        model = %config.gemini.model,
        max_entries = config.walk.max_entries,
        max_depth = config.walk.max_depth,
        "configuration loaded"
    );
    Ok(config)
}

/// Wire the production transports into one agent.
pub fn build_agent(config: &ReadmeConfig) -> anyhow::Result<ReadmeAgent> {
    let gemini = config
        .require_gemini()
        .context("set GEMINI_API_KEY or [gemini].api_key")?;

    let github = GitHubClient::from_config(&config.github, config.walk)
        .context("failed to build GitHub client")?;
    let generator = GeminiClient::new(gemini).context("failed to build Gemini client")?;

    Ok(ReadmeAgent::new(github, generator))
}

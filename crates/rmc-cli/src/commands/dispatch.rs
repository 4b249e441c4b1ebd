use rmc_github::JsonFetch;
use rmc_llm::Generator;
use rmc_readme::ReadmeAgent;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch<F, G>(
    command: Commands,
    agent: &ReadmeAgent<F, G>,
    flags: &GlobalFlags,
) -> anyhow::Result<()>
where
    F: JsonFetch,
    G: Generator,
{
    match command {
        Commands::Generate(args) => commands::generate::handle(&args, agent, flags).await,
        Commands::Chat => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            commands::chat::handle(stdin, agent, flags).await
        }
    }
}

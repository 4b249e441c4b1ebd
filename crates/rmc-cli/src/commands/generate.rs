use anyhow::bail;
use rmc_github::JsonFetch;
use rmc_llm::Generator;
use rmc_readme::{Conversation, ERROR_PREFIX, ReadmeAgent};

use crate::cli::{GenerateArgs, GlobalFlags, OutputFormat};
use crate::output::output_transcript;
use crate::progress::Progress;

/// Handle `readmecraft generate <URL>`.
///
/// The error turn is still printed in `json` mode so the transcript is
/// complete; the process then exits non-zero.
pub async fn handle<F, G>(
    args: &GenerateArgs,
    agent: &ReadmeAgent<F, G>,
    flags: &GlobalFlags,
) -> anyhow::Result<()>
where
    F: JsonFetch,
    G: Generator,
{
    let url = args.url.trim();
    if url.is_empty() {
        bail!("repository URL must not be empty");
    }

    let mut conversation = Conversation::new();
    let progress = Progress::spinner("⏳ Generating...");
    conversation.submit(agent, url).await;

    if conversation.failures() > 0 {
        progress.finish_err("README generation failed");
        if flags.format == OutputFormat::Json {
            output_transcript(conversation.messages(), flags.format)?;
        }
        let reason = conversation
            .messages()
            .last()
            .map(|message| message.text.trim_start_matches(ERROR_PREFIX).to_string())
            .unwrap_or_default();
        bail!(reason);
    }

    progress.finish_clear();
    output_transcript(conversation.messages(), flags.format)
}

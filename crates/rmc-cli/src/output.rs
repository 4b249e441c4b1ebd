use rmc_core::ChatMessage;
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
pub struct Transcript<'a> {
    pub messages: &'a [ChatMessage],
}

/// Render the transcript: the last AI turn for `raw`, everything for `json`.
pub fn render_transcript(messages: &[ChatMessage], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&Transcript { messages })?),
        OutputFormat::Raw => Ok(messages
            .last()
            .map(|message| message.text.clone())
            .unwrap_or_default()),
    }
}

/// Print the transcript in the requested format.
pub fn output_transcript(messages: &[ChatMessage], format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_transcript(messages, format)?;
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
    Ok(())
}

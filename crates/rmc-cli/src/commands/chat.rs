use std::io::Write;

use rmc_core::Role;
use rmc_github::JsonFetch;
use rmc_llm::Generator;
use rmc_readme::{Conversation, ReadmeAgent};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{output_transcript, render_transcript};
use crate::progress::Progress;
use crate::ui;

const INPUT_PROMPT: &str = "🔗 Enter GitHub repo link...";

/// What one line of chat input asks for.
#[derive(Debug, PartialEq, Eq)]
enum ChatCommand<'a> {
    Quit,
    History,
    Skip,
    Submit(&'a str),
}

fn parse_line(line: &str) -> ChatCommand<'_> {
    match line.trim() {
        "/quit" | "/exit" => ChatCommand::Quit,
        "/history" => ChatCommand::History,
        "" => ChatCommand::Skip,
        url => ChatCommand::Submit(url),
    }
}

/// Handle `readmecraft chat`: one repository URL per input line.
///
/// Generation failures become `Error: ...` turns and never end the session.
/// On end of input a `json` run prints the whole transcript.
pub async fn handle<R, F, G>(
    mut input: R,
    agent: &ReadmeAgent<F, G>,
    flags: &GlobalFlags,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    F: JsonFetch,
    G: Generator,
{
    let mut conversation = Conversation::new();
    let mut line = String::new();

    loop {
        if ui::prefs().interactive {
            eprint!("{INPUT_PROMPT} ");
            std::io::stderr().flush().ok();
        }

        line.clear();
        if input.read_line(&mut line).await? == 0 {
            break;
        }

        match parse_line(&line) {
            ChatCommand::Quit => break,
            ChatCommand::Skip => {}
            ChatCommand::History => {
                output_transcript(conversation.messages(), OutputFormat::Json)?;
            }
            ChatCommand::Submit(url) => {
                let progress = Progress::spinner("⏳ Generating...");
                let reply = conversation.submit(agent, url).await;
                progress.finish_clear();

                if flags.format == OutputFormat::Raw
                    && let Some(reply) = reply.filter(|reply| reply.role == Role::Ai)
                {
                    let rendered = render_transcript(std::slice::from_ref(reply), flags.format)?;
                    println!("{}", rendered.trim_end());
                }
            }
        }
    }

    if flags.format == OutputFormat::Json {
        output_transcript(conversation.messages(), flags.format)?;
    }
    tracing::debug!(
        turns = conversation.messages().len(),
        failures = conversation.failures(),
        "chat session ended"
    );
    Ok(())
}

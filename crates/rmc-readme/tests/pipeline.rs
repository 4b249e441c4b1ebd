//! End-to-end pipeline tests over fixture transports.

use pretty_assertions::assert_eq;
use rmc_config::WalkConfig;
use rmc_core::metadata::STRUCTURE_UNAVAILABLE;
use rmc_core::{ChatMessage, Role};
use rmc_github::GitHubClient;
use rmc_github::fixture::FixtureFetcher;
use rmc_llm::ScriptedGenerator;
use rmc_readme::{Conversation, ERROR_PREFIX, PipelineError, ReadmeAgent};
use serde_json::{Value, json};

const BASE: &str = "https://api.test";
const REPO: &str = "https://api.test/repos/octo/demo";
const URL: &str = "https://github.com/octo/demo";

fn fixture() -> FixtureFetcher {
    FixtureFetcher::new()
        .with_json(
            REPO,
            json!({
                "name": "demo",
                "full_name": "octo/demo",
                "description": "Demo repository",
                "html_url": "https://github.com/octo/demo",
                "license": null
            }),
        )
        .with_json(format!("{REPO}/languages"), json!({ "JavaScript": 1200, "HTML": 80 }))
        .with_json(
            format!("{REPO}/contents/"),
            json!([
                { "name": "package.json", "path": "package.json", "type": "file" },
                { "name": "src", "path": "src", "type": "dir" }
            ]),
        )
        .with_json(
            format!("{REPO}/contents/src/"),
            json!([{ "name": "index.js", "path": "src/index.js", "type": "file" }]),
        )
}

fn agent(
    fetcher: FixtureFetcher,
    generator: ScriptedGenerator,
) -> ReadmeAgent<FixtureFetcher, ScriptedGenerator> {
    ReadmeAgent::new(
        GitHubClient::with_fetcher(fetcher, BASE, WalkConfig::default()),
        generator,
    )
}

fn section<'a>(doc: &'a str, header: &str) -> &'a str {
    let start = doc.find(header).unwrap() + header.len() + 1;
    let rest = &doc[start..];
    let end = rest.find("\n## ").map_or(rest.len(), |i| i + 1);
    &rest[..end]
}

#[tokio::test]
async fn fenced_generation_flows_into_document() {
    let reply = "```json\n{\"description\":\"Demo renders widgets.\",\"features\":[\"Widgets\",\"\"],\"usage\":[\"npm start\"]}\n```";
    let agent = agent(fixture(), ScriptedGenerator::replying(reply));

    let doc = agent.run(URL).await.unwrap();

    assert!(doc.starts_with("# demo\n\nDemo renders widgets.\n"));
    assert_eq!(section(&doc, "## Features"), "- Widgets\n\n");
    assert_eq!(section(&doc, "## Usage"), "```bash\nnpm start\n```\n\n");
    assert_eq!(section(&doc, "## Tech Stack"), "JavaScript, HTML\n\n");
    assert_eq!(
        section(&doc, "## Project Structure"),
        "```\n├── 📄 package.json\n└── 📂 src/\n    └── 📄 index.js\n```\n\n"
    );
    assert_eq!(section(&doc, "## License"), "unlicensed\n");
    assert!(doc.contains("cd demo\nnpm install\n```"));
}

#[tokio::test]
async fn prompt_carries_metadata() {
    let agent = agent(fixture(), ScriptedGenerator::replying("{}"));
    agent.run(URL).await.unwrap();

    let prompts = agent.generator().prompts();
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];
    assert!(prompt.contains("\"full_name\": \"octo/demo\""));
    assert!(prompt.contains("\"license\": \"unlicensed\""));
    assert!(prompt.contains("└── 📂 src/"));
}

#[tokio::test]
async fn malformed_generation_still_renders_defaults() {
    let agent = agent(
        fixture(),
        ScriptedGenerator::replying("{\"description\": \"trunc"),
    );

    let doc = agent.run(URL).await.unwrap();

    assert!(doc.contains("\nA production-ready open-source project.\n"));
    assert!(doc.contains("- Clean and modular code\n- Easy to extend\n- Open-source and community-driven"));
    assert!(doc.contains("```bash\n# Run the project\nnpm install && npm start\n```"));
    assert!(doc.ends_with("## License\nunlicensed\n"));
}

#[tokio::test]
async fn tree_failure_keeps_repo_info_and_languages() {
    let fetcher = fixture().with_status(format!("{REPO}/contents/"), 403, "Forbidden");
    let agent = agent(fetcher, ScriptedGenerator::replying("{}"));

    let doc = agent.run(URL).await.unwrap();

    assert_eq!(
        section(&doc, "## Project Structure"),
        format!("```\n{STRUCTURE_UNAVAILABLE}\n```\n\n")
    );
    assert_eq!(section(&doc, "## Tech Stack"), "JavaScript, HTML\n\n");
}

#[tokio::test]
async fn invalid_url_makes_zero_calls() {
    let agent = agent(fixture(), ScriptedGenerator::replying("{}"));
    let err = agent.run("gitlab.com/octo/demo").await.unwrap_err();

    assert!(matches!(err, PipelineError::InvalidUrl(_)));
    assert_eq!(agent.github().fetcher().call_count(), 0);
}

#[tokio::test]
async fn concurrent_runs_are_independent() {
    let other_repo = "https://api.test/repos/octo/other";
    let fetcher = fixture()
        .with_json(
            other_repo,
            json!({ "name": "other", "full_name": "octo/other", "html_url": "https://github.com/octo/other", "license": { "spdx_id": "Apache-2.0" } }),
        )
        .with_json(format!("{other_repo}/languages"), json!({ "Rust": 10 }))
        .with_json(format!("{other_repo}/contents/"), Value::Array(Vec::new()));
    let agent = agent(fetcher, ScriptedGenerator::replying("{}"));

    let (demo, other) = tokio::join!(agent.run(URL), agent.run("https://github.com/octo/other"));
    let (demo, other) = (demo.unwrap(), other.unwrap());

    assert!(demo.starts_with("# demo\n"));
    assert!(demo.ends_with("unlicensed\n"));
    assert!(other.starts_with("# other\n"));
    assert!(other.ends_with("Apache-2.0\n"));
    assert!(other.contains("(structure unavailable)"));
}

#[tokio::test]
async fn conversation_appends_user_then_ai_turns() {
    let agent = agent(fixture(), ScriptedGenerator::replying("{}"));
    let mut conversation = Conversation::new();

    assert!(conversation.submit(&agent, "").await.is_none());
    assert!(conversation.messages().is_empty());

    let reply = conversation.submit(&agent, URL).await.unwrap().clone();
    assert_eq!(reply.role, Role::Ai);
    assert!(reply.text.starts_with("# demo"));
    assert_eq!(conversation.failures(), 0);

    conversation.submit(&agent, "not a url").await;
    let messages = conversation.messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0], ChatMessage::user(URL));
    assert_eq!(messages[2], ChatMessage::user("not a url"));
    assert_eq!(messages[3].role, Role::Ai);
    assert_eq!(messages[3].text, "Error: Invalid GitHub repo URL: not a url");
    assert_eq!(conversation.failures(), 1);
}

#[tokio::test]
async fn generation_call_failure_becomes_error_turn() {
    let agent = agent(fixture(), ScriptedGenerator::failing());
    let mut conversation = Conversation::new();

    let reply = conversation.submit(&agent, URL).await.unwrap();

    assert!(reply.text.starts_with(ERROR_PREFIX));
    assert!(reply.text.contains("generation failed"));
    assert!(reply.text.contains("model overloaded"));
}

#[tokio::test]
async fn upstream_failure_becomes_error_turn() {
    let fetcher = fixture().with_status(REPO, 404, "Not Found");
    let agent = agent(fetcher, ScriptedGenerator::replying("{}"));
    let mut conversation = Conversation::new();

    let reply = conversation.submit(&agent, URL).await.unwrap();

    assert_eq!(
        reply.text,
        "Error: failed to fetch repo: GitHub API error (404): Not Found"
    );
    assert!(agent.generator().prompts().is_empty());
}

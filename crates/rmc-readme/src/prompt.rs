//! Generation prompt.
//!
//! The schema example carries the exact keys the sanitizer and renderer read:
//! `description`, `features`, `usage`.

use rmc_core::RepositoryMetadata;

const INSTRUCTIONS: &str = "\
You are a professional README generator for open-source GitHub repositories.
Your job is to write a clear, accurate, and detailed project description based ONLY on the provided metadata.

### Rules:
- Always stay factual and consistent with metadata (name, description, repo_url, languages, project structure).
- Do not invent features or usage steps that are not supported by metadata.
- Description must be 6-7 lines, professional, and concise, explaining the purpose, core functionality, and potential use cases of the project.
- Features must be listed as clear, developer-friendly bullet points.
- Usage instructions must be practical and based on common workflows (npm, yarn, docker, etc. depending on tech stack).
- Do NOT wrap the output in code blocks.
- Output strictly valid JSON in the exact schema.
";

/// Example output embedded in the prompt.
pub const SCHEMA_EXAMPLE: &str = r#"{
  "description": "This project is a Node.js-based API that provides real-time weather updates. It integrates external APIs to fetch data, caches responses for efficiency, and exposes REST endpoints for client applications. Built with Express and MongoDB, the project ensures scalability and maintainability. Developers can extend it with custom routes or integrate it into larger applications. Ideal for learning API development and rapid prototyping.",
  "features": [
    "REST API endpoints for real-time weather data",
    "Express.js backend with modular routes",
    "MongoDB integration for data persistence",
    "Caching layer for optimized performance",
    "Error handling and validation middleware"
  ],
  "usage": [
    "npm install",
    "npm run dev",
    "Open http://localhost:3000/api/weather"
  ]
}"#;

/// Build the single user message sent to the model.
///
/// # Errors
///
/// Returns a serialization error if the metadata cannot be encoded as JSON.
pub fn build_prompt(metadata: &RepositoryMetadata) -> Result<String, serde_json::Error> {
    let metadata_json = serde_json::to_string_pretty(metadata)?;
    Ok(format!(
        "{INSTRUCTIONS}\n### Example output:\n{SCHEMA_EXAMPLE}\n\n### Metadata:\n{metadata_json}\n\nGenerate ONLY JSON in the above schema."
    ))
}

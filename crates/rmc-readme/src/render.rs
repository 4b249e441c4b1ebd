//! README document rendering.
//!
//! Pure and deterministic: the same metadata and fields always yield the
//! same bytes. Every section has a literal fallback.

use rmc_core::metadata::UNLICENSED;
use rmc_core::{GeneratedFields, RepositoryMetadata};

pub const DEFAULT_DESCRIPTION: &str = "A production-ready open-source project.";
pub const DEFAULT_FEATURES: &str =
    "- Clean and modular code\n- Easy to extend\n- Open-source and community-driven";
pub const DEFAULT_USAGE: &str = "```bash\n# Run the project\nnpm install && npm start\n```";
pub const DEFAULT_LANGUAGES: &str = "Not specified";
pub const DEFAULT_STRUCTURE: &str = "(structure unavailable)";

/// Language that switches the installation block to an npm install.
pub const JS_ECOSYSTEM_MARKER: &str = "JavaScript";
const JS_INSTALL: &str = "npm install";
const INSTALL_PLACEHOLDER: &str = "# Add installation commands here";

/// Render the README for `metadata` using whatever the model produced.
#[must_use]
pub fn render_readme(metadata: &RepositoryMetadata, generated: &GeneratedFields) -> String {
    let name = metadata.display_name();
    let description = generated.description().unwrap_or(DEFAULT_DESCRIPTION);
    let features = features_section(generated);
    let usage = usage_section(generated);
    let languages = if metadata.languages.is_empty() {
        DEFAULT_LANGUAGES.to_string()
    } else {
        metadata.languages.join(", ")
    };
    let structure = if metadata.structure.is_empty() {
        DEFAULT_STRUCTURE.to_string()
    } else {
        format!("```\n{}\n```", metadata.structure.join("\n"))
    };
    let license = if metadata.license.is_empty() {
        UNLICENSED
    } else {
        metadata.license.as_str()
    };
    let install = if metadata.has_language(JS_ECOSYSTEM_MARKER) {
        JS_INSTALL
    } else {
        INSTALL_PLACEHOLDER
    };
    let repo_url = &metadata.repo_url;

    format!(
        "# {name}

{description}

## Features
{features}

## Installation
```bash
git clone {repo_url}
cd {name}
{install}
```

## Usage
{usage}

## Tech Stack
{languages}

## Project Structure
{structure}

## License
{license}
"
    )
}

fn features_section(generated: &GeneratedFields) -> String {
    let lines: Vec<String> = generated.features().map(|f| format!("- {f}")).collect();
    if lines.is_empty() {
        DEFAULT_FEATURES.to_string()
    } else {
        lines.join("\n")
    }
}

fn usage_section(generated: &GeneratedFields) -> String {
    let blocks: Vec<String> = generated
        .usage()
        .map(|u| format!("```bash\n{u}\n```"))
        .collect();
    if blocks.is_empty() {
        DEFAULT_USAGE.to_string()
    } else {
        blocks.join("\n\n")
    }
}

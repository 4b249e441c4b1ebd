use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `readmecraft` binary.
#[derive(Debug, Parser)]
#[command(
    name = "readmecraft",
    version,
    about = "Generate a README from a GitHub repository URL"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: raw, json
    #[arg(short, long, global = true, default_value = "raw")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no spinner)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file, layered below environment variables
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate a README for one repository and print it.
    Generate(GenerateArgs),
    /// Read repository URLs from stdin, one README per line.
    Chat,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// GitHub repository URL, e.g. https://github.com/owner/repo
    pub url: String,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

//! # rmc-readme
//!
//! README generation for readmecraft.
//!
//! - [`build_prompt`] serializes repository metadata into one generation request
//! - [`sanitize`] recovers the JSON payload from model text, never failing
//! - [`render_readme`] merges metadata and generated fields into Markdown
//! - [`ReadmeAgent`] runs the whole pipeline for one URL
//! - [`Conversation`] records user and AI turns around the agent

pub mod conversation;
pub mod pipeline;
pub mod prompt;
pub mod render;
pub mod sanitize;

pub use conversation::{Conversation, ERROR_PREFIX};
pub use pipeline::{PipelineError, ReadmeAgent};
pub use prompt::build_prompt;
pub use render::render_readme;
pub use sanitize::sanitize;

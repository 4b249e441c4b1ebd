//! # rmc-core
//!
//! Core types shared across all readmecraft crates:
//! - Repository identifiers and GitHub URL resolution
//! - Contents-listing entries used by the tree walker
//! - The merged repository metadata record
//! - Model-generated README fields
//! - Chat transcript messages

pub mod chat;
pub mod errors;
pub mod generated;
pub mod metadata;
pub mod repo_url;
pub mod tree;

pub use chat::{ChatMessage, Role};
pub use errors::ResolveError;
pub use generated::GeneratedFields;
pub use metadata::RepositoryMetadata;
pub use repo_url::RepoIdentifier;
pub use tree::{EntryKind, TreeEntry};

//! Repository contents entries and their display lines.

use serde::{Deserialize, Serialize};

/// Connector for the last sibling of a listing.
pub const LAST_CONNECTOR: &str = "└── ";
/// Connector for every sibling except the last.
pub const TEE_CONNECTOR: &str = "├── ";
/// Child prefix segment below a last sibling.
pub const BLANK_SEGMENT: &str = "    ";
/// Child prefix segment below a continuing sibling.
pub const PIPE_SEGMENT: &str = "│   ";

/// Kind tag reported by the contents API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// One entry of a directory listing, in listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl TreeEntry {
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Display line for this entry, or `None` for kinds that are not drawn.
    #[must_use]
    pub fn display_line(&self, prefix: &str, is_last: bool) -> Option<String> {
        let connector = connector(is_last);
        match self.kind {
            EntryKind::Dir => Some(format!("{prefix}{connector}📂 {}/", self.name)),
            EntryKind::File => Some(format!("{prefix}{connector}📄 {}", self.name)),
            EntryKind::Symlink | EntryKind::Submodule | EntryKind::Other => None,
        }
    }
}

#[must_use]
pub const fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_CONNECTOR } else { TEE_CONNECTOR }
}

/// Prefix for the children of an entry drawn with `prefix`.
#[must_use]
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let segment = if is_last { BLANK_SEGMENT } else { PIPE_SEGMENT };
    format!("{prefix}{segment}")
}

//! Repository tree walk.
//!
//! Depth-first, pre-order, in listing order. Pending directory listings sit
//! on an explicit stack; the walk stops descending once [`WalkConfig`]
//! bounds are hit and flags the listing as truncated.

use std::iter::Peekable;
use std::vec::IntoIter;

use rmc_config::WalkConfig;
use rmc_core::metadata::STRUCTURE_TRUNCATED;
use rmc_core::tree::child_prefix;
use rmc_core::{RepoIdentifier, TreeEntry};
use serde_json::Value;

use crate::{GitHubClient, GitHubError, JsonFetch};

/// Rendered tree lines plus whether a bound cut the walk short.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeListing {
    pub lines: Vec<String>,
    pub truncated: bool,
}

impl TreeListing {
    /// Lines as stored in metadata; a truncated walk ends with a marker line.
    #[must_use]
    pub fn into_structure(self) -> Vec<String> {
        let mut lines = self.lines;
        if self.truncated {
            lines.push(STRUCTURE_TRUNCATED.to_string());
        }
        lines
    }
}

/// One directory listing being drawn.
struct Frame {
    entries: Peekable<IntoIter<TreeEntry>>,
    path: String,
    prefix: String,
    depth: usize,
}

impl Frame {
    fn new(entries: Vec<TreeEntry>, path: String, prefix: String, depth: usize) -> Self {
        Self {
            entries: entries.into_iter().peekable(),
            path,
            prefix,
            depth,
        }
    }

    /// Next entry and whether it is the last sibling.
    fn next_entry(&mut self) -> Option<(TreeEntry, bool)> {
        let entry = self.entries.next()?;
        let is_last = self.entries.peek().is_none();
        Some((entry, is_last))
    }
}

impl<F: JsonFetch> GitHubClient<F> {
    /// Walk the whole repository tree from the root.
    ///
    /// # Errors
    ///
    /// Returns the first [`GitHubError`] raised by any directory listing.
    pub async fn walk_tree(&self, id: &RepoIdentifier) -> Result<TreeListing, GitHubError> {
        walk(self, id, self.walk).await
    }

    /// List one directory. A response that is not an array (for example a
    /// file object) yields no entries.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the request fails or an item is malformed.
    pub async fn list_dir(
        &self,
        id: &RepoIdentifier,
        path: &str,
    ) -> Result<Vec<TreeEntry>, GitHubError> {
        let url = self.repo_url(id, &format!("/contents/{}", encode_path(path)));
        match self.fetch.fetch_json(&url).await? {
            items @ Value::Array(_) => {
                serde_json::from_value(items).map_err(|e| GitHubError::Parse(e.to_string()))
            }
            _ => {
                tracing::debug!(%id, path, "contents response is not a listing");
                Ok(Vec::new())
            }
        }
    }
}

async fn walk<F: JsonFetch>(
    client: &GitHubClient<F>,
    id: &RepoIdentifier,
    limits: WalkConfig,
) -> Result<TreeListing, GitHubError> {
    let mut listing = TreeListing::default();
    let root = client.list_dir(id, "").await?;
    let mut stack = vec![Frame::new(root, String::new(), String::new(), 0)];

    while let Some(frame) = stack.last_mut() {
        let Some((entry, is_last)) = frame.next_entry() else {
            stack.pop();
            continue;
        };
        let Some(line) = entry.display_line(&frame.prefix, is_last) else {
            continue;
        };

        if limits.entries_exhausted(listing.lines.len()) {
            listing.truncated = true;
            break;
        }
        listing.lines.push(line);

        if !entry.is_dir() {
            continue;
        }
        if !limits.may_descend(frame.depth) || limits.entries_exhausted(listing.lines.len()) {
            listing.truncated = true;
            continue;
        }

        let path = format!("{}{}/", frame.path, entry.name);
        let prefix = child_prefix(&frame.prefix, is_last);
        let depth = frame.depth + 1;
        let children = client.list_dir(id, &path).await?;
        stack.push(Frame::new(children, path, prefix, depth));
    }

    tracing::debug!(
        %id,
        lines = listing.lines.len(),
        truncated = listing.truncated,
        "tree walk finished"
    );
    Ok(listing)
}

fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

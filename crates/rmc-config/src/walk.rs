//! Tree walk bounds.

use serde::{Deserialize, Serialize};

const fn default_max_entries() -> usize {
    500
}

const fn default_max_depth() -> usize {
    8
}

/// Limits for the repository tree walk. `0` disables a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct WalkConfig {
    /// Maximum number of tree lines emitted.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Number of directory levels expanded below the root listing.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            max_depth: default_max_depth(),
        }
    }
}

impl WalkConfig {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_entries: 0,
            max_depth: 0,
        }
    }

    #[must_use]
    pub const fn entries_exhausted(&self, emitted: usize) -> bool {
        self.max_entries != 0 && emitted >= self.max_entries
    }

    /// Whether a directory found in a listing at `depth` may be expanded.
    /// The root listing is depth 0.
    #[must_use]
    pub const fn may_descend(&self, depth: usize) -> bool {
        self.max_depth == 0 || depth < self.max_depth
    }
}

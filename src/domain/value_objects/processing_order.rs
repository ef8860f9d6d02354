//! Processing order value object
//!
//! Allocation is first-in-order-wins, so the order components are visited in
//! decides who receives contested ground. Every variant is deterministic for a
//! given set of inputs.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Order in which component sources are allocated
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingOrder {
    /// Sorted by the full source path as a plain string
    #[default]
    Lexicographic,
    /// As returned by source discovery
    Discovered,
    /// Listed layer names first (in list order), then the rest lexicographically
    Priority(Vec<String>),
}

impl ProcessingOrder {
    /// Arrange `sources` in processing order.
    ///
    /// `name_of` maps a source path to its derived layer name; it is only
    /// consulted for `Priority`.
    pub fn arrange<F>(&self, mut sources: Vec<PathBuf>, name_of: F) -> Vec<PathBuf>
    where
        F: Fn(&Path) -> String,
    {
        match self {
            ProcessingOrder::Discovered => sources,
            ProcessingOrder::Lexicographic => {
                sources.sort_by(|a, b| by_path_string(a, b));
                sources
            }
            ProcessingOrder::Priority(names) => {
                let rank = |path: &Path| {
                    let name = name_of(path);
                    names
                        .iter()
                        .position(|n| *n == name)
                        .unwrap_or(names.len())
                };
                sources.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| by_path_string(a, b)));
                sources
            }
        }
    }
}

/// Compare whole paths as strings, not component by component, so
/// `forest-old/` sorts before `forest/`.
fn by_path_string(a: &Path, b: &Path) -> Ordering {
    a.as_os_str().cmp(b.as_os_str())
}

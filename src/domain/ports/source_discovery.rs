//! SourceDiscovery port
//!
//! Lists the component source files under a root folder.

use std::path::{Path, PathBuf};

pub trait SourceDiscovery: Send + Sync {
    /// Every source file below `root`, in traversal order
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>, DiscoveryError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("failed to walk sources: {message}")]
    Walk { message: String },
}

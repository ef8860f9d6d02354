//! File system SourceDiscovery implementation
//!
//! Walks the components root with `ignore::WalkBuilder`. Hidden entries and
//! `.gitignore`d paths are both included: every source on disk takes part in
//! the allocation.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::{DiscoveryError, SourceDiscovery};

pub const DEFAULT_EXTENSIONS: &[&str] = &["geojson", "json"];

#[derive(Debug, Clone)]
pub struct FsSourceDiscovery {
    extensions: Vec<String>,
    exclude: Vec<PathBuf>,
}

impl Default for FsSourceDiscovery {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect())
    }
}

impl FsSourceDiscovery {
    pub fn new(extensions: Vec<String>) -> Self {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
            exclude: Vec::new(),
        }
    }

    /// Never report `path` (e.g. the master file living under the root)
    pub fn excluding(mut self, path: &Path) -> Self {
        self.exclude.push(canonical(path));
        self
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|e| *e == ext))
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

impl SourceDiscovery for FsSourceDiscovery {
    fn discover(&self, root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
        if !root.is_dir() {
            return Err(DiscoveryError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .ignore(false)
            .parents(false)
            .follow_links(true)
            .build();

        let mut sources = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| DiscoveryError::Walk {
                message: e.to_string(),
            })?;
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if !is_file || !self.matches_extension(entry.path()) {
                continue;
            }
            if !self.exclude.is_empty() && self.exclude.contains(&canonical(entry.path())) {
                continue;
            }
            sources.push(entry.into_path());
        }
        Ok(sources)
    }
}

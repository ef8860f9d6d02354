//! LayerLoader port
//!
//! Reads one source file into a dissolved, repaired layer.

use std::path::{Path, PathBuf};

use crate::domain::entities::LoadedLayer;

pub trait LayerLoader: Send + Sync {
    /// Load `path` as a layer named `name`.
    ///
    /// Null and non-polygonal geometries are dropped and invalid polygons
    /// repaired before dissolving; a file with nothing usable loads as
    /// `LoadedLayer::Empty`.
    fn load(&self, path: &Path, name: &str) -> Result<LoadedLayer, LayerLoadError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayerLoadError {
    #[error("layer source not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read layer {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("failed to parse layer {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unknown CRS '{name}' in {path}\n  → Fix: declare it under [[crs]] in the config file")]
    UnknownCrs { name: String, path: PathBuf },
}

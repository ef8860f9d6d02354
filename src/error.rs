//! Error types for arealloc
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{DiscoveryError, GeometryError, LayerLoadError};

/// Result type alias for arealloc operations
pub type AllocResult<T> = Result<T, AllocError>;

/// Main error type for allocation runs.
///
/// Every variant is fatal for the run. Layers whose geometry cannot be
/// repaired are not errors: they load as empty and are credited `0.0`.
#[derive(Error, Debug)]
pub enum AllocError {
    /// A layer carries geometry but declares no reference system
    #[error("layer has no CRS defined: {path}\n  → Fix: add a `crs` member to the file or set `allocation.assume_crs`")]
    MissingCrs { path: PathBuf },

    /// The master footprint has no usable polygon
    #[error("master footprint is empty: {path}")]
    EmptyMaster { path: PathBuf },

    /// A CRS name that the registry cannot resolve
    #[error("unknown CRS '{name}' in {path}\n  → Fix: declare it under [[crs]] in the config file")]
    UnknownCrs { name: String, path: PathBuf },

    /// Components root does not exist or is not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The configured equal-area CRS is unusable for area computation
    #[error("equal-area CRS '{code}' is not a known projected CRS")]
    InvalidEqualAreaCrs { code: String },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Geometry engine failure
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Layer loading failure
    #[error(transparent)]
    Load(#[from] LayerLoadError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DiscoveryError> for AllocError {
    fn from(err: DiscoveryError) -> Self {
        match err {
            DiscoveryError::NotADirectory { path } => AllocError::DirectoryNotFound { path },
            DiscoveryError::Walk { message } => {
                AllocError::Io(std::io::Error::other(message))
            }
        }
    }
}

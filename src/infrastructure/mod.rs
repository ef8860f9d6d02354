//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `geometry/` - `GeoEngine`, CRS registry and projection math
//! - `layer/` - GeoJSON layer loader
//! - `discovery/` - File system source discovery
//! - `output/` - CSV export

pub mod discovery;
pub mod geometry;
pub mod layer;
pub mod output;

// Re-export for convenience
pub use discovery::FsSourceDiscovery;
pub use geometry::{CrsRegistry, GeoEngine};
pub use layer::GeoJsonLayerLoader;
pub use output::{render_csv, write_csv};

//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod geometry_engine;
pub mod layer_loader;
pub mod source_discovery;

pub use geometry_engine::{GeometryEngine, GeometryError};
pub use layer_loader::{LayerLoadError, LayerLoader};
pub use source_discovery::{DiscoveryError, SourceDiscovery};

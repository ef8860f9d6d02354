//! Geometry engine implementation
//!
//! - `engine` - `GeoEngine`, the `GeometryEngine` port over the `geo` crate
//! - `registry` - CRS name resolution
//! - `projection` - WGS 84 projection math
//! - `repair` - Polygon validity repair

mod engine;
pub mod projection;
mod registry;
mod repair;

pub use engine::GeoEngine;
pub use projection::Projection;
pub use registry::{canonical_code, CrsRegistry};
pub use repair::repair_shape;

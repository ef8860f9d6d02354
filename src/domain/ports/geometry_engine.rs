//! GeometryEngine port
//!
//! All polygon math the allocator needs. Operations are pure: inputs are
//! borrowed, results are new `Footprint` values.

use geo::MultiPolygon;

use crate::domain::entities::Footprint;
use crate::domain::value_objects::Crs;

pub trait GeometryEngine: Send + Sync {
    /// Drop degenerate rings and resolve self-overlaps.
    ///
    /// Returns an empty multipolygon when nothing usable survives.
    fn repair(&self, shape: MultiPolygon<f64>) -> MultiPolygon<f64>;

    /// Transform `footprint` into `target`. Identity when the CRS already match.
    fn reproject(&self, footprint: &Footprint, target: &Crs) -> Result<Footprint, GeometryError>;

    /// Dissolve `parts` into one multipolygon
    fn union(&self, parts: Vec<MultiPolygon<f64>>) -> MultiPolygon<f64>;

    /// Result carries the CRS of `a`
    fn intersection(&self, a: &Footprint, b: &Footprint) -> Result<Footprint, GeometryError>;

    /// Result carries the CRS of `a`
    fn difference(&self, a: &Footprint, b: &Footprint) -> Result<Footprint, GeometryError>;

    /// Area in square axis units of the footprint's (projected) CRS
    fn area(&self, footprint: &Footprint) -> Result<f64, GeometryError>;

    fn is_empty(&self, footprint: &Footprint) -> bool;
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GeometryError {
    #[error("refusing to compute area in geographic CRS {crs}")]
    GeographicArea { crs: String },

    #[error("CRS mismatch: {left} vs {right}")]
    CrsMismatch { left: String, right: String },

    #[error("no transform from {from} to {to}")]
    UnsupportedTransform { from: String, to: String },

    #[error("coordinate ({x}, {y}) is outside the domain of {crs}")]
    InvalidCoordinate { x: f64, y: f64, crs: String },
}

/// Both operands of a binary set operation must share a CRS
pub(crate) fn ensure_same_crs(a: &Footprint, b: &Footprint) -> Result<(), GeometryError> {
    if a.crs() == b.crs() {
        Ok(())
    } else {
        Err(GeometryError::CrsMismatch {
            left: a.crs().code().to_string(),
            right: b.crs().code().to_string(),
        })
    }
}

//! Footprint entity
//!
//! A polygonal area tagged with the CRS its coordinates live in. Footprints
//! are never mutated: every geometry operation yields a new value.

use geo::MultiPolygon;

use crate::domain::value_objects::Crs;

#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    shape: MultiPolygon<f64>,
    crs: Crs,
}

impl Footprint {
    pub fn new(shape: MultiPolygon<f64>, crs: Crs) -> Self {
        Self { shape, crs }
    }

    /// Footprint with no polygons
    pub fn empty(crs: Crs) -> Self {
        Self::new(MultiPolygon::new(Vec::new()), crs)
    }

    pub fn shape(&self) -> &MultiPolygon<f64> {
        &self.shape
    }

    pub fn crs(&self) -> &Crs {
        &self.crs
    }

    pub fn into_shape(self) -> MultiPolygon<f64> {
        self.shape
    }
}

//! `geo`-backed geometry engine

use geo::{Area, BooleanOps, Coord, MapCoords, MultiPolygon};

use crate::domain::entities::Footprint;
use crate::domain::ports::geometry_engine::ensure_same_crs;
use crate::domain::ports::{GeometryEngine, GeometryError};
use crate::domain::value_objects::Crs;

use super::registry::CrsRegistry;
use super::repair::repair_shape;

#[derive(Debug, Clone, Default)]
pub struct GeoEngine {
    registry: CrsRegistry,
}

impl GeoEngine {
    pub fn new(registry: CrsRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CrsRegistry {
        &self.registry
    }
}

impl GeometryEngine for GeoEngine {
    fn repair(&self, shape: MultiPolygon<f64>) -> MultiPolygon<f64> {
        repair_shape(shape)
    }

    fn reproject(&self, footprint: &Footprint, target: &Crs) -> Result<Footprint, GeometryError> {
        if footprint.crs() == target {
            return Ok(footprint.clone());
        }

        let unsupported = || GeometryError::UnsupportedTransform {
            from: footprint.crs().code().to_string(),
            to: target.code().to_string(),
        };
        let from = self.registry.projection(footprint.crs()).ok_or_else(unsupported)?;
        let to = self.registry.projection(target).ok_or_else(unsupported)?;
        let from_code = footprint.crs().code();

        let shape = footprint.shape().try_map_coords(move |c: Coord<f64>| {
            let invalid = || GeometryError::InvalidCoordinate {
                x: c.x,
                y: c.y,
                crs: from_code.to_string(),
            };
            let (lon, lat) = from.inverse(c.x, c.y).ok_or_else(invalid)?;
            let (x, y) = to.forward(lon, lat).ok_or_else(invalid)?;
            Ok::<_, GeometryError>(Coord { x, y })
        })?;

        Ok(Footprint::new(shape, target.clone()))
    }

    fn union(&self, parts: Vec<MultiPolygon<f64>>) -> MultiPolygon<f64> {
        parts
            .into_iter()
            .fold(MultiPolygon::new(Vec::new()), |acc, part| acc.union(&part))
    }

    fn intersection(&self, a: &Footprint, b: &Footprint) -> Result<Footprint, GeometryError> {
        ensure_same_crs(a, b)?;
        Ok(Footprint::new(
            a.shape().intersection(b.shape()),
            a.crs().clone(),
        ))
    }

    fn difference(&self, a: &Footprint, b: &Footprint) -> Result<Footprint, GeometryError> {
        ensure_same_crs(a, b)?;
        Ok(Footprint::new(
            a.shape().difference(b.shape()),
            a.crs().clone(),
        ))
    }

    fn area(&self, footprint: &Footprint) -> Result<f64, GeometryError> {
        if footprint.crs().is_geographic() {
            return Err(GeometryError::GeographicArea {
                crs: footprint.crs().code().to_string(),
            });
        }
        Ok(footprint.shape().unsigned_area())
    }

    fn is_empty(&self, footprint: &Footprint) -> bool {
        footprint
            .shape()
            .0
            .iter()
            .all(|polygon| polygon.unsigned_area() == 0.0)
    }
}

//! CRS normalization
//!
//! Area is only computed in projected systems. Geographic footprints are
//! moved into the configured equal-area CRS; projected ones pass through
//! untouched.

use crate::domain::entities::Footprint;
use crate::domain::ports::{GeometryEngine, GeometryError};
use crate::domain::value_objects::Crs;

pub fn normalize<E>(
    engine: &E,
    footprint: Footprint,
    equal_area: &Crs,
) -> Result<Footprint, GeometryError>
where
    E: GeometryEngine + ?Sized,
{
    if footprint.crs().is_geographic() {
        tracing::debug!(from = %footprint.crs(), to = %equal_area, "reprojecting geographic footprint");
        engine.reproject(&footprint, equal_area)
    } else {
        Ok(footprint)
    }
}

//! Layer entity
//!
//! A layer is one source file dissolved into a single multipolygon. It is built
//! once by a `LayerLoader` and never changes afterwards.

use std::path::{Path, PathBuf};

use geo::MultiPolygon;

use crate::domain::entities::Footprint;
use crate::domain::value_objects::Crs;
use crate::error::{AllocError, AllocResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    source: PathBuf,
    shape: MultiPolygon<f64>,
    crs: Option<Crs>,
}

impl Layer {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<PathBuf>,
        shape: MultiPolygon<f64>,
        crs: Option<Crs>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            shape,
            crs,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn shape(&self) -> &MultiPolygon<f64> {
        &self.shape
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub fn polygon_count(&self) -> usize {
        self.shape.0.len()
    }

    /// Attach the layer's geometry to its declared CRS.
    ///
    /// Fails with `MissingCrs` when the source declared none.
    pub fn into_footprint(self) -> AllocResult<Footprint> {
        match self.crs {
            Some(crs) => Ok(Footprint::new(self.shape, crs)),
            None => Err(AllocError::MissingCrs { path: self.source }),
        }
    }
}

/// Why a loaded layer has no usable geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// No polygonal feature with a non-null geometry
    NoFeatures,
    /// Polygons were present but none survived repair
    Unrepairable,
}

impl std::fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyReason::NoFeatures => write!(f, "no polygon features"),
            EmptyReason::Unrepairable => write!(f, "geometry could not be repaired"),
        }
    }
}

/// Outcome of loading one source file
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedLayer {
    Layer(Layer),
    Empty { source: PathBuf, reason: EmptyReason },
}

impl LoadedLayer {
    pub fn source(&self) -> &Path {
        match self {
            LoadedLayer::Layer(layer) => layer.source(),
            LoadedLayer::Empty { source, .. } => source,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LoadedLayer::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square() -> MultiPolygon<f64> {
        MultiPolygon::new(vec![polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
        ]])
    }

    #[test]
    fn into_footprint_keeps_crs() {
        let layer = Layer::new("forest", "forest/a.geojson", square(), Some(Crs::metric("EPSG:6933")));
        let footprint = layer.into_footprint().unwrap();
        assert_eq!(footprint.crs().code(), "EPSG:6933");
        assert_eq!(footprint.shape().0.len(), 1);
    }

    #[test]
    fn into_footprint_without_crs_is_missing_crs() {
        let layer = Layer::new("forest", "forest/a.geojson", square(), None);
        let err = layer.into_footprint().unwrap_err();
        match err {
            AllocError::MissingCrs { path } => assert_eq!(path, PathBuf::from("forest/a.geojson")),
            other => panic!("expected MissingCrs, got {other:?}"),
        }
    }

    #[test]
    fn loaded_layer_source_for_both_variants() {
        let empty = LoadedLayer::Empty {
            source: PathBuf::from("x.geojson"),
            reason: EmptyReason::NoFeatures,
        };
        assert!(empty.is_empty());
        assert_eq!(empty.source(), Path::new("x.geojson"));
    }
}

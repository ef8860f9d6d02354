//! GeoJSON LayerLoader implementation
//!
//! Accepts a `FeatureCollection`, a single `Feature` or a bare polygonal
//! geometry. The CRS comes from the legacy `crs` member
//! (`{"type": "name", "properties": {"name": "EPSG:32633"}}`); without one the
//! layer has no CRS unless an assumed CRS is configured. Coordinates are read
//! as (x, y) = (lon, lat) for geographic systems, as GeoJSON writes them.

use std::path::Path;

use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::entities::{EmptyReason, Layer, LoadedLayer};
use crate::domain::ports::{GeometryEngine, LayerLoadError, LayerLoader};
use crate::domain::value_objects::Crs;
use crate::infrastructure::geometry::GeoEngine;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<GeometryObject>,
}

type Position = Vec<f64>;
type Ring = Vec<Position>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum GeometryObject {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    GeometryCollection { geometries: Vec<GeometryObject> },
    #[serde(other)]
    Other,
}

impl GeometryObject {
    /// Append polygons to `out`; returns how many non-polygonal parts were skipped
    fn collect_polygons(self, out: &mut Vec<Polygon<f64>>) -> usize {
        match self {
            GeometryObject::Polygon { coordinates } => {
                out.extend(to_polygon(coordinates));
                0
            }
            GeometryObject::MultiPolygon { coordinates } => {
                out.extend(coordinates.into_iter().filter_map(to_polygon));
                0
            }
            GeometryObject::GeometryCollection { geometries } => geometries
                .into_iter()
                .map(|geometry| geometry.collect_polygons(out))
                .sum(),
            GeometryObject::Other => 1,
        }
    }
}

fn to_polygon(rings: Vec<Ring>) -> Option<Polygon<f64>> {
    let mut rings = rings.into_iter().map(to_line_string);
    let exterior = rings.next()?;
    Some(Polygon::new(exterior, rings.collect()))
}

/// Positions with fewer than two ordinates become NaN so repair drops them
fn to_line_string(ring: Ring) -> LineString<f64> {
    LineString::new(
        ring.into_iter()
            .map(|position| match position.as_slice() {
                [x, y, ..] => Coord { x: *x, y: *y },
                _ => Coord {
                    x: f64::NAN,
                    y: f64::NAN,
                },
            })
            .collect(),
    )
}

#[derive(Debug, Clone, Default)]
pub struct GeoJsonLayerLoader {
    engine: GeoEngine,
    assumed_crs: Option<Crs>,
}

impl GeoJsonLayerLoader {
    pub fn new(engine: GeoEngine) -> Self {
        Self {
            engine,
            assumed_crs: None,
        }
    }

    /// CRS to use for files without a `crs` member
    pub fn with_assumed_crs(mut self, crs: Option<Crs>) -> Self {
        self.assumed_crs = crs;
        self
    }

    fn resolve_crs(&self, path: &Path, member: Option<&Value>) -> Result<Option<Crs>, LayerLoadError> {
        let member = match member {
            None | Some(Value::Null) => return Ok(self.assumed_crs.clone()),
            Some(member) => member,
        };

        let name = member
            .get("properties")
            .and_then(|properties| properties.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| member.to_string());

        self.engine
            .registry()
            .resolve(&name)
            .map(Some)
            .ok_or_else(|| LayerLoadError::UnknownCrs {
                name,
                path: path.to_path_buf(),
            })
    }
}

fn parse_error(path: &Path, err: serde_json::Error) -> LayerLoadError {
    LayerLoadError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Geometries of every feature, null geometries dropped
fn feature_geometries(path: &Path, document: Value) -> Result<Vec<GeometryObject>, LayerLoadError> {
    match document.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {
            let collection: FeatureCollection =
                serde_json::from_value(document).map_err(|e| parse_error(path, e))?;
            Ok(collection
                .features
                .into_iter()
                .filter_map(|feature| feature.geometry)
                .collect())
        }
        Some("Feature") => {
            let feature: Feature =
                serde_json::from_value(document).map_err(|e| parse_error(path, e))?;
            Ok(feature.geometry.into_iter().collect())
        }
        Some(_) => {
            let geometry: GeometryObject =
                serde_json::from_value(document).map_err(|e| parse_error(path, e))?;
            Ok(vec![geometry])
        }
        None => Err(LayerLoadError::Parse {
            path: path.to_path_buf(),
            message: "missing GeoJSON \"type\" member".to_string(),
        }),
    }
}

impl LayerLoader for GeoJsonLayerLoader {
    fn load(&self, path: &Path, name: &str) -> Result<LoadedLayer, LayerLoadError> {
        if !path.is_file() {
            return Err(LayerLoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| LayerLoadError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let document: Value = serde_json::from_str(&content).map_err(|e| parse_error(path, e))?;

        let crs_member = document.get("crs").cloned();

        let mut skipped = 0;
        let mut saw_polygon = false;
        let mut parts = Vec::new();
        for geometry in feature_geometries(path, document)? {
            let mut polygons = Vec::new();
            skipped += geometry.collect_polygons(&mut polygons);
            if polygons.is_empty() {
                continue;
            }
            saw_polygon = true;

            let repaired = self.engine.repair(MultiPolygon::new(polygons));
            if !repaired.0.is_empty() {
                parts.push(repaired);
            }
        }

        if skipped > 0 {
            debug!(source = %path.display(), skipped, "ignored non-polygonal geometries");
        }

        if parts.is_empty() {
            let reason = if saw_polygon {
                EmptyReason::Unrepairable
            } else {
                EmptyReason::NoFeatures
            };
            warn!(source = %path.display(), %reason, "layer has no usable geometry");
            return Ok(LoadedLayer::Empty {
                source: path.to_path_buf(),
                reason,
            });
        }

        // Only layers with geometry need a resolvable CRS.
        let crs = self.resolve_crs(path, crs_member.as_ref())?;
        let shape = self.engine.union(parts);
        Ok(LoadedLayer::Layer(Layer::new(name, path, shape, crs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const SQUARE_4326: &str = r#"{
        "type": "FeatureCollection",
        "crs": { "type": "name", "properties": { "name": "urn:ogc:def:crs:OGC:1.3:CRS84" } },
        "features": [
            { "type": "Feature", "properties": { "id": 1 },
              "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]] } },
            { "type": "Feature", "properties": { "id": 2 }, "geometry": null }
        ]
    }"#;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn loaded(result: LoadedLayer) -> Layer {
        match result {
            LoadedLayer::Layer(layer) => layer,
            other => panic!("expected a layer, got {other:?}"),
        }
    }

    #[test]
    fn loads_feature_collection_with_crs_and_null_geometry() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "a.geojson", SQUARE_4326);

        let layer = loaded(GeoJsonLayerLoader::default().load(&path, "forest").unwrap());

        assert_eq!(layer.name, "forest");
        assert_eq!(layer.crs().unwrap().code(), "OGC:CRS84");
        assert_eq!(layer.polygon_count(), 1);
        assert!((layer.shape().unsigned_area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn dissolves_overlapping_features() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "b.geojson",
            r#"{"type":"FeatureCollection","crs":{"type":"name","properties":{"name":"EPSG:6933"}},
                "features":[
                  {"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10],[0,0]]]}},
                  {"type":"Feature","geometry":{"type":"MultiPolygon","coordinates":[[[[5,0],[15,0],[15,10],[5,10],[5,0]]]]}}
                ]}"#,
        );

        let layer = loaded(GeoJsonLayerLoader::default().load(&path, "b").unwrap());

        assert!((layer.shape().unsigned_area() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn missing_crs_member_loads_without_crs() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "c.geojson",
            r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#,
        );

        let layer = loaded(GeoJsonLayerLoader::default().load(&path, "c").unwrap());
        assert!(layer.crs().is_none());
    }

    #[test]
    fn assumed_crs_fills_missing_member() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "c.geojson",
            r#"{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}"#,
        );

        let loader =
            GeoJsonLayerLoader::default().with_assumed_crs(Some(Crs::geographic("EPSG:4326")));
        let layer = loaded(loader.load(&path, "c").unwrap());
        assert_eq!(layer.crs().unwrap().code(), "EPSG:4326");
    }

    #[test]
    fn points_only_is_empty_with_no_features() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "d.geojson",
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]}},
                {"type":"Feature","geometry":{"type":"LineString","coordinates":[[1,2],[3,4]]}}
            ]}"#,
        );

        let result = GeoJsonLayerLoader::default().load(&path, "d").unwrap();
        assert_eq!(
            result,
            LoadedLayer::Empty {
                source: path,
                reason: EmptyReason::NoFeatures
            }
        );
    }

    #[test]
    fn degenerate_polygons_are_empty_as_unrepairable() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "e.geojson",
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[1,1],[0,0]]]}},
                {"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0],[1,1],[2,0],[0]]]}}
            ]}"#,
        );

        let result = GeoJsonLayerLoader::default().load(&path, "e").unwrap();
        assert!(matches!(
            result,
            LoadedLayer::Empty {
                reason: EmptyReason::Unrepairable,
                ..
            }
        ));
    }

    #[test]
    fn empty_layer_in_unknown_crs_is_empty_not_an_error() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "lambert.geojson",
            r#"{"type":"FeatureCollection",
                "crs":{"type":"name","properties":{"name":"EPSG:2154"}},
                "features":[]}"#,
        );

        let result = GeoJsonLayerLoader::default().load(&path, "lambert").unwrap();
        assert_eq!(
            result,
            LoadedLayer::Empty {
                source: path,
                reason: EmptyReason::NoFeatures
            }
        );
    }

    #[test]
    fn third_ordinate_is_ignored() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "f.geojson",
            r#"{"type":"Polygon","crs":{"type":"name","properties":{"name":"EPSG:3857"}},
                "coordinates":[[[0,0,5],[2,0,5],[2,2,5],[0,2,5],[0,0,5]]]}"#,
        );

        let layer = loaded(GeoJsonLayerLoader::default().load(&path, "f").unwrap());
        assert!((layer.shape().unsigned_area() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_crs_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "g.geojson",
            r#"{"type":"Polygon","crs":{"type":"name","properties":{"name":"EPSG:99999"}},
                "coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#,
        );

        let err = GeoJsonLayerLoader::default().load(&path, "g").unwrap_err();
        assert!(matches!(err, LayerLoadError::UnknownCrs { ref name, .. } if name == "EPSG:99999"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "h.geojson", "{ not json");

        let err = GeoJsonLayerLoader::default().load(&path, "h").unwrap_err();
        assert!(matches!(err, LayerLoadError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = GeoJsonLayerLoader::default()
            .load(Path::new("/nonexistent/arealloc/layer.geojson"), "x")
            .unwrap_err();
        assert!(matches!(err, LayerLoadError::NotFound { .. }));
    }
}

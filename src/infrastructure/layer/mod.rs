//! Layer loader implementations

mod geojson_loader;

pub use geojson_loader::GeoJsonLayerLoader;

//! GeoJSON fixtures

#![allow(dead_code)]

use serde_json::{json, Value};

pub const UTM_33N: &str = "EPSG:32633";

/// Closed ring for an axis-aligned rectangle
pub fn rect_ring(x0: f64, y0: f64, x1: f64, y1: f64) -> Value {
    json!([[[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]]])
}

/// FeatureCollection with one rectangle per feature
pub fn rects(crs: Option<&str>, items: &[(f64, f64, f64, f64)]) -> String {
    let features: Vec<Value> = items
        .iter()
        .map(|&(x0, y0, x1, y1)| {
            json!({
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Polygon", "coordinates": rect_ring(x0, y0, x1, y1) }
            })
        })
        .collect();

    let mut document = json!({ "type": "FeatureCollection", "features": features });
    if let Some(code) = crs {
        document["crs"] = json!({ "type": "name", "properties": { "name": code } });
    }
    document.to_string()
}

/// Single rectangle in UTM zone 33N
pub fn utm_rect(x0: f64, y0: f64, x1: f64, y1: f64) -> String {
    rects(Some(UTM_33N), &[(x0, y0, x1, y1)])
}

/// 1000 m × 1000 m = 100 ha
pub fn utm_master() -> String {
    utm_rect(500_000.0, 5_000_000.0, 501_000.0, 5_001_000.0)
}

/// Strip of the 100 ha master, `from`..`to` metres from its west edge
pub fn utm_strip(from: f64, to: f64) -> String {
    utm_rect(500_000.0 + from, 5_000_000.0, 500_000.0 + to, 5_001_000.0)
}

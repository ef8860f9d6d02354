//! Polygon repair
//!
//! Cleans what a boolean overlay cannot digest (non-finite coordinates,
//! rings without area) and lets the overlay resolve self-intersections and
//! overlapping parts by unioning everything that is left.

use geo::{Area, BooleanOps, Coord, LineString, MultiPolygon, Polygon};

pub fn repair_shape(shape: MultiPolygon<f64>) -> MultiPolygon<f64> {
    let cleaned: Vec<Polygon<f64>> = shape.into_iter().filter_map(clean_polygon).collect();
    if cleaned.is_empty() {
        return MultiPolygon::new(Vec::new());
    }

    let dissolved = cleaned
        .into_iter()
        .fold(MultiPolygon::new(Vec::new()), |acc, polygon| {
            acc.union(&MultiPolygon::new(vec![polygon]))
        });

    MultiPolygon::new(
        dissolved
            .into_iter()
            .filter(|polygon| polygon.unsigned_area() > 0.0)
            .collect(),
    )
}

fn clean_polygon(polygon: Polygon<f64>) -> Option<Polygon<f64>> {
    let all_finite = polygon
        .exterior()
        .coords()
        .chain(polygon.interiors().iter().flat_map(|ring| ring.coords()))
        .all(|c| c.x.is_finite() && c.y.is_finite());
    if !all_finite {
        return None;
    }

    let (exterior, interiors) = polygon.into_inner();
    let exterior = clean_ring(exterior)?;
    let interiors = interiors.into_iter().filter_map(clean_ring).collect();
    Some(Polygon::new(exterior, interiors))
}

/// Drop repeated vertices; `None` when fewer than three distinct ones remain
fn clean_ring(ring: LineString<f64>) -> Option<LineString<f64>> {
    let mut coords: Vec<Coord<f64>> = ring.0;
    coords.dedup();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }
    if coords.len() < 3 {
        return None;
    }
    Some(LineString::new(coords))
}

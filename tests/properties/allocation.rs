//! Property tests for the allocator.

use geo::{polygon, MultiPolygon};
use proptest::prelude::*;

use arealloc::domain::entities::{Layer, LoadedLayer};
use arealloc::domain::value_objects::Crs;
use arealloc::error::AllocResult;
use arealloc::{Allocator, GeoEngine};

type Rect = (f64, f64, f64, f64);

fn crs() -> Crs {
    Crs::metric("EPSG:32633")
}

fn shape((x0, y0, x1, y1): Rect) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon![
        (x: x0, y: y0),
        (x: x1, y: y0),
        (x: x1, y: y1),
        (x: x0, y: y1),
    ]])
}

fn layer(name: &str, rect: Rect) -> LoadedLayer {
    LoadedLayer::Layer(Layer::new(name, format!("{name}.geojson"), shape(rect), Some(crs())))
}

/// Non-degenerate rectangle on a 10 m grid inside 0..1000
fn rect() -> impl Strategy<Value = Rect> {
    (0u32..90, 0u32..90, 1u32..=10, 1u32..=10).prop_map(|(x, y, w, h)| {
        let (x0, y0) = (f64::from(x) * 10.0, f64::from(y) * 10.0);
        (x0, y0, x0 + f64::from(w) * 10.0 * 5.0, y0 + f64::from(h) * 10.0 * 5.0)
    })
}

fn components(rects: &[Rect]) -> Vec<AllocResult<(String, LoadedLayer)>> {
    rects
        .iter()
        .enumerate()
        .map(|(i, rect)| {
            let name = format!("layer{i}");
            Ok((name.clone(), layer(&name, *rect)))
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: allocated + unallocated == master, and nothing is counted twice.
    #[test]
    fn property_master_area_is_conserved(
        master in rect(),
        parts in proptest::collection::vec(rect(), 0..6)
    ) {
        let engine = GeoEngine::default();
        let allocator = Allocator::new(&engine, layer("master", master), crs()).unwrap();
        let master_ha = allocator.master_ha();

        let run = allocator.run(components(&parts)).unwrap();
        let allocated = run.allocated_ha();

        let tolerance = 1e-6 * master_ha.max(1.0);
        prop_assert!(allocated <= master_ha + tolerance);
        prop_assert!((allocated + run.remaining_ha - master_ha).abs() <= tolerance);
        for record in &run.records {
            prop_assert!(record.area_ha >= 0.0);
        }
    }

    /// PROPERTY: the first layer in order keeps its whole share of the master.
    #[test]
    fn property_first_layer_keeps_its_overlap(
        master in rect(),
        first in rect(),
        second in rect()
    ) {
        let engine = GeoEngine::default();

        let alone = Allocator::new(&engine, layer("master", master), crs())
            .unwrap()
            .run(components(&[first]))
            .unwrap();
        let together = Allocator::new(&engine, layer("master", master), crs())
            .unwrap()
            .run(components(&[first, second]))
            .unwrap();

        let tolerance = 1e-6 * alone.master_ha.max(1.0);
        prop_assert!((alone.records[0].area_ha - together.records[0].area_ha).abs() <= tolerance);
    }
}

//! Property tests for aggregation and rounding.

use std::collections::BTreeMap;

use proptest::prelude::*;

use arealloc::domain::services::round_one_decimal;
use arealloc::{aggregate, AllocationRecord};

fn records() -> impl Strategy<Value = Vec<AllocationRecord>> {
    let name = prop_oneof![Just("forest"), Just("water"), Just("urban")];
    proptest::collection::vec((name, 0.0f64..500.0), 0..12).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (name, area))| AllocationRecord::new(name, format!("{name}/{i}.geojson"), area))
            .collect()
    })
}

proptest! {
    /// PROPERTY: one row per name, each the rounded sum of that name's records.
    #[test]
    fn property_rows_are_rounded_sums(records in records()) {
        let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
        for record in &records {
            *sums.entry(record.layer_name.as_str()).or_default() += record.area_ha;
        }

        let table = aggregate(&records);

        prop_assert_eq!(table.len(), sums.len());
        for (name, sum) in sums {
            prop_assert_eq!(table.get(name), Some(round_one_decimal(sum)));
        }
    }

    /// PROPERTY: rounding moves a value by at most half a tenth.
    #[test]
    fn property_rounding_is_bounded(value in 0.0f64..1e6) {
        let rounded = round_one_decimal(value);
        prop_assert!((rounded - value).abs() <= 0.05 + 1e-9);
    }
}

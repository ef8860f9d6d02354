//! Result aggregation
//!
//! Sums per-file records by layer name and rounds each total once, at the
//! very end. Rounding earlier would compound error across the subtraction
//! chain and break the conservation check.

use std::collections::BTreeMap;

use crate::domain::entities::{AllocationRecord, AllocationTable, TableRow};

pub fn aggregate(records: &[AllocationRecord]) -> AllocationTable {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.layer_name.as_str()).or_insert(0.0) += record.area_ha;
    }

    AllocationTable::from_rows(
        totals
            .into_iter()
            .map(|(layer, total)| TableRow {
                layer: layer.to_string(),
                area_ha: round_one_decimal(total),
            })
            .collect(),
    )
}

/// Round half to even at one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

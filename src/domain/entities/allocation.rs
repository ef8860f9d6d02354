//! Allocation entities
//!
//! `AllocationRecord` is emitted once per visited source file.
//! `AllocationTable` is the aggregated, rounded, name-unique result.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::SortOrder;

/// Area credited to one source file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationRecord {
    pub layer_name: String,
    pub source: PathBuf,
    pub area_ha: f64,
}

impl AllocationRecord {
    pub fn new(layer_name: impl Into<String>, source: impl Into<PathBuf>, area_ha: f64) -> Self {
        Self {
            layer_name: layer_name.into(),
            source: source.into(),
            area_ha,
        }
    }
}

/// One row of the final table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    #[serde(rename = "Layer")]
    pub layer: String,
    pub area_ha: f64,
}

/// Final (layer, area_ha) table, unique by layer name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AllocationTable {
    rows: Vec<TableRow>,
}

impl AllocationTable {
    /// Build from rows already unique by name
    pub(crate) fn from_rows(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, layer: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.layer == layer)
            .map(|row| row.area_ha)
    }

    pub fn total_ha(&self) -> f64 {
        self.rows.iter().map(|row| row.area_ha).sum()
    }

    /// Reorder rows for presentation. Equal areas fall back to name order.
    pub fn sorted(mut self, order: SortOrder) -> Self {
        match order {
            SortOrder::Name => self.rows.sort_by(|a, b| a.layer.cmp(&b.layer)),
            SortOrder::AreaDesc => self.rows.sort_by(|a, b| {
                b.area_ha
                    .total_cmp(&a.area_ha)
                    .then_with(|| a.layer.cmp(&b.layer))
            }),
            SortOrder::AreaAsc => self.rows.sort_by(|a, b| {
                a.area_ha
                    .total_cmp(&b.area_ha)
                    .then_with(|| a.layer.cmp(&b.layer))
            }),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AllocationTable {
        AllocationTable::from_rows(vec![
            TableRow { layer: "b".into(), area_ha: 10.0 },
            TableRow { layer: "a".into(), area_ha: 10.0 },
            TableRow { layer: "c".into(), area_ha: 42.5 },
        ])
    }

    fn names(table: &AllocationTable) -> Vec<&str> {
        table.rows().iter().map(|r| r.layer.as_str()).collect()
    }

    #[test]
    fn sorted_area_desc_breaks_ties_by_name() {
        assert_eq!(names(&table().sorted(SortOrder::AreaDesc)), ["c", "a", "b"]);
    }

    #[test]
    fn sorted_area_asc() {
        assert_eq!(names(&table().sorted(SortOrder::AreaAsc)), ["a", "b", "c"]);
    }

    #[test]
    fn sorted_by_name() {
        assert_eq!(names(&table().sorted(SortOrder::Name)), ["a", "b", "c"]);
    }

    #[test]
    fn serializes_with_csv_header_names() {
        let json = serde_json::to_string(&table().sorted(SortOrder::Name)).unwrap();
        assert!(json.starts_with(r#"[{"Layer":"a","area_ha":10.0}"#));
    }
}

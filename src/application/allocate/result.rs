//! Allocate result types

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::{AllocationRecord, AllocationTable};

/// A component source in processing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedSource {
    pub name: String,
    pub path: PathBuf,
}

/// Result of an allocation run
#[derive(Debug, Clone, Serialize)]
pub struct AllocationOutcome {
    /// Aggregated, rounded table in presentation order
    pub table: AllocationTable,
    /// Unrounded per-source records in processing order
    pub records: Vec<AllocationRecord>,
    /// CRS areas were measured in
    pub crs: String,
    pub master_ha: f64,
    pub allocated_ha: f64,
    pub remaining_ha: f64,
    /// Component sources found
    pub discovered: usize,
    /// Component sources actually loaded and allocated
    pub visited: usize,
    /// Whether the run stopped early because the master was used up
    pub exhausted: bool,
}

impl AllocationOutcome {
    /// Sources skipped by early termination
    pub fn skipped(&self) -> usize {
        self.discovered - self.visited
    }
}

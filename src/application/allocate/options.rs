//! Allocate options

use std::path::PathBuf;

use crate::domain::value_objects::{
    Crs, NamingPolicy, ProcessingOrder, SortOrder, DEFAULT_EQUAL_AREA_CRS,
};

/// Options for the allocate and plan commands
#[derive(Debug, Clone)]
pub struct AllocateOptions {
    /// Master footprint file
    pub master: PathBuf,
    /// Root directory of component sources
    pub components: PathBuf,
    /// How layer names are derived from paths
    pub naming: NamingPolicy,
    /// Order components are allocated in
    pub order: ProcessingOrder,
    /// Presentation order of the final table
    pub sort: SortOrder,
    /// Target CRS for geographic inputs
    pub equal_area: Crs,
}

impl Default for AllocateOptions {
    fn default() -> Self {
        Self {
            master: PathBuf::new(),
            components: PathBuf::new(),
            naming: NamingPolicy::default(),
            order: ProcessingOrder::default(),
            sort: SortOrder::default(),
            equal_area: Crs::metric(DEFAULT_EQUAL_AREA_CRS),
        }
    }
}

impl AllocateOptions {
    /// Create new allocate options
    pub fn new(master: impl Into<PathBuf>, components: impl Into<PathBuf>) -> Self {
        Self {
            master: master.into(),
            components: components.into(),
            ..Self::default()
        }
    }

    /// Set naming policy
    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    /// Set processing order
    pub fn with_order(mut self, order: ProcessingOrder) -> Self {
        self.order = order;
        self
    }

    /// Set table sort order
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Set equal-area CRS
    pub fn with_equal_area(mut self, crs: Crs) -> Self {
        self.equal_area = crs;
        self
    }
}

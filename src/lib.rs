//! arealloc - sequential, non-overlapping area allocation
//!
//! A master footprint is split among ordered component layers: each layer
//! receives the part of the master it covers that no earlier layer claimed,
//! so overlapping inputs are never double counted. Geographic inputs are
//! projected to an equal-area CRS before any area is measured, and results
//! are reported in hectares rounded to one decimal after per-name summation.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{AllocateOptions, AllocateUseCase, AllocationOutcome, PlannedSource};
pub use config::Config;
pub use domain::entities::{AllocationRecord, AllocationTable, Footprint, Layer, LoadedLayer};
pub use domain::services::{aggregate, name_for, Allocator};
pub use domain::value_objects::{Crs, NamingPolicy, ProcessingOrder, SortOrder};
pub use error::{AllocError, AllocResult};
pub use infrastructure::{FsSourceDiscovery, GeoEngine, GeoJsonLayerLoader};

//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod crs;
mod naming_policy;
mod processing_order;
mod sort_order;

pub use crs::{Crs, CrsKind, DEFAULT_EQUAL_AREA_CRS};
pub use naming_policy::NamingPolicy;
pub use processing_order::ProcessingOrder;
pub use sort_order::SortOrder;

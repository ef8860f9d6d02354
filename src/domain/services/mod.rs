//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! Geometry math goes through the `GeometryEngine` port.

mod aggregator;
mod allocator;
mod crs_normalizer;
mod layer_naming;

pub use aggregator::{aggregate, round_one_decimal};
pub use allocator::{hectares, AllocationRun, Allocator, SQUARE_METRES_PER_HECTARE};
pub use crs_normalizer::normalize;
pub use layer_naming::name_for;

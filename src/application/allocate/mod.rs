//! Allocate Use Case
//!
//! Orchestrates one allocation run.
//!
//! This module handles:
//! - Discovering component sources and putting them in processing order
//! - Loading the master and building the allocator
//! - Loading components lazily as the allocator asks for them
//! - Aggregating records into the final table

mod options;
mod result;
mod use_case;


pub use options::AllocateOptions;
pub use result::{AllocationOutcome, PlannedSource};
pub use use_case::AllocateUseCase;

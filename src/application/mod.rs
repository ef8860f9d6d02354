//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AllocateUseCase` - Orchestrates discovery, loading, allocation and aggregation

pub mod allocate;

pub use allocate::{AllocateOptions, AllocateUseCase, AllocationOutcome, PlannedSource};

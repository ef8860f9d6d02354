//! Domain Entities
//!
//! - `Footprint` - CRS-tagged multipolygon, the unit of all geometry math
//! - `Layer` - One dissolved source file
//! - `AllocationRecord` / `AllocationTable` - Per-file and aggregated results

mod allocation;
mod footprint;
mod layer;

pub use allocation::{AllocationRecord, AllocationTable, TableRow};
pub use footprint::Footprint;
pub use layer::{EmptyReason, Layer, LoadedLayer};

//! Domain Layer
//!
//! The allocation core: pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Footprint, Layer, allocation records and tables
//! - `value_objects/` - Crs, NamingPolicy, ProcessingOrder, SortOrder
//! - `services/` - Allocator, aggregation, CRS normalization, naming
//! - `ports/` - GeometryEngine, LayerLoader and SourceDiscovery traits
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Explicit inputs** - Policies arrive as parameters, never from globals
//! 3. **Ports & Adapters** - Geometry and loading go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

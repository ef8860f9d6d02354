//! Source discovery implementations

mod fs_discovery;

pub use fs_discovery::{FsSourceDiscovery, DEFAULT_EXTENSIONS};

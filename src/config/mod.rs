//! Configuration module for arealloc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AREALLOC_*)
//! 3. `--config <FILE>`, else `./arealloc.toml`
//! 4. User config (~/.config/arealloc/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    AllocationConfig, Config, CustomCrsConfig, DiscoveryConfig, OrderConfig, OutputConfig,
};

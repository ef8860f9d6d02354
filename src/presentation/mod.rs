//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering
//!
//! ## Usage
//!
//! ```ignore
//! use arealloc::presentation::factory;
//!
//! let config = factory::load_config(None)?;
//! let use_case = factory::create_allocate_use_case(&config, Some(&master))?;
//! let outcome = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, SelectionArgs};
pub use factory::create_allocate_use_case;
pub use output::OutputFormat;

//! CRS command handler

use std::path::Path;

use anyhow::Result;

use arealloc::presentation::factory;
use arealloc::presentation::output::{render_crs, OutputFormat};

/// Execute the crs command
pub fn cmd_crs(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = factory::load_config(config_path)?;
    let registry = factory::create_registry(&config);
    println!(
        "{}",
        render_crs(&registry.describe(), OutputFormat::from_json_flag(json))
    );
    Ok(())
}

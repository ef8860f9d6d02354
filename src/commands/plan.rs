//! Plan command handler
//!
//! Shows which component sources an allocation would visit, and in what
//! order, without reading any geometry.

use std::path::Path;

use anyhow::Result;

use arealloc::presentation::factory;
use arealloc::presentation::output::{render_plan, OutputFormat};
use arealloc::presentation::SelectionArgs;

use super::apply_selection;

/// Execute the plan command
pub fn cmd_plan(
    config_path: Option<&Path>,
    master: Option<&Path>,
    selection: &SelectionArgs,
    json: bool,
) -> Result<()> {
    let mut config = factory::load_config(config_path)?;
    apply_selection(&mut config, selection);

    let registry = factory::create_registry(&config);
    let options = factory::create_allocate_options(
        &config,
        &registry,
        master.unwrap_or_else(|| Path::new("")),
        &selection.components,
    )?;
    let use_case = factory::create_allocate_use_case(&config, master)?;

    let plan = use_case.plan(&options)?;
    println!("{}", render_plan(&plan, OutputFormat::from_json_flag(json)));
    Ok(())
}

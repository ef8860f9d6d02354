//! Allocate command handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use arealloc::domain::value_objects::SortOrder;
use arealloc::infrastructure::write_csv;
use arealloc::presentation::factory;
use arealloc::presentation::output::{render_outcome, OutputFormat};
use arealloc::presentation::SelectionArgs;

use super::apply_selection;

/// Execute the allocate command
#[allow(clippy::too_many_arguments)]
pub fn cmd_allocate(
    config_path: Option<&Path>,
    master: &Path,
    selection: &SelectionArgs,
    sort: Option<SortOrder>,
    output: Option<PathBuf>,
    equal_area_crs: Option<String>,
    assume_crs: Option<String>,
    json: bool,
) -> Result<()> {
    let mut config = factory::load_config(config_path)?;
    apply_selection(&mut config, selection);
    if let Some(sort) = sort {
        config.output.sort = sort;
    }
    if let Some(code) = equal_area_crs {
        config.allocation.equal_area_crs = code;
    }
    if assume_crs.is_some() {
        config.allocation.assume_crs = assume_crs;
    }

    let registry = factory::create_registry(&config);
    let options =
        factory::create_allocate_options(&config, &registry, master, &selection.components)?;
    let use_case = factory::create_allocate_use_case(&config, Some(master))?;

    let outcome = use_case.execute(&options).with_context(|| {
        format!(
            "allocation of {} among {} failed",
            master.display(),
            selection.components.display()
        )
    })?;

    if let Some(path) = output.or(config.output.path) {
        write_csv(&path, &outcome.table)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if !json {
            eprintln!("wrote {}", path.display());
        }
    }

    println!("{}", render_outcome(&outcome, OutputFormat::from_json_flag(json)));
    Ok(())
}

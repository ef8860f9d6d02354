//! Command handlers for the `arealloc` binary

mod allocate;
mod crs;
mod plan;

pub use allocate::cmd_allocate;
pub use crs::cmd_crs;
pub use plan::cmd_plan;

use arealloc::config::Config;
use arealloc::presentation::SelectionArgs;

/// CLI flags override whatever the config file and environment said
fn apply_selection(config: &mut Config, selection: &SelectionArgs) {
    if let Some(naming) = selection.naming {
        config.allocation.naming = naming;
    }
    if let Some(order) = selection.order {
        config.allocation.order = order;
    }
    if !selection.priority.is_empty() {
        config.allocation.priority = selection.priority.clone();
    }
}

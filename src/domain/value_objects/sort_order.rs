//! Presentation order of the final table

use serde::{Deserialize, Serialize};

/// Sort order for the aggregated (layer, area) table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Largest area first
    #[default]
    AreaDesc,
    /// Smallest area first
    AreaAsc,
    /// Alphabetical by layer name
    Name,
}

//! Layer naming policy value object

use serde::{Deserialize, Serialize};

/// How a layer's display name is derived from its source file path
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// Name of the directory containing the source file
    #[default]
    ParentFolder,
    /// File name without its extension
    Filename,
}

impl std::str::FromStr for NamingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "parent_folder" | "folder" => Ok(NamingPolicy::ParentFolder),
            "filename" | "file" | "stem" => Ok(NamingPolicy::Filename),
            other => Err(format!("unknown naming policy '{}'", other)),
        }
    }
}

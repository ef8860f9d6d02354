//! Layer naming
//!
//! Names are derived per source file, so several files can share one name
//! (e.g. many shapes under one `forest/` folder) and are summed later.

use std::path::Path;

use crate::domain::value_objects::NamingPolicy;

pub fn name_for(path: &Path, policy: NamingPolicy) -> String {
    let stem = || {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    };

    match policy {
        NamingPolicy::Filename => stem(),
        NamingPolicy::ParentFolder => path
            .parent()
            .and_then(|parent| parent.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(stem),
    }
}

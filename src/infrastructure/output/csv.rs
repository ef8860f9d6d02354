//! CSV export of the final table
//!
//! Header `Layer,area_ha`, one decimal always printed, names quoted per
//! RFC 4180 when needed. Files are written atomically through a temp file in
//! the destination directory.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::entities::AllocationTable;
use crate::error::AllocResult;

pub const CSV_HEADER: &str = "Layer,area_ha";

pub fn render_csv(table: &AllocationTable) -> String {
    let mut out = String::with_capacity(16 * (table.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for row in table.rows() {
        out.push_str(&escape_field(&row.layer));
        out.push(',');
        out.push_str(&format!("{:.1}", row.area_ha));
        out.push('\n');
    }
    out
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write the table to `path`, replacing any existing file
pub fn write_csv(path: &Path, table: &AllocationTable) -> AllocResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(render_csv(table).as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

//! Export the attachment → source-file mapping to CSV.

use std::io::Write;
use std::path::Path;

use crate::error::{ExtractError, Result};
use crate::model::mapping::MappingEntry;

/// Write the mapping to a CSV file.
///
/// Header row `Attachment,EML_File`, one data row per entry in recorded
/// order. Unlike per-attachment write failures, a failure here aborts the
/// run.
pub fn export_mapping(entries: &[MappingEntry], output_path: &Path) -> Result<()> {
    let wrap = |e: std::io::Error| ExtractError::CsvExport {
        path: output_path.to_path_buf(),
        source: e,
    };

    let mut file = std::fs::File::create(output_path).map_err(wrap)?;
    writeln!(file, "Attachment,EML_File").map_err(wrap)?;

    for entry in entries {
        writeln!(
            file,
            "{},{}",
            csv_escape(&entry.attachment),
            csv_escape(&entry.source)
        )
        .map_err(wrap)?;
    }

    Ok(())
}

/// Escape a value for CSV (RFC 4180).
///
/// Wraps in double quotes if the value contains commas, quotes, or newlines.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

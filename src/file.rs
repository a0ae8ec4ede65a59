// src/file.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::options::ExportOptions;
use crate::csv;

/// Write the current view (comparison or full table) to a single file per
/// ExportOptions (path, headers policy, delimiter). Returns the path written.
pub fn write_export_single(
    export: &ExportOptions,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(export, headers, rows);

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;

    Ok(path)
}

/// Build the full export text (Copy and Export share this).
pub fn to_export_string(export: &ExportOptions, headers: &[String], rows: &[Vec<String>]) -> String {
    let hdr = export.include_headers.then_some(headers);
    csv::rows_to_string(hdr, rows, export.format.delim())
}

fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

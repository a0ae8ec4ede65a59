// src/source.rs
//
// Reading named tables out of a source document. Everything comes back as
// text; numeric meaning is assigned later by core::value, nowhere else.
//
// Two source shapes:
// - WorkbookSource: an xlsx workbook, tables are named sheets.
// - CsvDirSource: a directory holding one <table>.csv per table.

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Xlsx, open_workbook};
use thiserror::Error;

use crate::catalogue::Table;
use crate::csv;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open source {path}: {detail}")]
    Open { path: String, detail: String },

    #[error("table {table:?} not found in {path}")]
    MissingTable { table: String, path: String },

    #[error("malformed table {table:?} in {path}: {detail}")]
    Malformed {
        table: String,
        path: String,
        detail: String,
    },
}

/// A named-table reader. The store caches what these return, so a source is
/// free to re-open its backing file on every call.
pub trait TableSource {
    /// Human-readable identity for log lines and status messages.
    fn label(&self) -> String;

    fn read_table(&self, name: &str) -> Result<Table, SourceError>;
}

/// Pick a source implementation from the path shape: a directory is a CSV
/// table set, anything else is treated as a workbook.
pub fn open(path: &Path) -> Box<dyn TableSource> {
    if path.is_dir() {
        Box::new(CsvDirSource::new(path))
    } else {
        Box::new(WorkbookSource::new(path))
    }
}

/* ---------------- xlsx workbook ---------------- */

pub struct WorkbookSource {
    path: PathBuf,
}

impl WorkbookSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableSource for WorkbookSource {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn read_table(&self, name: &str) -> Result<Table, SourceError> {
        let mut wb: Xlsx<std::io::BufReader<std::fs::File>> =
            open_workbook(&self.path).map_err(|e: calamine::XlsxError| SourceError::Open {
            path: self.label(),
            detail: e.to_string(),
        })?;

        if !wb.sheet_names().iter().any(|s| s == name) {
            return Err(SourceError::MissingTable {
                table: s!(name),
                path: self.label(),
            });
        }

        let range = wb.worksheet_range(name).map_err(|e| SourceError::Malformed {
            table: s!(name),
            path: self.label(),
            detail: e.to_string(),
        })?;

        let mut rows = range.rows().map(row_text);
        let headers = rows.next().unwrap_or_default();
        Ok(Table::from_raw(headers, rows.collect()))
    }
}

fn row_text(row: &[Data]) -> Vec<String> {
    row.iter().map(cell_text).collect()
}

/// Coerce one workbook cell to text. No type inference happens here: the
/// value parser is the single source of numeric interpretation.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => s!(),
        Data::String(v) => v.clone(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.as_f64().to_string(),
        Data::DateTimeIso(v) | Data::DurationIso(v) => v.clone(),
    }
}

/* ---------------- CSV directory ---------------- */

pub struct CsvDirSource {
    dir: PathBuf,
}

impl CsvDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<Name>.csv` first, then the lowercase variant.
    fn candidates(&self, name: &str) -> [PathBuf; 2] {
        [
            self.dir.join(format!("{name}.csv")),
            self.dir.join(format!("{}.csv", name.to_lowercase())),
        ]
    }
}

impl TableSource for CsvDirSource {
    fn label(&self) -> String {
        self.dir.display().to_string()
    }

    fn read_table(&self, name: &str) -> Result<Table, SourceError> {
        let Some(path) = self.candidates(name).into_iter().find(|p| p.is_file()) else {
            return Err(SourceError::MissingTable {
                table: s!(name),
                path: self.label(),
            });
        };

        let text = fs::read_to_string(&path).map_err(|e| SourceError::Open {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;

        let (headers, rows) = csv::split_headers(csv::parse_rows(&text, ','));
        Ok(Table::from_raw(headers, rows))
    }
}

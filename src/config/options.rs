// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::{DEFAULT_EXPORT_STEM, DEFAULT_SOURCE, TABLE_CLOTHING, TABLE_SUNSCREENS};

/// The two catalogue categories. Order here is tab order in the GUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Sunscreens,
    Clothing,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Sunscreens, Category::Clothing];

    /// Name of the table in the source document.
    pub fn table_name(&self) -> &'static str {
        match self {
            Category::Sunscreens => TABLE_SUNSCREENS,
            Category::Clothing => TABLE_CLOTHING,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Sunscreens => "Sunscreens",
            Category::Clothing => "Clothing",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Path to the source workbook (or directory of CSV tables).
    pub source: PathBuf,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    pub fn delim(&self) -> char {
        match self {
            ExportFormat::Csv => ',',
            ExportFormat::Tsv => '\t',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            path: PathBuf::from(DEFAULT_EXPORT_STEM),
        }
    }
}

impl ExportOptions {
    /// Output path; when the user gave no extension, the format supplies one.
    pub fn out_path(&self) -> PathBuf {
        if self.path.extension().is_some() {
            self.path.clone()
        } else {
            self.path.with_extension(self.format.ext())
        }
    }

    /// Parse GUI/CLI text into the output path. A pasted extension wins over
    /// the format's default extension.
    pub fn set_path(&mut self, text: &str) {
        let t = text.trim();
        if !t.is_empty() {
            self.path = Path::new(t).to_path_buf();
        }
    }
}

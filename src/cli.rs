// src/cli.rs
use std::env;
use std::error::Error;
use std::path::PathBuf;

use crate::catalogue::{RowView, project};
use crate::compare::{build_comparison, comparison_headers, comparison_rows};
use crate::config::consts::MAX_COMPARE;
use crate::config::options::{Category, ExportFormat, ExportOptions};
use crate::core::label::build_label;
use crate::csv;
use crate::file;
use crate::source;
use crate::specs::spec_for;
use crate::store::CatalogueStore;

pub enum Action {
    /// Print "index<TAB>label" for every row of the category.
    List,
    /// Compare the picked products.
    Compare,
    /// Print the projected full table.
    Full,
}

pub struct CliOptions {
    pub source: PathBuf,
    pub category: Category,
    pub action: Action,
    pub export: ExportOptions,
    /// Write to this file instead of stdout.
    pub out: Option<String>,
    /// Labels picked for comparison (resolved to row indices at run time).
    pub picks: Vec<String>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(crate::config::consts::DEFAULT_SOURCE),
            category: Category::Sunscreens,
            action: Action::List,
            export: ExportOptions::default(),
            out: None,
            picks: Vec::new(),
        }
    }
}

pub fn parse_cli() -> Result<CliOptions, Box<dyn Error>> {
    let mut opts = CliOptions::default();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--source" => {
                opts.source = PathBuf::from(args.next().ok_or("Missing source path")?);
            }
            "-c" | "--category" => {
                let v = args.next().ok_or("Missing category")?;
                opts.category = match v.to_lowercase().as_str() {
                    "sunscreens" | "sunscreen" => Category::Sunscreens,
                    "clothing" => Category::Clothing,
                    other => return Err(format!("Unknown category: {}", other).into()),
                };
            }
            "-l" | "--list" => opts.action = Action::List,
            "--full" => opts.action = Action::Full,
            "-p" | "--pick" => {
                opts.action = Action::Compare;
                opts.picks.push(args.next().ok_or("Missing pick label")?);
            }
            "-f" | "--format" => {
                let v = args.next().ok_or("Missing format")?;
                opts.export.format = match v.to_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-o" | "--out" => opts.out = Some(args.next().ok_or("Missing output file")?),
            "--no-headers" => opts.export.include_headers = false,
            "-h" | "--help" => {
                eprintln!("{}", USAGE);
                std::process::exit(0);
            }
            other => return Err(format!("Unknown arg: {}", other).into()),
        }
    }

    Ok(opts)
}

const USAGE: &str = "\
Usage: cli [-s <source>] [-c sunscreens|clothing] <action> [options]
Actions:
  -l, --list            list products (index and label)
  -p, --pick <label>    compare picked products (repeatable, up to 3)
      --full            print the full display table
Options:
  -f, --format csv|tsv  output format (default csv)
  -o, --out <file>      write to file instead of stdout
      --no-headers      omit the header line";

pub fn run(mut opts: CliOptions) -> Result<(), Box<dyn Error>> {
    let store = CatalogueStore::new(source::open(&opts.source));
    let cat = opts.category;

    let (table, warning) = store.load_or_empty(cat.table_name());
    if let Some(w) = warning {
        loge!("CLI: {}", w);
        eprintln!("warning: {} (continuing with empty {})", w, cat.title());
    }

    match opts.action {
        Action::List => {
            for (ix, row) in table.row_views().enumerate() {
                println!("{}\t{}", ix, build_label(row, cat));
            }
            Ok(())
        }

        Action::Full => {
            let view = project(&table, spec_for(cat).display_columns);
            emit(&mut opts, view.columns, view.rows)
        }

        Action::Compare => {
            if opts.picks.len() > MAX_COMPARE {
                eprintln!("warning: more than {} picks, extra ones ignored", MAX_COMPARE);
                opts.picks.truncate(MAX_COMPARE);
            }

            let ids = resolve_picks(&table.row_views().collect::<Vec<_>>(), &opts.picks, cat);
            let rows: Vec<RowView<'_>> = ids.iter().filter_map(|&ix| table.row(ix)).collect();

            let records = build_comparison(&rows, cat);
            logf!("CLI: compare category={:?}, picks={}, records={}",
                cat, opts.picks.len(), records.len());

            emit(&mut opts, comparison_headers(cat), comparison_rows(&records))
        }
    }
}

/// Resolve label picks to row indices. Labels are a convenience surface here;
/// identity is the row index, so an ambiguous label takes the first match and
/// says so.
fn resolve_picks(rows: &[RowView<'_>], picks: &[String], cat: Category) -> Vec<usize> {
    let mut ids = Vec::with_capacity(picks.len());

    for pick in picks {
        let want = pick.trim();
        let matches: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, r)| build_label(**r, cat) == want)
            .map(|(ix, _)| ix)
            .collect();

        match matches.as_slice() {
            [] => eprintln!("warning: no product labelled {:?}, skipped", want),
            [one] => ids.push(*one),
            [first, ..] => {
                eprintln!(
                    "warning: {} products share the label {:?}; using the first",
                    matches.len(),
                    want
                );
                ids.push(*first);
            }
        }
    }

    ids
}

fn emit(
    opts: &mut CliOptions,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> Result<(), Box<dyn Error>> {
    match opts.out.take() {
        Some(path) => {
            opts.export.set_path(&path);
            let written = file::write_export_single(&opts.export, &headers, &rows)?;
            eprintln!("Wrote {}", written.display());
        }
        None => {
            let hdr = opts.export.include_headers.then_some(headers.as_slice());
            print!("{}", csv::rows_to_string(hdr, &rows, opts.export.format.delim()));
        }
    }
    Ok(())
}

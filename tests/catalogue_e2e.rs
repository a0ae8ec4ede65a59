// tests/catalogue_e2e.rs
//
// End-to-end over a CSV-directory source: load, label, select, compare,
// project, export.

use std::fs;
use std::path::PathBuf;

use photocat::catalogue::project;
use photocat::compare::{build_comparison, comparison_headers, comparison_rows};
use photocat::config::options::{Category, ExportOptions};
use photocat::core::label::build_label;
use photocat::file;
use photocat::source;
use photocat::specs::spec_for;
use photocat::store::CatalogueStore;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("photocat_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn write_sunscreens(dir: &PathBuf) {
    fs::write(
        dir.join("sunscreens.csv"),
        "Product Brand,Product Name,SPF (lab),Price (\u{a3}),Volume (ml)\n\
         A,X,30,10,50\n\
         B,Y,50,20,100\n",
    )
    .unwrap();
}

#[test]
fn load_select_compare() {
    let dir = tmp_dir("compare");
    write_sunscreens(&dir);

    let store = CatalogueStore::new(source::open(&dir));
    let (table, warning) = store.load_or_empty("Sunscreens");
    assert!(warning.is_none());
    assert_eq!(table.nrows(), 2);

    let labels: Vec<String> = table
        .row_views()
        .map(|r| build_label(r, Category::Sunscreens))
        .collect();
    assert_eq!(labels, vec!["A — X — 50 ml", "B — Y — 100 ml"]);

    // select both rows (by index, as the picker does)
    let rows: Vec<_> = [0usize, 1].iter().filter_map(|&ix| table.row(ix)).collect();
    let recs = build_comparison(&rows, Category::Sunscreens);

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].spf, Some(30.0));
    assert_eq!(recs[1].spf, Some(50.0));
    assert_eq!(recs[0].price_metric, Some(0.2));
    assert_eq!(recs[1].price_metric, Some(0.2));
}

#[test]
fn full_table_projection_tolerates_missing_display_columns() {
    let dir = tmp_dir("projection");
    write_sunscreens(&dir);

    let store = CatalogueStore::new(source::open(&dir));
    let (table, _) = store.load_or_empty("Sunscreens");

    let view = project(&table, spec_for(Category::Sunscreens).display_columns);
    // Only the columns that exist, in display order; Price / ml, the other
    // lab columns and Image are simply absent.
    assert_eq!(
        view.columns,
        vec![
            "Product Brand",
            "Product Name",
            "Price (£)",
            "Volume (ml)",
            "SPF (lab)",
        ]
    );
    assert_eq!(view.nrows(), 2);
}

#[test]
fn missing_table_degrades_per_category() {
    let dir = tmp_dir("missing");
    write_sunscreens(&dir);

    let store = CatalogueStore::new(source::open(&dir));

    let (suns, warn) = store.load_or_empty("Sunscreens");
    assert!(warn.is_none());
    assert!(!suns.is_empty());

    // No clothing.csv in the directory: empty table, surfaced once.
    let (cloth, warn) = store.load_or_empty("Clothing");
    assert!(cloth.is_empty());
    assert!(warn.is_some());
    let (_, warn) = store.load_or_empty("Clothing");
    assert!(warn.is_none());
}

#[test]
fn comparison_exports_to_csv() {
    let dir = tmp_dir("export");
    write_sunscreens(&dir);

    let store = CatalogueStore::new(source::open(&dir));
    let (table, _) = store.load_or_empty("Sunscreens");
    let rows: Vec<_> = table.row_views().collect();
    let recs = build_comparison(&rows, Category::Sunscreens);

    let mut export = ExportOptions::default();
    export.set_path(dir.join("out").to_str().unwrap());

    let written = file::write_export_single(
        &export,
        &comparison_headers(Category::Sunscreens),
        &comparison_rows(&recs),
    )
    .unwrap();
    assert!(written.to_string_lossy().ends_with("out.csv"));

    let content = fs::read_to_string(&written).unwrap();
    assert!(content.starts_with("Product,"));
    assert!(content.contains("A — X — 50 ml"));
    assert!(content.contains("0.20"));
}

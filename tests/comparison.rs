// tests/comparison.rs

use photocat::catalogue::{RowView, Table};
use photocat::compare::{build_comparison, comparison_headers, comparison_rows};
use photocat::config::options::Category;

const SUN_COLS: &[&str] = &[
    "Product Brand",
    "Product Name",
    "SPF (lab)",
    "UVA Protection (Lab)",
    "Blue Light Protection (lab)",
    "Visible Protection (lab)",
    "Price (£)",
    "Volume (ml)",
];

fn sun_table(rows: &[&[&str]]) -> Table {
    Table::from_raw(
        SUN_COLS.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

fn views(t: &Table) -> Vec<RowView<'_>> {
    t.row_views().collect()
}

#[test]
fn price_per_volume_derivation() {
    let t = sun_table(&[&["A", "X", "30", "", "", "", "20", "100"]]);
    let recs = build_comparison(&views(&t), Category::Sunscreens);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].price_metric, Some(0.2));
    assert_eq!(recs[0].spf, Some(30.0));
}

#[test]
fn zero_or_absent_volume_gives_absent_not_infinity() {
    let zero = sun_table(&[&["A", "X", "30", "", "", "", "20", "0"]]);
    let recs = build_comparison(&views(&zero), Category::Sunscreens);
    assert_eq!(recs[0].price_metric, None);

    let missing = sun_table(&[&["A", "X", "30", "", "", "", "20", ""]]);
    let recs = build_comparison(&views(&missing), Category::Sunscreens);
    assert_eq!(recs[0].price_metric, None);

    let no_price = sun_table(&[&["A", "X", "30", "", "", "", "", "100"]]);
    let recs = build_comparison(&views(&no_price), Category::Sunscreens);
    assert_eq!(recs[0].price_metric, None);
}

#[test]
fn clothing_price_is_passed_through() {
    let t = Table::from_raw(
        vec!["Product Brand".into(), "Product Name".into(), "Price (£)".into()],
        vec![vec!["B".into(), "Vest".into(), "35.50".into()]],
    );
    let recs = build_comparison(&views(&t), Category::Clothing);
    assert_eq!(recs[0].price_metric, Some(35.5));
}

#[test]
fn one_record_per_row_in_input_order_any_size() {
    // 5 rows: more than the UI cap; the builder must not care.
    let t = sun_table(&[
        &["A", "P1", "10", "", "", "", "", ""],
        &["B", "P2", "20", "", "", "", "", ""],
        &["C", "P3", "30", "", "", "", "", ""],
        &["D", "P4", "40", "", "", "", "", ""],
        &["E", "P5", "50", "", "", "", "", ""],
    ]);
    let recs = build_comparison(&views(&t), Category::Sunscreens);
    assert_eq!(recs.len(), 5);
    let spfs: Vec<_> = recs.iter().map(|r| r.spf).collect();
    assert_eq!(
        spfs,
        vec![Some(10.0), Some(20.0), Some(30.0), Some(40.0), Some(50.0)]
    );

    assert!(build_comparison(&[], Category::Sunscreens).is_empty());
}

#[test]
fn all_absent_row_still_yields_a_record() {
    let t = sun_table(&[&["A", "X", "tbd", "?", "", "n/a", "", ""]]);
    let recs = build_comparison(&views(&t), Category::Sunscreens);
    assert_eq!(recs.len(), 1);
    let r = &recs[0];
    assert_eq!(r.label, "A — X");
    assert!(r.protection_metrics().iter().all(Option::is_none));
    assert_eq!(r.price_metric, None);
}

#[test]
fn suffix_annotations_flow_through_metrics() {
    let t = sun_table(&[&["A", "X", "50+", "98.7%", "", "", "20", "100"]]);
    let recs = build_comparison(&views(&t), Category::Sunscreens);
    assert_eq!(recs[0].spf, Some(50.0));
    assert_eq!(recs[0].uva, Some(98.7));
}

#[test]
fn tabular_rendering_of_records() {
    let t = sun_table(&[&["A", "X", "30", "", "", "", "20", "100"]]);
    let recs = build_comparison(&views(&t), Category::Sunscreens);

    let headers = comparison_headers(Category::Sunscreens);
    assert_eq!(headers[0], "Product");
    assert_eq!(headers[5], "Price / ml");

    let rows = comparison_rows(&recs);
    assert_eq!(rows[0][0], "A — X — 100 ml");
    assert_eq!(rows[0][1], "30");
    assert_eq!(rows[0][2], ""); // absent metric renders empty
    assert_eq!(rows[0][5], "0.20");
}

// src/compare.rs
//
// Comparison construction: turns 0..n selected rows into normalized records
// the presentation layer can chart and tabulate. One record per input row, in
// input order, even when nothing in the row parses; downstream skips empty
// charts instead of losing the product.

use crate::catalogue::RowView;
use crate::config::options::Category;
use crate::core::label::build_label;
use crate::core::value::parse_numeric;
use crate::specs::spec_for;

/// Normalized comparison data for one selected product.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRecord {
    pub label: String,

    /// Lab protection metrics; absent when the cell is empty/unparseable or
    /// the column is missing from the source table.
    pub spf: Option<f64>,
    pub uva: Option<f64>,
    pub blue_light: Option<f64>,
    pub visible: Option<f64>,

    /// Sunscreens: price per ml. Clothing: total price.
    pub price_metric: Option<f64>,
}

impl ComparisonRecord {
    pub fn protection_metrics(&self) -> [Option<f64>; 4] {
        [self.spf, self.uva, self.blue_light, self.visible]
    }
}

/// Build one comparison record per row. The selection UI caps input at
/// MAX_COMPARE; this function tolerates any size, including 0 and >3.
pub fn build_comparison(rows: &[RowView<'_>], category: Category) -> Vec<ComparisonRecord> {
    let spec = spec_for(category);

    rows.iter()
        .map(|row| ComparisonRecord {
            label: build_label(*row, category),
            spf: parse_numeric(row.get(spec.spf)),
            uva: parse_numeric(row.get(spec.uva)),
            blue_light: parse_numeric(row.get(spec.blue_light)),
            visible: parse_numeric(row.get(spec.visible)),
            price_metric: price_metric(*row, category),
        })
        .collect()
}

/// Header line of the tabular comparison view, in display order.
pub fn comparison_headers(category: Category) -> Vec<String> {
    let spec = spec_for(category);
    vec![
        s!("Product"),
        s!(spec.spf),
        s!(spec.uva),
        s!(spec.blue_light),
        s!(spec.visible),
        s!(spec.price_metric_title),
    ]
}

/// Records as text rows matching `comparison_headers`. Absent metrics render
/// as empty cells; the price metric gets two decimals.
pub fn comparison_rows(records: &[ComparisonRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| {
            vec![
                r.label.clone(),
                fmt_metric(r.spf),
                fmt_metric(r.uva),
                fmt_metric(r.blue_light),
                fmt_metric(r.visible),
                r.price_metric.map(|v| format!("{v:.2}")).unwrap_or_default(),
            ]
        })
        .collect()
}

fn fmt_metric(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

/// Derived price metric.
///
/// Sunscreens are consumables: price divided by volume, absent when either
/// side is absent or the volume is zero (no infinities, no panics). Clothing
/// is durable: the parsed price as-is.
fn price_metric(row: RowView<'_>, category: Category) -> Option<f64> {
    let spec = spec_for(category);
    let price = parse_numeric(row.get(spec.price));

    match spec.volume {
        Some(vol_col) => {
            let volume = parse_numeric(row.get(vol_col)).filter(|v| *v != 0.0)?;
            Some(price? / volume)
        }
        None => price,
    }
}

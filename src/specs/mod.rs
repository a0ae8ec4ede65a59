// src/specs/mod.rs
//
// Per-category column specs: the single edit point binding logical fields
// (brand, name, price, lab metrics, image) to the exact header text in the
// source tables. Header renames in the spreadsheet are fixed here and
// nowhere else.

use crate::config::options::Category;

pub mod clothing;
pub mod sunscreens;

pub struct CategorySpec {
    pub category: Category,

    // Identity / label fields
    pub brand: &'static str,
    pub name: &'static str,
    /// Label suffix for sunscreens: volume, rendered as "<value> ml".
    pub volume: Option<&'static str>,
    /// Label suffix for clothing: material, rendered verbatim.
    pub material: Option<&'static str>,

    // Comparison metrics (lab measurements)
    pub spf: &'static str,
    pub uva: &'static str,
    pub blue_light: &'static str,
    pub visible: &'static str,

    // Price
    pub price: &'static str,
    /// Column title for the derived price metric in the comparison view.
    pub price_metric_title: &'static str,

    pub image: &'static str,

    /// Columns of the full-table view, in display order. Consumed by the
    /// projector; missing columns are silently omitted.
    pub display_columns: &'static [&'static str],
}

pub fn spec_for(category: Category) -> &'static CategorySpec {
    match category {
        Category::Sunscreens => &sunscreens::SPEC,
        Category::Clothing => &clothing::SPEC,
    }
}

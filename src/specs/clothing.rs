// src/specs/clothing.rs

use super::CategorySpec;
use crate::config::options::Category;

pub static SPEC: CategorySpec = CategorySpec {
    category: Category::Clothing,

    brand: "Product Brand",
    name: "Product Name",
    volume: None,
    material: Some("Material"),

    spf: "SPF (lab)",
    uva: "UVA Protection (Lab)",
    blue_light: "Blue Light Protection (lab)",
    visible: "Visible Protection (lab)",

    price: "Price (£)",
    // No per-volume derivation for garments; the metric is the price as-is.
    price_metric_title: "Price (£)",

    image: "Image",

    display_columns: &[
        "Product Brand",
        "Product Name",
        "Price (£)",
        "SPF (lab)",
        "UVA Protection (Lab)",
        "Blue Light Protection (lab)",
        "Visible Protection (lab)",
        "Image",
    ],
};

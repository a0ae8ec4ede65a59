// src/specs/sunscreens.rs

use super::CategorySpec;
use crate::config::options::Category;

pub static SPEC: CategorySpec = CategorySpec {
    category: Category::Sunscreens,

    brand: "Product Brand",
    name: "Product Name",
    volume: Some("Volume (ml)"),
    material: None,

    spf: "SPF (lab)",
    uva: "UVA Protection (Lab)",
    blue_light: "Blue Light Protection (lab)",
    visible: "Visible Protection (lab)",

    price: "Price (£)",
    price_metric_title: "Price / ml",

    image: "Image",

    display_columns: &[
        "Product Brand",
        "Product Name",
        "Price (£)",
        "Volume (ml)",
        "Price / ml",
        "SPF (lab)",
        "UVA Protection (Lab)",
        "Blue Light Protection (lab)",
        "Visible Protection (lab)",
        "Image",
    ],
};

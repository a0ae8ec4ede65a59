// src/config/consts.rs

// Source document
pub const DEFAULT_SOURCE: &str = "catalogue.xlsx";
pub const TABLE_SUNSCREENS: &str = "Sunscreens";
pub const TABLE_CLOTHING: &str = "Clothing";

// Selection
pub const MAX_COMPARE: usize = 3;

// Export
pub const DEFAULT_EXPORT_STEM: &str = "comparison";

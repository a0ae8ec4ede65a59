// src/gui/components/mod.rs
pub mod category_tabs;
pub mod charts;
pub mod compare_view;
pub mod data_table;
pub mod export_bar;
pub mod image_strip;
pub mod picker_panel;

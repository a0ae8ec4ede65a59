// src/gui/components/compare_view.rs
//
// The comparison surface: metrics table, bar charts, thumbnail strip.
// Built fresh every frame from the current selection; nothing is persisted.

use eframe::egui;

use crate::compare::{build_comparison, comparison_headers, comparison_rows};
use crate::gui::app::App;
use crate::gui::components::{charts, data_table, image_strip};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cat = app.current_category();
    let table = app.table(cat);
    let selection: Vec<usize> = app.state.gui.selection(cat).to_vec();

    if selection.is_empty() {
        ui.label("Pick 1–3 items on the left to compare.");
        return;
    }

    let rows: Vec<_> = selection.iter().filter_map(|&ix| table.row(ix)).collect();
    let records = build_comparison(&rows, cat);

    egui::ScrollArea::vertical()
        .id_salt("compare_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            data_table::draw(ui, "compare_table", &comparison_headers(cat), &comparison_rows(&records));

            ui.separator();
            charts::draw(ui, cat, &records);

            ui.separator();
            image_strip::draw(ui, app, &table, &selection);
        });
}

// src/gui/components/picker_panel.rs
//
// Product picker for the active category: one checkbox per row, capped at
// MAX_COMPARE. Checkboxes carry row indices, not labels; two products with
// the same label stay independently selectable.

use eframe::egui;

use crate::config::consts::MAX_COMPARE;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cat = app.current_category();
    let labels: Vec<String> = app.labels_for(cat).to_vec();
    let nrows = labels.len();

    ui.heading(cat.title());

    let picked = app.state.gui.selection(cat).len();
    ui.label(format!("Pick up to {} to compare ({} picked)", MAX_COMPARE, picked));

    ui.checkbox(&mut app.state.gui.show_full_table, "Show full table");

    ui.horizontal(|ui| {
        if ui.button("Clear").clicked() {
            app.state.gui.selection_mut(cat).clear();
            logd!("UI: selection cleared for {:?}", cat);
        }
    });

    ui.separator();

    let mut status_msg: Option<String> = None;

    if nrows == 0 {
        ui.label("No data for this category.");
    } else {
        egui::ScrollArea::vertical()
            .id_salt("picker_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let at_cap = picked >= MAX_COMPARE;
                let sel = app.state.gui.selection_mut(cat);

                for (ix, label) in labels.iter().enumerate() {
                    let mut checked = sel.contains(&ix);
                    let enabled = checked || !at_cap;

                    let resp = ui.add_enabled(enabled, egui::Checkbox::new(&mut checked, label));
                    if resp.changed() {
                        if checked {
                            sel.push(ix);
                        } else {
                            sel.retain(|&s| s != ix);
                        }
                        status_msg = Some(format!("Selection: {} item(s)", sel.len()));
                        logd!("UI: {:?} row {} → {}", cat, ix, checked);
                    }
                }
            });
    }

    if let Some(msg) = status_msg {
        app.status(msg);
    }

    ui.separator();
    ui.small(format!("Source: {}", app.store.source_label()));
}

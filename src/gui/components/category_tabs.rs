// src/gui/components/category_tabs.rs
//
// Category tab strip. Switching tabs keeps each category's own selection.

use eframe::egui;

use crate::config::options::Category;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        for cat in Category::ALL {
            let active = app.current_category() == cat;
            if ui.selectable_label(active, cat.title()).clicked() && !active {
                app.state.gui.category = cat;
                logf!("UI: category → {:?}", cat);
            }
        }
    });
}

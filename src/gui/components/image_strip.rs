// src/gui/components/image_strip.rs
//
// Thumbnails for the selected products. The "Image" column holds either a web
// address (recognized by its scheme prefix) or a path relative to where the
// app runs. Resolution happens in egui's image loaders; an unresolvable
// reference degrades to the text label alone.

use eframe::egui::{self, Vec2};

use crate::catalogue::Table;
use crate::gui::app::App;
use crate::specs::spec_for;

const THUMB_MAX: Vec2 = Vec2::new(160.0, 120.0);

pub fn draw(ui: &mut egui::Ui, app: &App, table: &Table, selection: &[usize]) {
    let cat = app.current_category();
    let spec = spec_for(cat);
    let labels = app.labels_for(cat);

    ui.horizontal_wrapped(|ui| {
        for &ix in selection {
            let Some(row) = table.row(ix) else { continue };
            let label = labels.get(ix).map(|l| l.as_str()).unwrap_or("");
            let reference = row.get(spec.image).trim();

            ui.vertical(|ui| {
                ui.set_width(THUMB_MAX.x + 8.0);
                if let Some(uri) = resolve(reference) {
                    ui.add(
                        egui::Image::from_uri(uri)
                            .max_size(THUMB_MAX)
                            .show_loading_spinner(false),
                    );
                }
                ui.label(label);
            });
            ui.add_space(8.0);
        }
    });
}

fn resolve(reference: &str) -> Option<String> {
    if reference.is_empty() {
        return None;
    }
    if reference.starts_with("http://") || reference.starts_with("https://") {
        Some(s!(reference))
    } else {
        // Path relative to the app's working directory; the file loader
        // resolves it and fails soft on a bad reference.
        Some(join!("file://", reference))
    }
}

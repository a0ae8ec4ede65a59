// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    file,
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            ui.checkbox(&mut export.include_headers, "Include headers");
        });

        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        // Copy
        if ui.button("Copy").clicked() {
            let (headers, rows) = app.current_view();
            if rows.is_empty() {
                app.status("Nothing to copy");
                logd!("Copy: Clicked, but there's nothing to copy");
            } else {
                let txt = file::to_export_string(&app.state.options.export, &headers, &rows);
                ui.ctx().copy_text(txt);
                logf!("Copy: rows={}, headers={}", rows.len(), headers.len());
                app.status("Copied to clipboard");
            }
        }

        // Export
        if ui.button("Export").clicked() {
            let (headers, rows) = app.current_view();
            if rows.is_empty() {
                app.status("Nothing to export");
                logd!("Export: Clicked, but there's nothing to export");
            } else {
                if app.out_path_dirty {
                    app.state.options.export.set_path(&app.out_path_text);
                    app.out_path_dirty = false;
                    logf!("Export: Out path set → {}",
                        app.state.options.export.out_path().display());
                }

                match file::write_export_single(&app.state.options.export, &headers, &rows) {
                    Ok(path) => {
                        logf!("Export: OK rows={} → {}", rows.len(), path.display());
                        app.status(format!("Exported to {}", path.display()));
                    }
                    Err(e) => {
                        loge!("Export: Error: {}", e);
                        app.status(format!("Export error: {e}"));
                    }
                }
            }
        }
    });
}

// src/gui/components/data_table.rs
//
// Draws a headers+rows view with egui_extras. Purely a view: callers decide
// what the table contains (projected full table or comparison records).

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::core::value::parse_numeric;

pub fn draw(ui: &mut egui::Ui, id_salt: &str, headers: &[String], rows: &[Vec<String>]) {
    let cols = headers.len();
    if cols == 0 {
        ui.label("No displayable columns.");
        return;
    }

    // A column is numeric when every non-empty cell in it parses; those get
    // centered headers and right-aligned cells.
    let numeric: Vec<bool> = (0..cols)
        .map(|ci| {
            let mut any = false;
            let all = rows.iter().all(|r| {
                let cell = r.get(ci).map(|c| c.trim()).unwrap_or("");
                if cell.is_empty() {
                    true
                } else {
                    any = true;
                    parse_numeric(cell).is_some()
                }
            });
            any && all
        })
        .collect();

    let mut table = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .min_scrolled_height(0.0);
    for _ in 0..cols {
        table = table.column(Column::auto().at_least(40.0).clip(true).resizable(true));
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in headers.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = egui::Label::new(RichText::new(h).strong()).selectable(false);
                    if numeric[ci] {
                        ui.centered_and_justified(|ui| {
                            ui.add(label);
                        });
                    } else {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.add(label);
                        });
                    }
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(20.0, |mut tr| {
                    for ci in 0..cols {
                        let cell = row.get(ci).map(|c| c.as_str()).unwrap_or("");
                        tr.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            if numeric[ci] {
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    ui.label(cell);
                                });
                            } else {
                                ui.label(cell);
                            }
                        });
                    }
                });
            }
        });
}

// src/gui/app.rs
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

use eframe::egui;

use crate::{
    catalogue::{Table, project},
    compare::{build_comparison, comparison_headers, comparison_rows},
    config::{
        options::Category,
        state::AppState,
    },
    core::label::build_label,
    source,
    specs::spec_for,
    store::CatalogueStore,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Photoprotection Catalogue",
        options,
        Box::new(|cc| {
            // Thumbnails: file + http loaders, image crate as decode backend.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(AppState::default())))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // memoizing loader; tables come back as shared immutable Arcs
    pub store: CatalogueStore,

    // per-category loaded tables + precomputed display labels (row order)
    pub tables: HashMap<Category, Arc<Table>>,
    pub labels: HashMap<Category, Vec<String>>,

    // output text field UX (maps <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let store = CatalogueStore::new(source::open(&state.options.source));

        let mut status = s!("Idle");
        let mut tables = HashMap::new();
        let mut labels = HashMap::new();

        // Load both categories up front; a failed category degrades to an
        // empty table and the condition is surfaced once.
        for cat in Category::ALL {
            let (table, warning) = store.load_or_empty(cat.table_name());
            if let Some(w) = warning {
                loge!("Load: {}", w);
                status = format!("{} unavailable: {}", cat.title(), w);
            } else {
                logf!("Load: {:?} rows={}, cols={}", cat, table.nrows(), table.ncols());
            }

            let labs = table
                .row_views()
                .map(|r| build_label(r, cat))
                .collect::<Vec<_>>();
            labels.insert(cat, labs);
            tables.insert(cat, table);
        }

        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!("Init: source={}, default category={:?}",
            store.source_label(), state.gui.category);

        Self {
            state,
            store,
            tables,
            labels,
            out_path_text,
            out_path_dirty: false,
            status,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_category(&self) -> Category {
        self.state.gui.category
    }

    pub fn table(&self, cat: Category) -> Arc<Table> {
        self.tables
            .get(&cat)
            .cloned()
            .unwrap_or_else(Table::empty_shared)
    }

    pub fn labels_for(&self, cat: Category) -> &[String] {
        self.labels.get(&cat).map(|v| v.as_slice()).unwrap_or(&[])
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Headers + rows of whatever the central panel is currently showing.
    /// Copy/Export operate on exactly this view.
    pub fn current_view(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let cat = self.current_category();
        let table = self.table(cat);

        if self.state.gui.show_full_table {
            let view = project(&table, spec_for(cat).display_columns);
            return (view.columns, view.rows);
        }

        let sel = self.state.gui.selection(cat);
        let rows: Vec<_> = sel.iter().filter_map(|&ix| table.row(ix)).collect();
        let records = build_comparison(&rows, cat);
        (comparison_headers(cat), comparison_rows(&records))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("picker")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                crate::gui::components::picker_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::category_tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            if self.state.gui.show_full_table {
                let cat = self.current_category();
                let table = self.table(cat);
                let view = project(&table, spec_for(cat).display_columns);
                crate::gui::components::data_table::draw(ui, "full_table", &view.columns, &view.rows);
            } else {
                crate::gui::components::compare_view::draw(ui, self);
            }
        });
    }
}

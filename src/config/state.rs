// src/config/state.rs
use std::collections::HashMap;

use super::options::{AppOptions, Category};

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Per-category picks: row indices into that category's loaded table.
    /// Capped at MAX_COMPARE by the picker; the core tolerates any size.
    pub selected: HashMap<Category, Vec<usize>>,

    /// Show the full projected table instead of the comparison view.
    pub show_full_table: bool,

    /// Active tab.
    pub category: Category,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected: HashMap::new(),
            show_full_table: false,
            category: Category::Sunscreens,
        }
    }
}

impl GuiState {
    pub fn selection(&self, cat: Category) -> &[usize] {
        self.selected.get(&cat).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn selection_mut(&mut self, cat: Category) -> &mut Vec<usize> {
        self.selected.entry(cat).or_default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

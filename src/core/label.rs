// src/core/label.rs
//
// Display labels for catalogue rows. A label is recomputed on demand from the
// row's cells; it is never stored and never used as an identifier (selection
// is by row index).

use crate::catalogue::RowView;
use crate::config::options::Category;
use crate::specs::spec_for;

const SEP: &str = " — ";

/// Build the display label for one row.
///
/// Brand and name are joined with an em-dash separator, skipping empty sides.
/// Sunscreens get the volume appended as "<value> ml", clothing gets the
/// material, both skipped when empty or the literal "nan". When brand and name
/// are both empty, the first non-empty cell anywhere in the row stands in; a
/// suffix whose cell already supplied that stand-in is not appended again.
pub fn build_label(row: RowView<'_>, category: Category) -> String {
    let spec = spec_for(category);

    let brand = row.get(spec.brand).trim();
    let name = row.get(spec.name).trim();

    let mut parts: Vec<String> = Vec::with_capacity(3);
    if !brand.is_empty() {
        parts.push(s!(brand));
    }
    if !name.is_empty() {
        parts.push(s!(name));
    }

    let mut fallback_col: Option<&str> = None;
    if parts.is_empty() {
        if let Some((col, cell)) = row.first_non_empty() {
            parts.push(s!(cell));
            fallback_col = Some(col);
        }
    }

    if let Some(vol_col) = spec.volume {
        let vol = row.get(vol_col).trim();
        if is_usable(vol) && fallback_col != Some(vol_col) {
            parts.push(format!("{} ml", vol));
        }
    }
    if let Some(mat_col) = spec.material {
        let mat = row.get(mat_col).trim();
        if is_usable(mat) && fallback_col != Some(mat_col) {
            parts.push(s!(mat));
        }
    }

    let label = parts.join(SEP);
    trim_separator_artifacts(&label)
}

fn is_usable(cell: &str) -> bool {
    !cell.is_empty() && !cell.eq_ignore_ascii_case("nan")
}

/// Strip leading/trailing separator characters left by odd source data
/// (e.g. a brand cell that itself ends in a dash).
fn trim_separator_artifacts(label: &str) -> String {
    s!(label.trim_matches(|c: char| c == '—' || c == '-' || c.is_whitespace()))
}

// src/core/value.rs
//
// Numeric interpretation of raw catalogue cells. The loader hands every cell
// over as text; this is the single place that turns text into numbers.

/// Placeholder markers treated as "no value" (compared case-insensitively).
const NA_MARKERS: &[&str] = &["", "na", "n/a", "none"];

/// Parse a raw cell into a numeric value.
///
/// - NA markers and empty cells → `None`.
/// - A trailing `+` ("at least N") is dropped: `"50+"` → `50.0`.
/// - A trailing `%` is dropped; percentages stay bare magnitudes: `"12%"` → `12.0`.
/// - Anything that still fails a decimal parse → `None`. Never panics.
/// - Non-finite parses (`"nan"`, `"inf"`) count as absent too; a literal
///   `nan` cell is a placeholder, not a measurement.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let mut t = raw.trim();

    if NA_MARKERS.iter().any(|m| t.eq_ignore_ascii_case(m)) {
        return None;
    }

    if let Some(stripped) = t.strip_suffix('+') {
        t = stripped.trim_end();
    }
    if let Some(stripped) = t.strip_suffix('%') {
        t = stripped.trim_end();
    }

    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

// src/catalogue.rs
//
// The in-memory shape of a loaded catalogue table.
//
// - Table: ordered columns + text rows. Immutable once built; the store hands
//   out Arc<Table> and nothing downstream mutates it.
// - RowView: borrow of one row with a get-or-default-empty accessor, so
//   consumers never index cells positionally or special-case short rows.
//
// A row's stable identifier is its index in `rows` at load time. Selection
// state is kept in those indices; labels are display-only.

use std::sync::Arc;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// An empty table (no columns, no rows). Used when a source fails to load.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn empty_shared() -> Arc<Self> {
        Arc::new(Self::empty())
    }

    /// Normalize freshly read data into a Table:
    /// - headers trimmed to plain text,
    /// - rows with only empty cells dropped (trailing spreadsheet blanks),
    /// - remaining rows padded with "" to the column count; surplus cells
    ///   beyond the headers have no addressable column and are cut.
    pub fn from_raw(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let columns: Vec<String> = headers.iter().map(|h| s!(h.trim())).collect();
        let ncols = columns.len();

        let rows = rows
            .into_iter()
            .filter(|r| r.iter().any(|c| !c.trim().is_empty()))
            .map(|mut r| {
                r.truncate(ncols);
                while r.len() < ncols {
                    r.push(s!());
                }
                r
            })
            .collect();

        Self { columns, rows }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact header text.
    pub fn col_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Borrow one row; None past the end.
    pub fn row(&self, ix: usize) -> Option<RowView<'_>> {
        self.rows.get(ix).map(|cells| RowView {
            columns: &self.columns,
            cells,
        })
    }

    /// Iterate all rows as views, in load order.
    pub fn row_views(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().map(|cells| RowView {
            columns: &self.columns,
            cells,
        })
    }
}

/// Borrowed view of one table row, addressed by column name.
#[derive(Clone, Copy, Debug)]
pub struct RowView<'a> {
    columns: &'a [String],
    cells: &'a [String],
}

impl<'a> RowView<'a> {
    pub fn new(columns: &'a [String], cells: &'a [String]) -> Self {
        Self { columns, cells }
    }

    /// Cell text for `column`, or "" when the column is missing.
    /// Missing referenced columns behave exactly like empty cells.
    pub fn get(&self, column: &str) -> &'a str {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.cells.get(i))
            .map(|c| c.as_str())
            .unwrap_or("")
    }

    /// First non-empty cell in column order, with the column it came from.
    pub fn first_non_empty(&self) -> Option<(&'a str, &'a str)> {
        self.cells.iter().enumerate().find_map(|(i, c)| {
            let cell = c.trim();
            if cell.is_empty() {
                return None;
            }
            let column = self.columns.get(i).map(|n| n.as_str()).unwrap_or("");
            Some((column, cell))
        })
    }

    pub fn cells(&self) -> &'a [String] {
        self.cells
    }
}

/// Project a table onto `desired` columns.
///
/// Keeps only the desired columns that exist, in the order of `desired` (not
/// source order). A zero-column result still carries the full row count.
pub fn project(table: &Table, desired: &[&str]) -> Table {
    let picks: Vec<usize> = desired
        .iter()
        .filter_map(|name| table.col_index(name))
        .collect();

    let columns = picks.iter().map(|&i| table.columns[i].clone()).collect();
    let rows = table
        .rows
        .iter()
        .map(|r| {
            picks
                .iter()
                .map(|&i| r.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    Table { columns, rows }
}

//! The tabular data model shared by the comparison engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::render_rows;

/// An immutable table of text cells.
///
/// Rows may be ragged; absent trailing cells are treated as empty when
/// the table is rendered. Cells are opaque text: no coercion or numeric
/// interpretation is applied anywhere.
///
/// The serde representation is the bare row structure (an array of
/// arrays of strings), so tables can be loaded directly from fixture
/// files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from fully-owned rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Create a table from anything yielding rows of string-like cells.
    ///
    /// ```
    /// use tabeq_table::Table;
    ///
    /// let table = Table::from_rows([["id1", "Label one"], ["id2", "Label two"]]);
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_rows<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self { rows }
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// A single row by index.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns, i.e. the length of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_rows(&self.rows))
    }
}

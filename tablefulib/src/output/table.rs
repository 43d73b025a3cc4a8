//! Display-ready snapshot of a table.
//!
//! `DisplayTable` resolves every formatting rule once and keeps only strings,
//! so exporters can walk headers and rows without touching the registry or
//! handling errors per cell.

use crate::data::table::Table;
use crate::Result;

/// A single rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Position of the row in its table
    pub index: usize,
    /// Display strings, one per effective column
    pub values: Vec<String>,
}

/// Headers and rendered rows of a table, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTable {
    /// Effective column names
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<DisplayRow>,
}

impl DisplayTable {
    /// Render every cell of the effective columns.
    ///
    /// Fails on the first cell that can't be rendered: a display column
    /// missing from the schema, an unknown formatter, or a formatter error.
    pub fn from_table(table: &Table) -> Result<Self> {
        let headers = table.columns().to_vec();
        let rows = table
            .rows()
            .map(|row| {
                let values = row
                    .data()?
                    .iter()
                    .map(|datum| datum.display())
                    .collect::<Result<Vec<_>>>()?;
                Ok(DisplayRow {
                    index: row.index(),
                    values,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DisplayTable { headers, rows })
    }

    /// Rows as `(column, display)` pairs
    pub fn records(&self) -> impl Iterator<Item = Vec<(&str, &str)>> + '_ {
        self.rows.iter().map(move |row| {
            self.headers
                .iter()
                .map(String::as_str)
                .zip(row.values.iter().map(String::as_str))
                .collect()
        })
    }
}

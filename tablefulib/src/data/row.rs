//! Row views.
//!
//! Rows act like dictionaries but look more like lists: `row.datum("Author")`
//! resolves the name against the table's schema, while iteration-style
//! accessors (`keys`, `values`, `data`) follow the display columns.

use std::fmt;

use crate::data::datum::Datum;
use crate::data::table::Table;
use crate::data::value::Value;
use crate::Result;

/// A read-only view of one row.
#[derive(Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> Row<'a> {
    pub(crate) fn new(table: &'a Table, index: usize) -> Self {
        Self { table, index }
    }

    /// Position of this row in the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// The table this row belongs to
    pub fn table(&self) -> &'a Table {
        self.table
    }

    /// Raw cells in schema order
    pub fn cells(&self) -> &'a [Value] {
        self.table.raw_row(self.index)
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells().len()
    }

    /// True for a table with no columns
    pub fn is_empty(&self) -> bool {
        self.cells().is_empty()
    }

    /// The datum for a column, or `None` if the column isn't in the schema.
    pub fn get(&self, column: &str) -> Option<Datum<'a>> {
        let index = self.table.column_index(column).ok()?;
        let name = &self.table.default_columns()[index];
        Some(Datum::new(
            self.table,
            self.index,
            name,
            &self.cells()[index],
        ))
    }

    /// The datum for a column, failing with `UnknownColumn` if it isn't in the schema.
    pub fn datum(&self, column: &str) -> Result<Datum<'a>> {
        let index = self.table.column_index(column)?;
        let name = &self.table.default_columns()[index];
        Ok(Datum::new(
            self.table,
            self.index,
            name,
            &self.cells()[index],
        ))
    }

    /// The effective column names
    pub fn keys(&self) -> &'a [String] {
        self.table.columns()
    }

    /// Data for each effective column, in display order
    pub fn data(&self) -> Result<Vec<Datum<'a>>> {
        self.keys().iter().map(|c| self.datum(c)).collect()
    }

    /// Raw values for each effective column, in display order
    pub fn values(&self) -> Result<Vec<&'a Value>> {
        Ok(self.data()?.into_iter().map(|d| d.value()).collect())
    }

    /// `(column, raw value)` pairs in display order
    pub fn items(&self) -> Result<Vec<(&'a str, &'a Value)>> {
        Ok(self
            .data()?
            .into_iter()
            .map(|d| (d.column_name(), d.value()))
            .collect())
    }

    /// Display strings for each effective column, joined with `", "`
    pub fn display(&self) -> Result<String> {
        let shown = self
            .data()?
            .iter()
            .map(Datum::display)
            .collect::<Result<Vec<_>>>()?;
        Ok(shown.join(", "))
    }
}

impl PartialEq for Row<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cells() == other.cells()
    }
}

impl fmt::Debug for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("index", &self.index)
            .field("cells", &self.cells())
            .finish()
    }
}

/// A mutable view of one row.
pub struct RowMut<'a> {
    table: &'a mut Table,
    index: usize,
}

impl<'a> RowMut<'a> {
    pub(crate) fn new(table: &'a mut Table, index: usize) -> Self {
        Self { table, index }
    }

    /// Position of this row in the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Raw cells in schema order
    pub fn cells(&self) -> &[Value] {
        self.table.raw_row(self.index)
    }

    /// Read-only view of the same row
    pub fn as_row(&self) -> Row<'_> {
        Row::new(self.table, self.index)
    }

    /// Set the raw value of one cell.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> Result<()> {
        let index = self.table.column_index(column)?;
        self.table.raw_row_mut(self.index)[index] = value.into();
        Ok(())
    }

    /// Set several cells at once.
    ///
    /// Every column is resolved before any cell changes, so an unknown column
    /// leaves the row untouched.
    pub fn update<I, K, V>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let resolved = values
            .into_iter()
            .map(|(column, value)| Ok((self.table.column_index(column.as_ref())?, value.into())))
            .collect::<Result<Vec<(usize, Value)>>>()?;

        let row = self.table.raw_row_mut(self.index);
        for (index, value) in resolved {
            row[index] = value;
        }
        Ok(())
    }
}

impl fmt::Debug for RowMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowMut")
            .field("index", &self.index)
            .field("cells", &self.cells())
            .finish()
    }
}

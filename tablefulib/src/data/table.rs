//! The table: owner of the raw row matrix and its display configuration.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::data::datum::Header;
use crate::data::row::{Row, RowMut};
use crate::data::value::Value;
use crate::error::TableFuError;
use crate::format::Formatter;
use crate::options::{FormatRule, SortState, TableOptions};
use crate::source::reader::{check_width, read_csv, read_csv_path, split_header_and_rows};
use crate::Result;

/// Shared registry used by tables that don't bring their own.
fn default_formatter() -> Arc<Formatter> {
    static DEFAULT: OnceLock<Arc<Formatter>> = OnceLock::new();
    DEFAULT.get_or_init(|| Arc::new(Formatter::new())).clone()
}

/// A table, to be manipulated like a spreadsheet.
///
/// The table owns its raw cells. [`Row`], [`Datum`](crate::Datum) and
/// [`Header`] are short-lived views that borrow from it and compute display
/// strings on demand, so edits made through [`RowMut`] are visible to every
/// later view.
///
/// Two column lists are kept apart:
/// - `default_columns`, the schema read from the header row. Keyed lookups
///   always resolve against it, and it never changes.
/// - the display columns set through [`set_columns`](Self::set_columns) (or
///   the `columns` option), which decide header order and what gets exported.
///
/// ```rust
/// use tablefulib::{Table, TableOptions};
///
/// let mut table = Table::new(
///     vec![
///         vec!["Author", "Best Book", "Number of Pages", "Style"],
///         vec!["Samuel Beckett", "Malone Muert", "120", "Modernism"],
///         vec!["James Joyce", "Ulysses", "644", "Modernism"],
///     ],
///     TableOptions::new(),
/// )
/// .unwrap();
///
/// assert_eq!(table.len(), 2);
/// table.set_columns(["Style", "Author"]);
/// assert_eq!(table.columns(), ["Style", "Author"]);
/// assert_eq!(table.row(1).unwrap().datum("Author").unwrap(), "James Joyce");
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Vec<Value>>,
    default_columns: Vec<String>,
    options: TableOptions,
    formatter: Arc<Formatter>,
    sort_state: Option<SortState>,
    faceted_on: Option<Value>,
    deleted_rows: Vec<Vec<Value>>,
}

impl Table {
    /// Build a table from a two-dimensional matrix whose first row is the header.
    ///
    /// If `options.sorted_by` is set, the rows are sorted before returning.
    pub fn new<M, R, V>(matrix: M, options: TableOptions) -> Result<Self>
    where
        M: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let (header, rows) = split_header_and_rows(matrix)?;
        Self::from_parts(header, rows, options)
    }

    /// Build a table with default options from any source of rows, such as
    /// records already pulled from a reader.
    pub fn from_rows<M, R, V>(rows: M) -> Result<Self>
    where
        M: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::new(rows, TableOptions::default())
    }

    /// Build a table from delimited text, using `options.dialect`.
    pub fn from_reader<R: Read>(reader: R, options: TableOptions) -> Result<Self> {
        let matrix = read_csv(reader, &options.dialect)?;
        Self::new(matrix, options)
    }

    /// Build a table from a delimited-text file, using `options.dialect`.
    pub fn from_path(path: impl AsRef<Path>, options: TableOptions) -> Result<Self> {
        let matrix = read_csv_path(path, &options.dialect)?;
        Self::new(matrix, options)
    }

    /// Build a table from an already split header and body.
    pub(crate) fn from_parts(
        default_columns: Vec<String>,
        rows: Vec<Vec<Value>>,
        options: TableOptions,
    ) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            check_width(i, row, default_columns.len())?;
        }

        let formatter = options.formatter.clone().unwrap_or_else(default_formatter);
        let initial_sort = options.sorted_by.clone();
        let mut table = Table {
            rows,
            default_columns,
            options,
            formatter,
            sort_state: None,
            faceted_on: None,
            deleted_rows: Vec::new(),
        };

        tracing::debug!(
            rows = table.rows.len(),
            columns = table.default_columns.len(),
            "built table"
        );

        if let Some(sort) = initial_sort {
            table.sort(Some(sort.column.as_str()), sort.reverse)?;
        }
        Ok(table)
    }

    /// Number of rows, not counting the header
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has a header but no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Same as [`len`](Self::len)
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Effective columns: the display columns if set, else the schema.
    pub fn columns(&self) -> &[String] {
        if self.options.columns.is_empty() {
            &self.default_columns
        } else {
            &self.options.columns
        }
    }

    /// Replace the display columns. An empty list reverts to the schema.
    ///
    /// Names are not checked here; a name missing from the schema fails later
    /// on keyed access (rendering, `Row::data`).
    pub fn set_columns<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.columns = columns.into_iter().map(Into::into).collect();
    }

    /// Column names from the header row, in source order
    pub fn default_columns(&self) -> &[String] {
        &self.default_columns
    }

    /// One header per effective column, in display order
    pub fn headers(&self) -> Vec<Header<'_>> {
        self.columns()
            .iter()
            .enumerate()
            .map(|(i, name)| Header::new(self, name, i))
            .collect()
    }

    /// Position of a column in the schema.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.default_columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| TableFuError::UnknownColumn(column.to_string()))
    }

    /// View of one row
    pub fn row(&self, index: usize) -> Result<Row<'_>> {
        self.check_index(index)?;
        Ok(Row::new(self, index))
    }

    /// Mutable view of one row
    pub fn row_mut(&mut self, index: usize) -> Result<RowMut<'_>> {
        self.check_index(index)?;
        Ok(RowMut::new(self, index))
    }

    /// Iterate over row views in table order
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        (0..self.rows.len()).map(move |i| Row::new(self, i))
    }

    /// The raw cell matrix, header excluded
    pub fn raw_rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Append rows. Every row must have one cell per schema column; nothing
    /// is appended if any row is the wrong width.
    pub fn add_rows<I, R, V>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let start = self.rows.len();
        let new_rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let row: Vec<Value> = row.into_iter().map(Into::into).collect();
                check_width(start + i, &row, self.default_columns.len())?;
                Ok(row)
            })
            .collect::<Result<Vec<_>>>()?;
        self.rows.extend(new_rows);
        Ok(())
    }

    /// Remove a row, keeping its cells in [`deleted_rows`](Self::deleted_rows).
    pub fn delete_row(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let removed = self.rows.remove(index);
        self.deleted_rows.push(removed);
        Ok(())
    }

    /// Rows removed with [`delete_row`](Self::delete_row), oldest first
    pub fn deleted_rows(&self) -> &[Vec<Value>] {
        &self.deleted_rows
    }

    /// Formatting rules by column
    pub fn formatting(&self) -> &HashMap<String, FormatRule> {
        &self.options.formatting
    }

    /// Set or replace the formatting rule for a column
    pub fn set_formatting(&mut self, column: impl Into<String>, rule: FormatRule) {
        self.options.formatting.insert(column.into(), rule);
    }

    /// Styles by column
    pub fn style(&self) -> &HashMap<String, String> {
        &self.options.style
    }

    /// Style for one column, if any
    pub fn style_for(&self, column: &str) -> Option<&str> {
        self.options.style.get(column).map(String::as_str)
    }

    /// Set or replace the style for a column
    pub fn set_style(&mut self, column: impl Into<String>, style: impl Into<String>) {
        self.options.style.insert(column.into(), style.into());
    }

    /// The ordering last applied by [`sort`](Self::sort)
    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort_state.as_ref()
    }

    /// For tables produced by faceting, the shared value of the facet column
    pub fn faceted_on(&self) -> Option<&Value> {
        self.faceted_on.as_ref()
    }

    /// The options this table was built with, kept current with later changes
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Registry consulted for named formatters
    pub fn formatter(&self) -> &Arc<Formatter> {
        &self.formatter
    }

    pub(crate) fn raw_row(&self, index: usize) -> &[Value] {
        &self.rows[index]
    }

    pub(crate) fn raw_row_mut(&mut self, index: usize) -> &mut Vec<Value> {
        &mut self.rows[index]
    }

    pub(crate) fn raw_rows_mut(&mut self) -> &mut Vec<Vec<Value>> {
        &mut self.rows
    }

    pub(crate) fn set_sort_state(&mut self, sort: SortState) {
        self.options.sorted_by = Some(sort.clone());
        self.sort_state = Some(sort);
    }

    pub(crate) fn set_faceted_on(&mut self, value: Value) {
        self.faceted_on = Some(value);
    }

    /// A new table over `rows` with this table's schema, configuration,
    /// registry and current ordering. The rows are taken as given.
    pub(crate) fn derive(&self, rows: Vec<Vec<Value>>) -> Table {
        let mut options = self.options.clone();
        options.sorted_by = self.sort_state.clone();
        options.formatter = Some(self.formatter.clone());
        Table {
            rows,
            default_columns: self.default_columns.clone(),
            options,
            formatter: self.formatter.clone(),
            sort_state: self.sort_state.clone(),
            faceted_on: None,
            deleted_rows: Vec::new(),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(TableFuError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }
}

//! Column transforms, aggregates, mapping and transposition.

use std::collections::BTreeSet;
use std::fmt;

use crate::data::row::Row;
use crate::data::table::Table;
use crate::data::value::Value;
use crate::error::TableFuError;
use crate::options::TableOptions;
use crate::Result;

/// A function applied to every raw value of a column by
/// [`Table::transform`].
///
/// Only [`Transform::func`] can be applied. A bare name is accepted so that
/// values coming from configuration can be passed straight through, but
/// applying it fails with [`TableFuError::NotCallable`].
pub enum Transform {
    /// A name with nothing to call
    Named(String),
    /// Called once per cell with the current raw value
    Func(Box<dyn Fn(&Value) -> Value>),
}

impl Transform {
    /// Wrap a closure or function item
    pub fn func<F>(func: F) -> Self
    where
        F: Fn(&Value) -> Value + 'static,
    {
        Transform::Func(Box::new(func))
    }
}

impl From<&str> for Transform {
    fn from(name: &str) -> Self {
        Transform::Named(name.to_string())
    }
}

impl From<String> for Transform {
    fn from(name: String) -> Self {
        Transform::Named(name)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Transform::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl Table {
    /// Replace every raw value in `column` with the result of `transform`.
    ///
    /// ```rust
    /// use tablefulib::query::Transform;
    /// use tablefulib::{Table, TableOptions, Value};
    ///
    /// let mut table = Table::new(vec![vec!["Pages"], vec!["120"]], TableOptions::new()).unwrap();
    /// table
    ///     .transform("Pages", Transform::func(|v| v.as_i64().map(Value::Int).unwrap_or_default()))
    ///     .unwrap();
    /// assert_eq!(table.values("Pages").unwrap(), [&Value::Int(120)]);
    /// ```
    pub fn transform(&mut self, column: &str, transform: impl Into<Transform>) -> Result<()> {
        let index = self.column_index(column)?;
        let func = match transform.into() {
            Transform::Func(func) => func,
            Transform::Named(name) => return Err(TableFuError::NotCallable(name)),
        };

        for row in self.raw_rows_mut() {
            row[index] = func(&row[index]);
        }
        tracing::debug!(column, "transformed column");
        Ok(())
    }

    /// Raw values of one column, in row order
    pub fn values(&self, column: &str) -> Result<Vec<&Value>> {
        let index = self.column_index(column)?;
        Ok(self.raw_rows().iter().map(|row| &row[index]).collect())
    }

    /// Distinct raw values of one column, in ascending order
    pub fn unique_values(&self, column: &str) -> Result<BTreeSet<&Value>> {
        Ok(self.values(column)?.into_iter().collect())
    }

    /// Sum of a column, with every value read as a number.
    ///
    /// Text is trimmed and parsed. If any value is not a number (empty cells
    /// and booleans included) this fails with
    /// [`TableFuError::NonNumericColumn`] naming the column.
    pub fn total(&self, column: &str) -> Result<f64> {
        self.values(column)?
            .into_iter()
            .map(|value| {
                value
                    .as_f64()
                    .ok_or_else(|| TableFuError::NonNumericColumn(column.to_string()))
            })
            .sum()
    }

    /// Apply `func` to every row, in order
    pub fn map_rows<F, T>(&self, func: F) -> Vec<T>
    where
        F: FnMut(Row<'_>) -> T,
    {
        self.rows().map(func).collect()
    }

    /// Apply `func` to every raw value of one column, in row order
    pub fn map_column<F, T>(&self, column: &str, func: F) -> Result<Vec<T>>
    where
        F: FnMut(&Value) -> T,
    {
        Ok(self.values(column)?.into_iter().map(func).collect())
    }

    /// Apply `func` to each listed column, giving one result vector per column
    /// in the order the columns were given.
    ///
    /// All columns are checked before `func` is called.
    pub fn map_columns<I, S, F, T>(&self, columns: I, mut func: F) -> Result<Vec<Vec<T>>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&Value) -> T,
    {
        let indexes = columns
            .into_iter()
            .map(|column| self.column_index(column.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(indexes
            .into_iter()
            .map(|index| {
                self.raw_rows()
                    .iter()
                    .map(|row| func(&row[index]))
                    .collect()
            })
            .collect())
    }

    /// Flip rows and columns.
    ///
    /// The header row takes part in the flip, so the new header is the old
    /// first column (its name followed by its values) and every other column
    /// becomes a row led by its name. Per-column formatting and style, the
    /// display columns and the sort no longer describe the new schema and are
    /// dropped; the dialect and registry are kept.
    ///
    /// Transposing twice gives back the original header and rows.
    pub fn transpose(&self) -> Result<Table> {
        let width = self.default_columns().len();
        let mut flipped: Vec<Vec<Value>> = self
            .default_columns()
            .iter()
            .map(|name| {
                let mut line = Vec::with_capacity(self.len() + 1);
                line.push(Value::from(name.as_str()));
                line
            })
            .collect();

        for row in self.raw_rows() {
            for (line, cell) in flipped.iter_mut().zip(row) {
                line.push(cell.clone());
            }
        }

        let options = TableOptions::new()
            .dialect(self.options().dialect)
            .formatter(self.formatter().clone());
        tracing::debug!(
            rows = self.len(),
            columns = width,
            "transposed table"
        );
        Table::new(flipped, options)
    }
}

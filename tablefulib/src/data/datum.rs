//! Cell and header views.

use std::fmt;

use crate::data::table::Table;
use crate::data::value::Value;
use crate::Result;

/// One cell: a raw value plus the row and column it lives in.
///
/// The display string is never stored. [`display`](Self::display) looks up
/// the column's formatting rule each time it is called, so it always reflects
/// the current raw values of the row.
#[derive(Clone, Copy)]
pub struct Datum<'a> {
    table: &'a Table,
    row: usize,
    column: &'a str,
    value: &'a Value,
}

impl<'a> Datum<'a> {
    pub(crate) fn new(table: &'a Table, row: usize, column: &'a str, value: &'a Value) -> Self {
        Self {
            table,
            row,
            column,
            value,
        }
    }

    /// The raw value
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Column this cell belongs to
    pub fn column_name(&self) -> &'a str {
        self.column
    }

    /// Index of the row this cell belongs to
    pub fn row_index(&self) -> usize {
        self.row
    }

    /// Style configured for this cell's column
    pub fn style(&self) -> Option<&'a str> {
        self.table.style_for(self.column)
    }

    /// The display string.
    ///
    /// Without a formatting rule for the column this is the raw value. With
    /// one, each argument column is resolved to the raw value of that column
    /// in the same row (never its display string, so rules can't chain) and
    /// the formatter is invoked with `(value, args, options)`.
    pub fn display(&self) -> Result<String> {
        let Some(rule) = self.table.formatting().get(self.column) else {
            return Ok(self.value.to_string());
        };

        let row = self.table.row(self.row)?;
        let args = rule
            .args
            .iter()
            .map(|arg| row.datum(arg).map(|d| d.value().clone()))
            .collect::<Result<Vec<_>>>()?;

        self.table
            .formatter()
            .invoke(self.value, &rule.filter, &args, &rule.options)
    }
}

impl PartialEq for Datum<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<Value> for Datum<'_> {
    fn eq(&self, other: &Value) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Datum<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.value == other
    }
}

impl fmt::Debug for Datum<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {:?}>", self.column, self.value)
    }
}

/// A column header in display order.
#[derive(Clone, Copy)]
pub struct Header<'a> {
    table: &'a Table,
    name: &'a str,
    position: usize,
}

impl<'a> Header<'a> {
    pub(crate) fn new(table: &'a Table, name: &'a str, position: usize) -> Self {
        Self {
            table,
            name,
            position,
        }
    }

    /// Column name
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Position among the effective columns
    pub fn position(&self) -> usize {
        self.position
    }

    /// Style configured for this column
    pub fn style(&self) -> Option<&'a str> {
        self.table.style_for(self.name)
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}

impl fmt::Debug for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Header: {}>", self.name)
    }
}

impl PartialEq for Header<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl PartialEq<str> for Header<'_> {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Header<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

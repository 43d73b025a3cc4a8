//! Raw matrix input: the header split and the delimited-text reader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::data::value::Value;
use crate::error::TableFuError;
use crate::options::Dialect;
use crate::Result;

/// Split a raw matrix into its header row and data rows.
///
/// The first row becomes the column names; every following row must have one
/// cell per column. Fails with [`TableFuError::EmptyTable`] when the matrix
/// has no rows at all.
pub fn split_header_and_rows<M, R, V>(matrix: M) -> Result<(Vec<String>, Vec<Vec<Value>>)>
where
    M: IntoIterator<Item = R>,
    R: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut rows = matrix.into_iter();
    let header: Vec<String> = rows
        .next()
        .ok_or(TableFuError::EmptyTable)?
        .into_iter()
        .map(|cell| cell.into().to_string())
        .collect();

    let body = rows
        .enumerate()
        .map(|(i, row)| {
            let row: Vec<Value> = row.into_iter().map(Into::into).collect();
            check_width(i, &row, header.len())?;
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((header, body))
}

/// Fail unless `row` has exactly `expected` cells.
pub(crate) fn check_width(index: usize, row: &[Value], expected: usize) -> Result<()> {
    if row.len() != expected {
        return Err(TableFuError::RowLength {
            row: index,
            expected,
            found: row.len(),
        });
    }
    Ok(())
}

/// Read every record of a delimited-text source as text cells.
///
/// The header is not treated specially here; it comes back as the first row.
pub fn read_csv<R: Read>(reader: R, dialect: &Dialect) -> Result<Vec<Vec<Value>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .delimiter(dialect.delimiter)
        .quote(dialect.quote)
        .trim(if dialect.trim { Trim::All } else { Trim::None })
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Value::from).collect());
    }

    tracing::debug!(rows = rows.len(), "read delimited source");
    Ok(rows)
}

/// Read a delimited-text file.
pub fn read_csv_path(path: impl AsRef<Path>, dialect: &Dialect) -> Result<Vec<Vec<Value>>> {
    let file = File::open(path.as_ref())?;
    read_csv(file, dialect)
}

//! Error types for tablefulib

use thiserror::Error;

/// Errors that can occur while building, querying or exporting a table
#[derive(Error, Debug)]
pub enum TableFuError {
    /// Column name is not part of the table's schema
    #[error("{0} isn't a column in this table")]
    UnknownColumn(String),

    /// The source yielded no rows, so there is no header to extract
    #[error("cannot build a table from an empty source")]
    EmptyTable,

    /// Row index past the end of the table
    #[error("row {index} is out of range (table has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A column could not be totaled
    #[error("column {0} contains non-numeric values")]
    NonNumericColumn(String),

    /// A transform was given something that cannot be called
    #[error("{0} isn't callable")]
    NotCallable(String),

    /// A formatting rule names a function that is not registered
    #[error("no formatter registered under '{0}'")]
    UnknownFormatter(String),

    /// The requested export format is not available in this build
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// `sort` was called without a column and the table was never sorted
    #[error("no sort column given and table has no previous sort")]
    NoSortColumn,

    /// A raw row does not have one cell per column
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A formatting function failed
    #[error("formatter '{name}' failed: {message}")]
    Format { name: String, message: String },

    /// Reading or writing delimited text failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

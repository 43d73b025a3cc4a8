//! # tablefulib
//!
//! A spreadsheet-like view over row/column data, with per-cell formatting
//! that can depend on other cells in the same row.
//!
//! ## Overview
//!
//! A [`Table`] owns a matrix of raw [`Value`]s read from a delimited source or
//! built in memory. The first row of the source is the header. Everything
//! else is a view or a derived table:
//!
//! - **Views**: [`Row`], [`Datum`] and [`Header`] borrow from the table and
//!   compute display strings on demand
//! - **Formatting**: a per-column [`FormatRule`] names a function in a
//!   [`Formatter`] registry plus the sibling columns passed to it
//! - **Queries**: `sort` and `transform` work in place; `filter`, `facet_by`
//!   and `transpose` return new tables
//! - **Export**: HTML, CSV, dictionaries and JSON, all using display strings
//!
//! ## Features
//!
//! - **`json`** (default): enables [`Table::to_json`] through `serde_json`.
//!   Without it `to_json` fails with [`TableFuError::UnsupportedFormat`].
//!
//! ## Origins
//!
//! The table model and the default formatters follow
//! [python-tablefu](https://github.com/eyeseast/python-tablefu) by Chris Amico.
//!
//! ## Example
//!
//! ```rust
//! use tablefulib::{FormatRule, SortState, Table, TableOptions};
//!
//! let csv = "\
//! Author,Best Book,Number of Pages,Style
//! Samuel Beckett,Malone Muert,120,Modernism
//! James Joyce,Ulysses,644,Modernism
//! Nicholson Baker,Mezannine,150,Minimalism
//! Vladimir Sorokin,The Queue,263,Satire
//! ";
//!
//! let options = TableOptions::new()
//!     .with_columns(["Author", "Number of Pages"])
//!     .format("Number of Pages", FormatRule::new("intcomma"))
//!     .sorted_by(SortState::by("Author"));
//! let table = Table::from_reader(csv.as_bytes(), options).unwrap();
//!
//! assert_eq!(table.row(0).unwrap().datum("Author").unwrap(), "James Joyce");
//! assert_eq!(table.total("Number of Pages").unwrap(), 1177.0);
//!
//! let modernists = table.filter_by([("Style", "Modernism")]).unwrap();
//! assert_eq!(modernists.len(), 2);
//! assert_eq!(
//!     modernists.to_csv().unwrap(),
//!     "Author,Number of Pages\nJames Joyce,644\nSamuel Beckett,120\n"
//! );
//! ```

pub mod data;
pub mod error;
pub mod format;
pub mod options;
pub mod output;
pub mod query;
pub mod source;

pub use data::{Datum, Header, Row, RowMut, Table, Value};
pub use error::TableFuError;
pub use format::{FormatFn, FormatOptions, Formatter};
pub use options::{Dialect, FormatRule, SortState, TableOptions};
pub use output::{DisplayRow, DisplayTable};
pub use query::Transform;
pub use source::{read_csv, read_csv_path, split_header_and_rows};

/// Result type for tablefulib operations
pub type Result<T> = std::result::Result<T, TableFuError>;

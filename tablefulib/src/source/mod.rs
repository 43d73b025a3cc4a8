//! Source input: turn raw input into a header and rows.
//!
//! This module handles the first stage of the pipeline - getting a raw matrix
//! of cells and splitting off the header row. It provides:
//!
//! - **Header split**: `split_header_and_rows`, the explicit parsing step
//! - **Delimited text**: `read_csv` / `read_csv_path` built on the `csv` crate
//!
//! ## Example
//!
//! ```rust
//! use tablefulib::options::Dialect;
//! use tablefulib::source::{read_csv, split_header_and_rows};
//!
//! let rows = read_csv("Author,Pages\nBeckett,120\n".as_bytes(), &Dialect::default()).unwrap();
//! let (header, body) = split_header_and_rows(rows).unwrap();
//! assert_eq!(header, vec!["Author", "Pages"]);
//! assert_eq!(body.len(), 1);
//! ```

pub mod reader;

pub use reader::{read_csv, read_csv_path, split_header_and_rows};

//! The table object model: raw values, the owning table and its views.
//!
//! This module holds the core data structures. It provides:
//!
//! - **Value**: a raw cell (`Empty`, `Bool`, `Int`, `Float`, `Text`)
//! - **Table**: sole owner of the raw row matrix and display configuration
//! - **Row / RowMut**: views of one row, resolving column names to positions
//! - **Datum / Header**: views of one cell or column, rendering on demand
//!
//! Views borrow from the table and never copy cells, so raw values and their
//! display strings can't drift apart.
//!
//! ## Example
//!
//! ```rust
//! use tablefulib::data::{Table, Value};
//! use tablefulib::options::{FormatRule, TableOptions};
//!
//! let table = Table::new(
//!     vec![vec!["Name", "URL"], vec!["Site", "http://x"]],
//!     TableOptions::new().format("Name", FormatRule::new("link").arg("URL")),
//! )
//! .unwrap();
//!
//! let datum = table.row(0).unwrap().datum("Name").unwrap();
//! assert_eq!(datum.value(), &Value::from("Site"));
//! assert_eq!(datum.display().unwrap(), r#"<a href="http://x" title="Site">Site</a>"#);
//! ```

pub mod datum;
pub mod row;
pub mod table;
pub mod value;

pub use datum::{Datum, Header};
pub use row::{Row, RowMut};
pub use table::Table;
pub use value::Value;

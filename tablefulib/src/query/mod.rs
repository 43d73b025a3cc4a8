//! Query operations: reorder, select, group and reshape tables.
//!
//! Everything here is implemented as methods on [`Table`](crate::Table),
//! split by how the result relates to the source:
//!
//! - **sort**: `sort` reorders rows in place
//! - **filter**: `filter`, `filter_by` and `facet_by` build new tables that
//!   own copies of the selected rows
//! - **reshape**: `transform` rewrites a column in place; `values`,
//!   `unique_values`, `total` and the `map_*` family read columns; `transpose`
//!   builds a flipped table
//!
//! ## Example
//!
//! ```rust
//! use tablefulib::{Table, TableOptions, Value};
//!
//! let table = Table::new(
//!     vec![
//!         vec!["Author", "Pages", "Style"],
//!         vec!["Samuel Beckett", "120", "Modernism"],
//!         vec!["James Joyce", "644", "Modernism"],
//!         vec!["Vladimir Sorokin", "263", "Satire"],
//!     ],
//!     TableOptions::new(),
//! )
//! .unwrap();
//!
//! let facets = table.facet_by("Style").unwrap();
//! assert_eq!(facets[0].faceted_on(), Some(&Value::from("Modernism")));
//! assert_eq!(facets[0].total("Pages").unwrap(), 764.0);
//! ```

pub mod filter;
pub mod reshape;
pub mod sort;

pub use reshape::Transform;

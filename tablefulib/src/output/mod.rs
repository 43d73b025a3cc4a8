//! Output: render tables as HTML, CSV, dictionaries and JSON.
//!
//! This module handles the last stage of the pipeline. It provides:
//!
//! - **DisplayTable**: headers and display strings, resolved once
//! - **HTML**: `to_html` on tables plus `to_tr`, `to_th` and `to_td` on views
//! - **Export**: `to_csv` / `write_csv`, `to_dict` and `to_json`
//!
//! Every export follows the effective columns and uses display strings, so
//! formatting rules apply the same way whichever format is chosen.
//!
//! ## Example
//!
//! ```rust
//! use tablefulib::output::DisplayTable;
//! use tablefulib::{FormatRule, Table, TableOptions};
//!
//! let table = Table::new(
//!     vec![vec!["Name", "Amount"], vec!["a", "1200"]],
//!     TableOptions::new().format("Amount", FormatRule::new("intcomma")),
//! )
//! .unwrap();
//!
//! let display = DisplayTable::from_table(&table).unwrap();
//! assert_eq!(display.rows[0].values, vec!["a", "1,200"]);
//! assert_eq!(table.to_csv().unwrap(), "Name,Amount\na,\"1,200\"\n");
//! ```

pub mod export;
pub mod html;
pub mod table;

pub use table::{DisplayRow, DisplayTable};

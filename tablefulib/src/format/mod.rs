//! Formatting: turn raw cell values into display strings.
//!
//! - **Formatter**: the name-to-function registry consulted by every cell
//! - **builtins**: the default formatters (`link`, `intcomma`, `percentage`, ...)
//!
//! ## Example
//!
//! ```rust
//! use tablefulib::format::{FormatFn, FormatOptions, Formatter};
//! use tablefulib::Value;
//!
//! let formatter = Formatter::new();
//! let html = formatter
//!     .invoke(
//!         &Value::from("Site"),
//!         &FormatFn::from("link"),
//!         &[Value::from("http://x")],
//!         &FormatOptions::new(),
//!     )
//!     .unwrap();
//! assert_eq!(html, r#"<a href="http://x" title="Site">Site</a>"#);
//! ```

pub mod builtins;
pub mod registry;
mod states;

pub use registry::{FormatFn, FormatFunction, FormatOptions, Formatter};

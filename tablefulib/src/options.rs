//! Configuration for building tables.
//!
//! This module contains all configuration types that control how a table is
//! read, displayed and ordered. Everything here is resolved once, when the
//! table is constructed, and copied onto tables derived from it.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::data::value::Value;
use crate::format::{FormatFn, FormatOptions, Formatter};

/// How a single column is formatted for display.
///
/// `args` name sibling columns; their raw values in the same row are passed to
/// the formatter as positional arguments.
///
/// JSON form: `{"filter": "link", "args": ["URL"], "options": {}}`
#[derive(Debug, Clone, Deserialize)]
pub struct FormatRule {
    /// Formatter name or function
    pub filter: FormatFn,
    /// Columns whose raw values become positional arguments
    #[serde(default)]
    pub args: Vec<String>,
    /// Keyword options for the formatter
    #[serde(default)]
    pub options: FormatOptions,
}

impl FormatRule {
    /// Create a rule with no arguments or options
    pub fn new(filter: impl Into<FormatFn>) -> Self {
        Self {
            filter: filter.into(),
            args: Vec::new(),
            options: FormatOptions::new(),
        }
    }

    /// Builder: add an argument column
    pub fn arg(mut self, column: impl Into<String>) -> Self {
        self.args.push(column.into());
        self
    }

    /// Builder: set a keyword option
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// The ordering last applied to a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Column sorted on
    pub column: String,
    /// Whether the order was reversed
    pub reverse: bool,
}

impl SortState {
    /// Ascending order on a column
    pub fn by(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            reverse: false,
        }
    }

    /// Builder: descending order
    pub fn descending(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Builder: ascending order
    pub fn ascending(mut self) -> Self {
        self.reverse = false;
        self
    }
}

/// Delimited-text dialect used when reading and writing CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Dialect {
    /// Field delimiter
    #[serde(deserialize_with = "byte_from_char")]
    pub delimiter: u8,
    /// Quote character
    #[serde(deserialize_with = "byte_from_char")]
    pub quote: u8,
    /// Trim whitespace around fields when reading
    pub trim: bool,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: false,
        }
    }
}

impl Dialect {
    /// Tab-separated values
    pub fn tsv() -> Self {
        Self::default().with_delimiter(b'\t')
    }

    /// Builder: set the delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder: set the quote character
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Builder: trim fields when reading
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// Options for a table: display columns, per-column formatting and style,
/// initial sort, CSV dialect and the formatter registry to use.
///
/// Deserializable from JSON, e.g.
///
/// ```json
/// {
///   "columns": ["Name", "State"],
///   "formatting": {"State": {"filter": "ap_state"}},
///   "style": {"Name": "text-align:left;"},
///   "sorted_by": {"Name": {"reverse": true}}
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Display columns, in order (empty = every column)
    pub columns: Vec<String>,
    /// Formatting rule per column
    pub formatting: HashMap<String, FormatRule>,
    /// Inline style per column, applied to header and cells
    pub style: HashMap<String, String>,
    /// Sort applied at construction
    #[serde(deserialize_with = "deserialize_sorted_by")]
    pub sorted_by: Option<SortState>,
    /// Dialect for CSV input and output
    pub dialect: Dialect,
    /// Registry used for named formatters (default registry if unset)
    #[serde(skip)]
    pub formatter: Option<Arc<Formatter>>,
}

impl TableOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set display columns
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: format a column
    pub fn format(mut self, column: impl Into<String>, rule: FormatRule) -> Self {
        self.formatting.insert(column.into(), rule);
        self
    }

    /// Builder: style a column
    pub fn style(mut self, column: impl Into<String>, style: impl Into<String>) -> Self {
        self.style.insert(column.into(), style.into());
        self
    }

    /// Builder: sort on construction
    pub fn sorted_by(mut self, sort: SortState) -> Self {
        self.sorted_by = Some(sort);
        self
    }

    /// Builder: set the CSV dialect
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Builder: use a custom formatter registry
    pub fn formatter(mut self, formatter: Arc<Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }
}

#[derive(Deserialize)]
struct SortFlags {
    #[serde(default)]
    reverse: bool,
}

/// `{"Author": {"reverse": true}}` -> `SortState { column: "Author", reverse: true }`
fn deserialize_sorted_by<'de, D>(deserializer: D) -> Result<Option<SortState>, D::Error>
where
    D: Deserializer<'de>,
{
    let map: Option<BTreeMap<String, SortFlags>> = Option::deserialize(deserializer)?;
    Ok(map.and_then(|m| {
        m.into_iter().next().map(|(column, flags)| SortState {
            column,
            reverse: flags.reverse,
        })
    }))
}

fn byte_from_char<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let c = char::deserialize(deserializer)?;
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(serde::de::Error::custom(format!(
            "dialect characters must be ASCII, got {:?}",
            c
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = TableOptions::new();
        assert!(options.columns.is_empty());
        assert!(options.formatting.is_empty());
        assert!(options.sorted_by.is_none());
        assert_eq!(options.dialect.delimiter, b',');
    }

    #[test]
    fn test_builders() {
        let options = TableOptions::new()
            .with_columns(["Style", "Author"])
            .format("Name", FormatRule::new("link").arg("URL"))
            .style("Author", "text-align:left;")
            .sorted_by(SortState::by("Author").descending());

        assert_eq!(options.columns, vec!["Style", "Author"]);
        assert_eq!(options.formatting["Name"].args, vec!["URL"]);
        assert_eq!(options.style["Author"], "text-align:left;");
        assert_eq!(
            options.sorted_by,
            Some(SortState {
                column: "Author".to_string(),
                reverse: true
            })
        );
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "columns": ["Name"],
            "formatting": {"Name": {"filter": "link", "args": ["URL"]},
                           "Share": {"filter": "percentage", "options": {"decimal_places": 2}}},
            "style": {"Name": "font-weight:bold;"},
            "sorted_by": {"Name": {"reverse": true}},
            "dialect": {"delimiter": ";"}
        }"#;
        let options: TableOptions = serde_json::from_str(json).unwrap();

        assert_eq!(options.columns, vec!["Name"]);
        assert_eq!(options.formatting["Name"].filter.name(), Some("link"));
        assert_eq!(
            options.formatting["Share"].options["decimal_places"],
            Value::Int(2)
        );
        assert_eq!(options.sorted_by, Some(SortState::by("Name").descending()));
        assert_eq!(options.dialect.delimiter, b';');
        assert_eq!(options.dialect.quote, b'"');
        assert!(options.formatter.is_none());
    }

    #[test]
    fn test_sorted_by_defaults_to_ascending() {
        let options: TableOptions = serde_json::from_str(r#"{"sorted_by": {"Pages": {}}}"#).unwrap();
        assert_eq!(options.sorted_by, Some(SortState::by("Pages")));
    }

    #[test]
    fn test_dialect_rejects_non_ascii() {
        let result: Result<Dialect, _> = serde_json::from_str(r#"{"delimiter": "§"}"#);
        assert!(result.is_err());
        assert_eq!(Dialect::tsv().delimiter, b'\t');
    }
}

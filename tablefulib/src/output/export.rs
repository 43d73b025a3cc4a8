//! CSV, dictionary and JSON export.
//!
//! All exports use the effective columns and display strings.

use std::io::Write;

use csv::WriterBuilder;
use indexmap::IndexMap;

use crate::data::table::Table;
use crate::Result;

use super::table::DisplayTable;

impl Table {
    /// Write the table as delimited text using the table's dialect.
    ///
    /// The first record is the header. Fields are quoted only when needed.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let rendered = DisplayTable::from_table(self)?;
        let dialect = self.options().dialect;
        let mut writer = WriterBuilder::new()
            .delimiter(dialect.delimiter)
            .quote(dialect.quote)
            .from_writer(writer);

        writer.write_record(&rendered.headers)?;
        for row in &rendered.rows {
            writer.write_record(&row.values)?;
        }
        writer.flush()?;

        tracing::debug!(rows = rendered.rows.len(), "wrote csv");
        Ok(())
    }

    /// The table as delimited text.
    ///
    /// ```rust
    /// use tablefulib::{Table, TableOptions};
    ///
    /// let table = Table::new(
    ///     vec![vec!["Author", "Book"], vec!["Nicholson Baker", "Mezzanine, The"]],
    ///     TableOptions::new(),
    /// )
    /// .unwrap();
    /// assert_eq!(table.to_csv().unwrap(), "Author,Book\nNicholson Baker,\"Mezzanine, The\"\n");
    /// ```
    pub fn to_csv(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// One map per row from effective column to display string, in column order
    pub fn to_dict(&self) -> Result<Vec<IndexMap<String, String>>> {
        let display = DisplayTable::from_table(self)?;
        Ok(display
            .records()
            .map(|record| {
                record
                    .into_iter()
                    .map(|(column, value)| (column.to_string(), value.to_string()))
                    .collect()
            })
            .collect())
    }

    /// The table as a JSON array of objects, keys in column order.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_dict()?)?)
    }

    /// JSON export needs the `json` feature.
    #[cfg(not(feature = "json"))]
    pub fn to_json(&self) -> Result<String> {
        Err(crate::error::TableFuError::UnsupportedFormat(
            "json".to_string(),
        ))
    }
}

//! HTML rendering.
//!
//! Display strings are written as they are. Formatters such as `link` and
//! `image` produce markup, so nothing here is escaped.

use crate::data::datum::{Datum, Header};
use crate::data::row::Row;
use crate::data::table::Table;
use crate::Result;

fn parity(index: usize) -> &'static str {
    if index % 2 == 0 {
        "even"
    } else {
        "odd"
    }
}

impl Datum<'_> {
    /// `<td style="..." class="datum">{display}</td>`
    pub fn to_td(&self) -> Result<String> {
        Ok(format!(
            r#"<td style="{}" class="datum">{}</td>"#,
            self.style().unwrap_or_default(),
            self.display()?
        ))
    }
}

impl Header<'_> {
    /// `<th style="..." class="header">{name}</th>`
    pub fn to_th(&self) -> String {
        format!(
            r#"<th style="{}" class="header">{}</th>"#,
            self.style().unwrap_or_default(),
            self.name()
        )
    }
}

impl Row<'_> {
    /// `<tr id="row{n}" class="row {even|odd}">` wrapping one cell per display column
    pub fn to_tr(&self) -> Result<String> {
        let cells = self
            .data()?
            .iter()
            .map(Datum::to_td)
            .collect::<Result<String>>()?;
        Ok(format!(
            r#"<tr id="row{index}" class="row {parity}">{cells}</tr>"#,
            index = self.index(),
            parity = parity(self.index()),
        ))
    }
}

impl Table {
    /// Render the whole table as an HTML `<table>`.
    ///
    /// ```rust
    /// use tablefulib::{Table, TableOptions};
    ///
    /// let table = Table::new(vec![vec!["Author"], vec!["Samuel Beckett"]], TableOptions::new()).unwrap();
    /// assert_eq!(
    ///     table.to_html().unwrap(),
    ///     "<table>\n<thead>\n<tr><th style=\"\" class=\"header\">Author</th></tr>\n</thead>\n\
    ///      <tbody>\n<tr id=\"row0\" class=\"row even\"><td style=\"\" class=\"datum\">Samuel Beckett</td></tr>\n\
    ///      </tbody>\n</table>"
    /// );
    /// ```
    pub fn to_html(&self) -> Result<String> {
        let head: String = self.headers().iter().map(Header::to_th).collect();
        let body = self
            .rows()
            .map(|row| row.to_tr())
            .collect::<Result<Vec<_>>>()?
            .join("\n");
        Ok(format!(
            "<table>\n<thead>\n<tr>{head}</tr>\n</thead>\n<tbody>\n{body}\n</tbody>\n</table>"
        ))
    }
}

//! Row selection and grouping. Every operation here returns new tables that
//! own copies of the selected rows.

use std::collections::BTreeMap;

use crate::data::row::Row;
use crate::data::table::Table;
use crate::data::value::Value;
use crate::Result;

impl Table {
    /// A new table holding the rows for which `predicate` returns true.
    ///
    /// The result shares this table's configuration and registry and records
    /// its current sort, but owns its rows.
    pub fn filter<P>(&self, mut predicate: P) -> Table
    where
        P: FnMut(&Row<'_>) -> bool,
    {
        let rows = self
            .rows()
            .filter(|row| predicate(row))
            .map(|row| row.cells().to_vec())
            .collect();
        self.derive(rows)
    }

    /// A new table holding the rows whose raw values equal every given
    /// `(column, value)` pair.
    ///
    /// Every column is checked against the schema first, even when the table
    /// has no rows.
    ///
    /// ```rust
    /// use tablefulib::{Table, TableOptions};
    ///
    /// let table = Table::new(
    ///     vec![
    ///         vec!["Author", "Style"],
    ///         vec!["Samuel Beckett", "Modernism"],
    ///         vec!["Vladimir Sorokin", "Satire"],
    ///     ],
    ///     TableOptions::new(),
    /// )
    /// .unwrap();
    /// let satire = table.filter_by([("Style", "Satire")]).unwrap();
    /// assert_eq!(satire.len(), 1);
    /// ```
    pub fn filter_by<I, K, V>(&self, conditions: I) -> Result<Table>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let conditions = conditions
            .into_iter()
            .map(|(column, value)| Ok((self.column_index(column.as_ref())?, value.into())))
            .collect::<Result<Vec<(usize, Value)>>>()?;

        let filtered = self.filter(|row| {
            let cells = row.cells();
            conditions.iter().all(|(index, value)| &cells[*index] == value)
        });
        tracing::debug!(
            conditions = conditions.len(),
            matched = filtered.len(),
            "filtered table"
        );
        Ok(filtered)
    }

    /// Split the table into one table per distinct value of `column`.
    ///
    /// Rows whose value is empty are left out. Each facet keeps the rows in
    /// their current order, inherits this table's configuration and is tagged
    /// with its value through [`faceted_on`](Self::faceted_on). Facets come
    /// back in ascending order of that value.
    pub fn facet_by(&self, column: &str) -> Result<Vec<Table>> {
        let index = self.column_index(column)?;

        let mut groups: BTreeMap<&Value, Vec<Vec<Value>>> = BTreeMap::new();
        for cells in self.raw_rows() {
            let key = &cells[index];
            if key.is_empty() {
                continue;
            }
            groups.entry(key).or_default().push(cells.clone());
        }

        tracing::debug!(column, facets = groups.len(), "faceted table");
        Ok(groups
            .into_iter()
            .map(|(value, rows)| {
                let mut facet = self.derive(rows);
                facet.set_faceted_on(value.clone());
                facet
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TableFuError;
    use crate::options::{FormatRule, SortState};
    use crate::{Table, TableOptions, Value};

    fn books() -> Vec<Vec<&'static str>> {
        vec![
            vec!["Author", "Best Book", "Number of Pages", "Style"],
            vec!["Samuel Beckett", "Malone Muert", "120", "Modernism"],
            vec!["James Joyce", "Ulysses", "644", "Modernism"],
            vec!["Nicholson Baker", "Mezannine", "150", "Minimalism"],
            vec!["Vladimir Sorokin", "The Queue", "263", "Satire"],
            vec!["Ayn Rand", "Atlas Shrugged", "1088", "Science fiction"],
        ]
    }

    fn table() -> Table {
        Table::new(books(), TableOptions::new()).unwrap()
    }

    #[test]
    fn test_filter_predicate() {
        let t = table();
        let long = t.filter(|row| row.datum("Number of Pages").unwrap().value().as_f64() > Some(200.0));
        assert_eq!(long.len(), 3);
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn test_filter_result_is_independent() {
        let t = table();
        let mut copy = t.filter(|_| true);
        copy.row_mut(0).unwrap().set("Author", "Changed").unwrap();
        assert_eq!(t.row(0).unwrap().cells()[0], "Samuel Beckett");
    }

    #[test]
    fn test_filter_by_single_value() {
        let t = table();
        let modernists = t.filter_by([("Style", "Modernism")]).unwrap();
        assert_eq!(modernists.len(), 2);
        assert_eq!(modernists.row(1).unwrap().cells()[0], "James Joyce");
    }

    #[test]
    fn test_filter_by_is_conjunctive() {
        let t = table();
        let both = t
            .filter_by([("Style", "Modernism"), ("Number of Pages", "644")])
            .unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both.row(0).unwrap().cells()[0], "James Joyce");

        let none = t
            .filter_by([("Style", "Satire"), ("Number of Pages", "644")])
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_by_unknown_column() {
        let t = table();
        let err = t.filter_by([("Publisher", "Grove")]).unwrap_err();
        assert!(matches!(err, TableFuError::UnknownColumn(c) if c == "Publisher"));

        let empty = t.filter(|_| false);
        assert!(matches!(
            empty.filter_by([("Publisher", "Grove")]),
            Err(TableFuError::UnknownColumn(_))
        ));
    }

    #[test]
    fn test_filter_keeps_configuration() {
        let mut t = Table::new(
            books(),
            TableOptions::new()
                .format("Author", FormatRule::new("capfirst"))
                .style("Author", "text-align:left;"),
        )
        .unwrap();
        t.set_columns(["Author", "Style"]);
        t.sort(Some("Author"), false).unwrap();

        let filtered = t.filter_by([("Style", "Modernism")]).unwrap();
        assert_eq!(filtered.columns(), ["Author", "Style"]);
        assert_eq!(filtered.style_for("Author"), Some("text-align:left;"));
        assert_eq!(filtered.sort_state(), Some(&SortState::by("Author")));
        assert_eq!(
            filtered.row(0).unwrap().datum("Author").unwrap().display().unwrap(),
            "James joyce"
        );
    }

    #[test]
    fn test_facet_by() {
        let t = Table::new(
            vec![
                vec!["Author", "Style"],
                vec!["Samuel Beckett", "Modernism"],
                vec!["James Joyce", "Modernism"],
                vec!["Vladimir Sorokin", "Satire"],
            ],
            TableOptions::new(),
        )
        .unwrap();
        let facets = t.facet_by("Style").unwrap();
        let tags: Vec<_> = facets.iter().map(|f| f.faceted_on().cloned()).collect();
        assert_eq!(
            tags,
            vec![Some(Value::from("Modernism")), Some(Value::from("Satire"))]
        );
        assert_eq!(facets[0].len(), 2);
        assert_eq!(facets[0].row(0).unwrap().cells()[0], "Samuel Beckett");
        assert_eq!(facets[1].len(), 1);
    }

    #[test]
    fn test_facet_skips_empty_values() {
        let t = Table::new(
            vec![vec!["Name", "Group"], vec!["a", "x"], vec!["b", ""], vec!["c", "x"]],
            TableOptions::new(),
        )
        .unwrap();
        let facets = t.facet_by("Group").unwrap();
        assert_eq!(facets.len(), 1);
        assert_eq!(facets[0].len(), 2);
    }

    #[test]
    fn test_facet_inherits_formatting() {
        let t = Table::new(
            books(),
            TableOptions::new().format("Author", FormatRule::new("title")),
        )
        .unwrap();
        let facets = t.facet_by("Style").unwrap();
        assert_eq!(facets.len(), 4);
        assert!(facets.iter().all(|f| f.formatting().contains_key("Author")));
        assert!(t.faceted_on().is_none());
    }

    #[test]
    fn test_facet_unknown_column() {
        let err = table().facet_by("Genre").unwrap_err();
        assert!(matches!(err, TableFuError::UnknownColumn(c) if c == "Genre"));
    }
}

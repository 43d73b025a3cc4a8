//! In-place ordering.

use crate::data::table::Table;
use crate::error::TableFuError;
use crate::options::SortState;
use crate::Result;

impl Table {
    /// Sort rows in place on the raw values of one column.
    ///
    /// With no column, the column of the previous sort is reused; a table that
    /// was never sorted fails with [`TableFuError::NoSortColumn`]. The column
    /// is checked before anything moves, so a failed sort leaves the order
    /// untouched.
    ///
    /// The sort is stable in both directions: rows with equal keys keep their
    /// relative order even when `reverse` is set. Keys are compared as stored,
    /// so text that looks numeric still sorts lexicographically (`"644"` comes
    /// before `"80"`). Promote the column with [`transform`](Self::transform)
    /// first for numeric order.
    ///
    /// ```rust
    /// use tablefulib::{Table, TableOptions};
    ///
    /// let mut table = Table::new(
    ///     vec![vec!["Pages"], vec!["120"], vec!["644"], vec!["150"]],
    ///     TableOptions::new(),
    /// )
    /// .unwrap();
    /// table.sort(Some("Pages"), true).unwrap();
    /// assert_eq!(table.values("Pages").unwrap(), ["644", "150", "120"]);
    /// ```
    pub fn sort(&mut self, column: Option<&str>, reverse: bool) -> Result<()> {
        let column = match column {
            Some(column) => column.to_string(),
            None => self
                .sort_state()
                .map(|s| s.column.clone())
                .ok_or(TableFuError::NoSortColumn)?,
        };
        let index = self.column_index(&column)?;

        let rows = self.raw_rows_mut();
        if reverse {
            rows.sort_by(|a, b| b[index].cmp(&a[index]));
        } else {
            rows.sort_by(|a, b| a[index].cmp(&b[index]));
        }

        tracing::debug!(column = %column, reverse, "sorted table");
        self.set_sort_state(SortState { column, reverse });
        Ok(())
    }
}

//! Data tables attached to steps.
//!
//! A table is a header row followed by data rows, all of equal width. The
//! list-of-lists and list-of-maps views are projections of the same rows.

use hashbrown::HashMap;
use manyworlds_grammar::TableRow;

use crate::error::DataTableError;

/// A pipe-delimited table attached to a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    header: TableRow,
    rows: Vec<TableRow>,
}

impl DataTable {
    /// Start a table whose header is `header`.
    #[must_use]
    pub fn new(header: TableRow) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    /// Append a data row.
    ///
    /// # Errors
    ///
    /// Returns [`DataTableError::UnevenRow`] when `row` does not have as many
    /// cells as the header. The table is left unchanged.
    pub fn push_row(&mut self, row: TableRow) -> Result<(), DataTableError> {
        if row.width() != self.header.width() {
            return Err(DataTableError::UnevenRow {
                row_number: self.rows.len() + 2,
                expected: self.header.width(),
                actual: row.width(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// The header row.
    #[must_use]
    pub fn header(&self) -> &TableRow {
        &self.header
    }

    /// Data rows, excluding the header.
    #[must_use]
    pub fn data_rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.header.width()
    }

    /// Header followed by every data row.
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        std::iter::once(&self.header).chain(&self.rows)
    }

    /// Cell values of every row, header first.
    ///
    /// # Examples
    ///
    /// ```
    /// use manyworlds::DataTable;
    /// use manyworlds::grammar::TableRow;
    ///
    /// let mut table = DataTable::new(TableRow::new(["Name"], None));
    /// table.push_row(TableRow::new(["Ben"], None)).unwrap();
    /// assert_eq!(table.to_list_of_lists(), vec![vec!["Name"], vec!["Ben"]]);
    /// ```
    #[must_use]
    pub fn to_list_of_lists(&self) -> Vec<Vec<String>> {
        self.rows().map(|row| row.cells().to_vec()).collect()
    }

    /// Data rows keyed by header cell.
    #[must_use]
    pub fn to_list_of_maps(&self) -> Vec<HashMap<String, String>> {
        self.rows
            .iter()
            .map(|row| {
                self.header
                    .cells()
                    .iter()
                    .cloned()
                    .zip(row.cells().iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Widest cell of each column in characters, header included.
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.width()];
        for row in self.rows() {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

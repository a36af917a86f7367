//! Pipe-delimited data-table rows.

use regex::Regex;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static TABLE_ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<row>\|(?: [^|]* +\|)+)(?: # (?P<comment>.+))?$")
        .expect("table row pattern should compile")
});

/// One row of a data table: its cell values and an optional trailing comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<String>,
    comment: Option<String>,
}

impl TableRow {
    /// Construct a row from cell values and an optional comment.
    #[must_use]
    pub fn new<I, S>(cells: I, comment: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            comment,
        }
    }

    /// Cell values, trimmed of their padding.
    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// The comment written after the closing pipe, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Number of cells in the row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Consume the row, returning its cell values.
    #[must_use]
    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }
}

/// Parse a data-table line (indentation already removed).
///
/// Every cell must be followed by at least one space before its closing
/// pipe. Returns `None` when `content` is not a table row.
///
/// # Examples
///
/// ```
/// use manyworlds_grammar::parse_table_row;
///
/// let row = parse_table_row("| Ben    | Active | # first user").unwrap();
/// assert_eq!(row.cells(), ["Ben", "Active"]);
/// assert_eq!(row.comment(), Some("first user"));
/// assert!(parse_table_row("|Ben|Active|").is_none());
/// ```
#[must_use]
pub fn parse_table_row(content: &str) -> Option<TableRow> {
    let captures = TABLE_ROW_RE.captures(content)?;
    let row = captures.name("row")?.as_str();
    let inner = row.strip_prefix('|')?.strip_suffix('|')?;
    let comment = captures
        .name("comment")
        .map(|m| m.as_str().trim().to_string());
    Some(TableRow::new(inner.split('|').map(str::trim), comment))
}

//! Indentation handling for raw feature file lines.

/// Number of spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// A raw line split into its indentation width and trimmed content.
///
/// # Examples
///
/// ```
/// use manyworlds_grammar::IndentedLine;
///
/// let line = IndentedLine::split("        Then I see users  \n");
/// assert_eq!(line.indentation(), 8);
/// assert_eq!(line.content(), "Then I see users");
/// assert_eq!(line.level(), Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentedLine<'a> {
    indentation: usize,
    content: &'a str,
}

impl<'a> IndentedLine<'a> {
    /// Split `raw` into leading whitespace and content.
    ///
    /// Trailing whitespace, including the line terminator, is discarded.
    #[must_use]
    pub fn split(raw: &'a str) -> Self {
        let line = raw.trim_end();
        let content = line.trim_start();
        let indentation = line.chars().take_while(|c| c.is_whitespace()).count();
        Self {
            indentation,
            content,
        }
    }

    /// Width of the leading whitespace in characters.
    #[must_use]
    pub const fn indentation(&self) -> usize {
        self.indentation
    }

    /// The line without indentation or trailing whitespace.
    #[must_use]
    pub const fn content(&self) -> &'a str {
        self.content
    }

    /// Returns `true` when the line holds nothing but whitespace.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// One-based indentation level, with unindented lines at level 1.
    ///
    /// Returns `None` when the indentation is not a whole number of
    /// [`INDENT_WIDTH`] units.
    #[must_use]
    pub fn level(&self) -> Option<usize> {
        if self.indentation.checked_rem(INDENT_WIDTH)? != 0 {
            return None;
        }
        self.indentation
            .checked_div(INDENT_WIDTH)
            .map(|units| units + 1)
    }
}

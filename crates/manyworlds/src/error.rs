//! Error types for parsing, flattening and configuration.
//!
//! Parse errors are fatal: the builder stops at the first offending line and
//! no forest is returned. Every line-level variant carries the 1-based line
//! number so messages point straight at the input.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`Forest`](crate::Forest) from text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A non-blank line matches none of the recognised shapes.
    #[error("Unable to parse line {line_no}: {line}")]
    UnparseableLine {
        /// 1-based line number.
        line_no: usize,
        /// Trimmed line content.
        line: String,
    },
    /// Indentation is not a whole number of units, or a step does not sit
    /// at the level of its scenario.
    #[error("Invalid indentation at line {line_no}: {line}")]
    InvalidIndentation {
        /// 1-based line number.
        line_no: usize,
        /// Trimmed line content, or the step text for misplaced steps.
        line: String,
    },
    /// A scenario is indented deeper than any open scenario can accept.
    #[error("Excessive indentation at line {line_no}: Scenario: {scenario}")]
    ExcessiveIndentation {
        /// 1-based line number.
        line_no: usize,
        /// Name of the offending scenario.
        scenario: String,
    },
    /// A feature header follows scenarios or another feature header.
    #[error(
        "Feature line is allowed only at beginning of file but was encountered at line {line_no}: {line}"
    )]
    FeatureLineMisplaced {
        /// 1-based line number.
        line_no: usize,
        /// Trimmed line content.
        line: String,
    },
    /// `And` or `But` opens a scenario's step list.
    #[error("Conjunction without preceding step at line {line_no}: {line}")]
    ConjunctionWithoutStep {
        /// 1-based line number.
        line_no: usize,
        /// Trimmed line content.
        line: String,
    },
    /// A step appears before any scenario header.
    #[error("Step outside of any scenario at line {line_no}: {line}")]
    StepOutsideScenario {
        /// 1-based line number.
        line_no: usize,
        /// Trimmed line content.
        line: String,
    },
    /// A data-table row appears before any step.
    #[error("Data table row without step at line {line_no}: {line}")]
    DataRowWithoutStep {
        /// 1-based line number.
        line_no: usize,
        /// Trimmed line content.
        line: String,
    },
    /// A data-table row has a different column count than its header.
    #[error("Uneven data table row at line {line_no}: {source}")]
    UnevenDataRow {
        /// 1-based line number.
        line_no: usize,
        /// Width mismatch reported by the table.
        #[source]
        source: DataTableError,
    },
}

/// Errors raised by [`DataTable`](crate::DataTable) mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DataTableError {
    /// A row contains more or fewer cells than the header.
    #[error("data table row {row_number} has {actual} cells but expected {expected}")]
    UnevenRow {
        /// 1-based index of the row that failed, counting the header.
        row_number: usize,
        /// Number of cells in the header row.
        expected: usize,
        /// Number of cells present in the offending row.
        actual: usize,
    },
}

/// Errors raised while writing a flat feature file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlattenError {
    /// The destination file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Errors raised while reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The flattening mode is neither `strict` nor `relaxed`.
    #[error("unknown flattening mode '{0}', expected one of: strict, relaxed")]
    InvalidMode(String),
    /// A boolean setting holds an unrecognised value.
    #[error("invalid boolean '{value}' for {key}")]
    InvalidBool {
        /// Name of the setting.
        key: String,
        /// The rejected value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_line_message_matches_input() {
        let err = ParseError::UnparseableLine {
            line_no: 2,
            line: "Whenx I go to \"Users\" # mis-spelled conjunction".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to parse line 2: Whenx I go to \"Users\" # mis-spelled conjunction"
        );
    }

    #[test]
    fn excessive_indentation_names_scenario() {
        let err = ParseError::ExcessiveIndentation {
            line_no: 13,
            scenario: "Indented 2 instead of 1 levels".into(),
        };
        assert_eq!(
            err.to_string(),
            "Excessive indentation at line 13: Scenario: Indented 2 instead of 1 levels"
        );
    }

    #[test]
    fn uneven_row_wraps_table_error() {
        let err = ParseError::UnevenDataRow {
            line_no: 7,
            source: DataTableError::UnevenRow {
                row_number: 3,
                expected: 2,
                actual: 3,
            },
        };
        assert_eq!(
            err.to_string(),
            "Uneven data table row at line 7: data table row 3 has 3 cells but expected 2"
        );
    }

    #[test]
    fn io_error_names_path() {
        let err = FlattenError::Io {
            path: PathBuf::from("out/flat.feature"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing directory"),
        };
        assert_eq!(
            err.to_string(),
            "failed to write out/flat.feature: missing directory"
        );
    }

    #[test]
    fn invalid_mode_lists_choices() {
        let err = ConfigError::InvalidMode("loose".into());
        assert_eq!(
            err.to_string(),
            "unknown flattening mode 'loose', expected one of: strict, relaxed"
        );
    }
}

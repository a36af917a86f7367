//! Line grammar for indented manyworlds scenario trees.
//!
//! The crate knows how to read a single line of an indented feature file:
//! it splits off the indentation, classifies the remaining content as a
//! feature header, scenario header, step, data-table row or description
//! text, and resolves step keywords to the kind of step they introduce.
//! Building the scenario forest out of those lines is the job of the
//! `manyworlds` crate.

mod classify;
mod errors;
mod keyword;
mod line;
mod table;

pub use classify::{LineKind, StepLine, classify};
pub use errors::{StepKeywordParseError, UnsupportedStepType};
pub use keyword::{StepKeyword, StepKind};
pub use line::{INDENT_WIDTH, IndentedLine};
pub use table::{TableRow, parse_table_row};

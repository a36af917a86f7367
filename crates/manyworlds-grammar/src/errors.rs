//! Error types raised by the keyword conversions.

use gherkin::StepType;
use thiserror::Error;

/// Error returned when parsing a [`StepKeyword`](crate::StepKeyword) from a
/// string fails.
///
/// Contains the unrecognised keyword text for diagnostic purposes.
///
/// # Examples
/// ```
/// use manyworlds_grammar::StepKeyword;
///
/// let err = "Whenx".parse::<StepKeyword>().unwrap_err();
/// assert_eq!(err.to_string(), "invalid step keyword: Whenx");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid step keyword: {0}")]
pub struct StepKeywordParseError(pub String);

/// Error raised when a parsed Gherkin [`StepType`] has no matching
/// [`StepKind`](crate::StepKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported step type: {0:?}")]
pub struct UnsupportedStepType(pub StepType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_error_names_offending_text() {
        let err = StepKeywordParseError("Whenever".into());
        assert_eq!(err.to_string(), "invalid step keyword: Whenever");
    }

    #[test]
    fn step_type_error_uses_debug_name() {
        let err = UnsupportedStepType(StepType::Given);
        assert_eq!(err.to_string(), "unsupported step type: Given");
    }
}

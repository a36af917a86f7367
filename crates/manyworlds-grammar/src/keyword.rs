//! Step keywords and the kinds of step they introduce.
//!
//! A step line opens with one of five keywords. `Given`, `When` and `Then`
//! fix the [`StepKind`] of the step; `And` and `But` are conjunctions that
//! inherit the kind of the step immediately before them.

use gherkin::StepType;
use std::fmt;
use std::str::FromStr;

use crate::errors::{StepKeywordParseError, UnsupportedStepType};

/// Keyword opening a step line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Introduces a prerequisite.
    Given,
    /// Introduces an action.
    When,
    /// Introduces an assertion.
    Then,
    /// Continues the kind of the previous step.
    And,
    /// Continues the kind of the previous step, with contrast.
    But,
}

impl StepKeyword {
    /// Return the keyword as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use manyworlds_grammar::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::But.as_str(), "But");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// The kind fixed by a primary keyword, or `None` for `And`/`But`.
    #[must_use]
    pub const fn kind(self) -> Option<StepKind> {
        match self {
            Self::Given => Some(StepKind::Prerequisite),
            Self::When => Some(StepKind::Action),
            Self::Then => Some(StepKind::Assertion),
            Self::And | Self::But => None,
        }
    }

    /// Returns `true` for `And` and `But`.
    #[must_use]
    pub const fn is_conjunction(self) -> bool {
        matches!(self, Self::And | Self::But)
    }

    /// Resolve the keyword to the kind of step it introduces.
    ///
    /// Primary keywords ignore `previous`. Conjunctions inherit it and yield
    /// `None` when there is no previous step to inherit from.
    ///
    /// # Examples
    ///
    /// ```
    /// use manyworlds_grammar::{StepKeyword, StepKind};
    ///
    /// let previous = Some(StepKind::Action);
    /// assert_eq!(StepKeyword::And.resolve(previous), Some(StepKind::Action));
    /// assert_eq!(StepKeyword::Then.resolve(previous), Some(StepKind::Assertion));
    /// assert_eq!(StepKeyword::But.resolve(None), None);
    /// ```
    #[must_use]
    pub fn resolve(self, previous: Option<StepKind>) -> Option<StepKind> {
        self.kind().or(previous)
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("given") {
            Ok(Self::Given)
        } else if trimmed.eq_ignore_ascii_case("when") {
            Ok(Self::When)
        } else if trimmed.eq_ignore_ascii_case("then") {
            Ok(Self::Then)
        } else if trimmed.eq_ignore_ascii_case("and") {
            Ok(Self::And)
        } else if trimmed.eq_ignore_ascii_case("but") {
            Ok(Self::But)
        } else {
            Err(StepKeywordParseError(trimmed.to_string()))
        }
    }
}

/// Semantic kind of a step.
///
/// Kinds are fixed when a step is parsed and drive both flattening (which
/// hoists prerequisites and actions of ancestor scenarios) and writing
/// (which picks the conjunction word for each run of steps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Setup the scenario depends on, written with `Given`.
    Prerequisite,
    /// Behaviour under test, written with `When`.
    Action,
    /// Expected outcome, written with `Then`.
    Assertion,
}

impl StepKind {
    /// The primary keyword that introduces this kind.
    #[must_use]
    pub const fn keyword(self) -> StepKeyword {
        match self {
            Self::Prerequisite => StepKeyword::Given,
            Self::Action => StepKeyword::When,
            Self::Assertion => StepKeyword::Then,
        }
    }

    /// The conjunction word written in front of the first step of a run.
    #[must_use]
    pub const fn conjunction(self) -> &'static str {
        self.keyword().as_str()
    }

    /// Human readable name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prerequisite => "Prerequisite",
            Self::Action => "Action",
            Self::Assertion => "Assertion",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StepKind> for StepType {
    fn from(kind: StepKind) -> Self {
        match kind {
            StepKind::Prerequisite => Self::Given,
            StepKind::Action => Self::When,
            StepKind::Assertion => Self::Then,
        }
    }
}

impl TryFrom<StepType> for StepKind {
    type Error = UnsupportedStepType;

    fn try_from(ty: StepType) -> Result<Self, Self::Error> {
        match ty {
            StepType::Given => Ok(Self::Prerequisite),
            StepType::When => Ok(Self::Action),
            StepType::Then => Ok(Self::Assertion),
            // New StepType variants break the expectation and fail the build.
            #[expect(unreachable_patterns, reason = "guard future StepType variants")]
            other => Err(UnsupportedStepType(other)),
        }
    }
}

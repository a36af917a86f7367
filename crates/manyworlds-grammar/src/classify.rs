//! Line classification.
//!
//! Each non-blank line of an indented feature file is exactly one of the
//! shapes in [`LineKind`]. Recognition is ordered: feature header, scenario
//! header, step, data-table row, then free text. Whether free text is
//! acceptable depends on where the line sits in the document, so the caller
//! says so through `accepts_plain_text`.

use regex::Regex;
use std::sync::LazyLock;

use crate::keyword::StepKeyword;
use crate::table::{TableRow, parse_table_row};

#[expect(clippy::expect_used, reason = "patterns are compile-time constants")]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("line pattern should compile")
}

static FEATURE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^Feature: (?P<name>.*)"));

static SCENARIO_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^Scenario: (?P<name>.*)"));

static STEP_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?P<keyword>Given|When|Then|And|But) (?P<text>.+?)(?: # (?P<comment>.+))?$")
});

/// A parsed step line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLine<'a> {
    /// Keyword opening the line.
    pub keyword: StepKeyword,
    /// Step text, trimmed.
    pub text: &'a str,
    /// Comment following `# `, trimmed.
    pub comment: Option<&'a str>,
}

/// The shape of one non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Feature: <name>`.
    FeatureHeader {
        /// Feature name, trimmed.
        name: &'a str,
    },
    /// `Scenario: <name>`.
    ScenarioHeader {
        /// Scenario name, trimmed.
        name: &'a str,
    },
    /// `<Given|When|Then|And|But> <text>[ # <comment>]`.
    Step(StepLine<'a>),
    /// `| cell | cell |[ # <comment>]`.
    DataTableRow(TableRow),
    /// Free text belonging to the feature description.
    PlainText(&'a str),
    /// Anything else.
    Unrecognized(&'a str),
}

/// Classify a line whose indentation has already been removed.
///
/// Lines matching none of the fixed shapes become
/// [`LineKind::PlainText`] when `accepts_plain_text` is set and
/// [`LineKind::Unrecognized`] otherwise.
///
/// # Examples
///
/// ```
/// use manyworlds_grammar::{LineKind, StepKeyword, classify};
///
/// let LineKind::Step(step) = classify("When I go to \"Users\" # nav", false) else {
///     panic!("expected a step");
/// };
/// assert_eq!(step.keyword, StepKeyword::When);
/// assert_eq!(step.text, "I go to \"Users\"");
/// assert_eq!(step.comment, Some("nav"));
///
/// assert_eq!(
///     classify("Whenx I go", false),
///     LineKind::Unrecognized("Whenx I go")
/// );
/// ```
#[must_use]
pub fn classify(content: &str, accepts_plain_text: bool) -> LineKind<'_> {
    if let Some(name) = capture_name(&FEATURE_RE, content) {
        return LineKind::FeatureHeader { name };
    }
    if let Some(name) = capture_name(&SCENARIO_RE, content) {
        return LineKind::ScenarioHeader { name };
    }
    if let Some(step) = step_line(content) {
        return LineKind::Step(step);
    }
    if let Some(row) = parse_table_row(content) {
        return LineKind::DataTableRow(row);
    }
    if accepts_plain_text {
        LineKind::PlainText(content)
    } else {
        LineKind::Unrecognized(content)
    }
}

fn capture_name<'a>(pattern: &Regex, content: &'a str) -> Option<&'a str> {
    pattern
        .captures(content)
        .and_then(|captures| captures.name("name"))
        .map(|m| m.as_str().trim())
}

fn step_line(content: &str) -> Option<StepLine<'_>> {
    let captures = STEP_RE.captures(content)?;
    let keyword = captures.name("keyword")?.as_str().parse().ok()?;
    let text = captures.name("text")?.as_str().trim();
    let comment = captures.name("comment").map(|m| m.as_str().trim());
    Some(StepLine {
        keyword,
        text,
        comment,
    })
}

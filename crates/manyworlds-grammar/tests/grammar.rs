//! Classification of whole documents line by line.

use gherkin::StepType;
use manyworlds_grammar::{IndentedLine, LineKind, StepKeyword, StepKind, classify};
use rstest::rstest;

const DOCUMENT: &str = "\
Feature: User Deactivation

    As a manager

Scenario: View users
Given the following users:
    | Name | Status | # seeded
    | Ben  | Active |
When I go to \"Users\"
    Scenario: Deactivate user
    When I click \"Deactivate\" # in the row menu
    Then I see \"Ben\" as \"Deactivated\"
";

fn shape(kind: &LineKind<'_>) -> &'static str {
    match kind {
        LineKind::FeatureHeader { .. } => "feature",
        LineKind::ScenarioHeader { .. } => "scenario",
        LineKind::Step(_) => "step",
        LineKind::DataTableRow(_) => "row",
        LineKind::PlainText(_) => "text",
        LineKind::Unrecognized(_) => "unrecognized",
    }
}

#[test]
fn classifies_every_line_of_a_document() {
    let mut seen_scenario = false;
    let shapes: Vec<(usize, &str)> = DOCUMENT
        .lines()
        .map(IndentedLine::split)
        .filter(|line| !line.is_blank())
        .map(|line| {
            let kind = classify(line.content(), !seen_scenario);
            if matches!(kind, LineKind::ScenarioHeader { .. }) {
                seen_scenario = true;
            }
            (line.level().unwrap_or_default(), shape(&kind))
        })
        .collect();
    assert_eq!(
        shapes,
        [
            (1, "feature"),
            (2, "text"),
            (1, "scenario"),
            (1, "step"),
            (2, "row"),
            (2, "row"),
            (1, "step"),
            (2, "scenario"),
            (2, "step"),
            (2, "step"),
        ]
    );
}

#[test]
fn table_row_comments_are_split_from_cells() {
    let LineKind::DataTableRow(row) = classify("| Name | Status | # seeded", false) else {
        panic!("expected a table row");
    };
    assert_eq!(row.cells(), ["Name", "Status"]);
    assert_eq!(row.comment(), Some("seeded"));
}

#[rstest]
#[case(StepKeyword::Given, None, Some(StepKind::Prerequisite))]
#[case(StepKeyword::When, Some(StepKind::Prerequisite), Some(StepKind::Action))]
#[case(StepKeyword::And, Some(StepKind::Action), Some(StepKind::Action))]
#[case(StepKeyword::But, Some(StepKind::Assertion), Some(StepKind::Assertion))]
#[case(StepKeyword::And, None, None)]
fn keywords_resolve_against_previous_kind(
    #[case] keyword: StepKeyword,
    #[case] previous: Option<StepKind>,
    #[case] expected: Option<StepKind>,
) {
    assert_eq!(keyword.resolve(previous), expected);
}

#[rstest]
#[case(StepKind::Prerequisite, StepType::Given)]
#[case(StepKind::Action, StepType::When)]
#[case(StepKind::Assertion, StepType::Then)]
fn step_kinds_map_to_gherkin_step_types(#[case] kind: StepKind, #[case] ty: StepType) {
    assert_eq!(StepType::from(kind), ty);
    assert_eq!(StepKind::try_from(ty).ok(), Some(kind));
}

//! Composite names for flat scenarios.

use crate::scenario::Scenario;

/// Join the names along a path into one scenario name.
///
/// Consecutive organizational scenarios form a bracketed group joined by
/// ` / `; consecutive scenarios with assertions are joined by ` > `.
/// Groups are separated by a single space.
pub(crate) fn compose_name(path: &[&Scenario]) -> String {
    let mut groups: Vec<Vec<&Scenario>> = Vec::new();
    for &scenario in path {
        match groups.last_mut() {
            Some(group) if same_group(group, scenario) => group.push(scenario),
            _ => groups.push(vec![scenario]),
        }
    }
    groups
        .iter()
        .map(|group| render_group(group))
        .collect::<Vec<_>>()
        .join(" ")
}

fn same_group(group: &[&Scenario], scenario: &Scenario) -> bool {
    group
        .last()
        .is_some_and(|last| last.is_organizational() == scenario.is_organizational())
}

fn render_group(group: &[&Scenario]) -> String {
    let names: Vec<&str> = group.iter().map(|scenario| scenario.name()).collect();
    if group.iter().all(|scenario| scenario.is_organizational()) {
        format!("[{}]", names.join(" / "))
    } else {
        names.join(" > ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioId;
    use crate::step::Step;
    use manyworlds_grammar::StepKind;
    use rstest::rstest;

    fn scenario(name: &str, organizational: bool) -> Scenario {
        let mut scenario = Scenario::new(ScenarioId(0), name, None, 1);
        let kind = if organizational {
            StepKind::Action
        } else {
            StepKind::Assertion
        };
        scenario.steps_mut().push(Step::new("x", kind));
        scenario
    }

    #[rstest]
    #[case(&[("B", false)], "B")]
    #[case(&[("A", true), ("B", false)], "[A] B")]
    #[case(&[("A", true), ("B", true), ("C", false)], "[A / B] C")]
    #[case(&[("A", false), ("B", false)], "A > B")]
    #[case(&[("A", true), ("B", false), ("C", true), ("D", false)], "[A] B [C] D")]
    #[case(&[("A", true)], "[A]")]
    #[case(&[], "")]
    fn groups_consecutive_scenarios(#[case] path: &[(&str, bool)], #[case] expected: &str) {
        let scenarios: Vec<Scenario> = path
            .iter()
            .map(|(name, organizational)| scenario(name, *organizational))
            .collect();
        let refs: Vec<&Scenario> = scenarios.iter().collect();
        assert_eq!(compose_name(&refs), expected);
    }
}

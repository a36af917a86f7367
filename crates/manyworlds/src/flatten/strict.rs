//! Strict flattening: one flat scenario per scenario with assertions.
//!
//! Ancestors contribute their prerequisites and actions but never their
//! assertions, so each emitted scenario checks exactly one thing.

use crate::forest::Forest;
use crate::scenario::Scenario;

use super::FlatScenario;
use super::naming::compose_name;

pub(super) fn flatten(forest: &Forest) -> Vec<FlatScenario> {
    forest
        .scenarios()
        .iter()
        .filter(|scenario| !scenario.is_organizational())
        .map(|scenario| flatten_one(forest, scenario))
        .collect()
}

fn flatten_one(forest: &Forest, scenario: &Scenario) -> FlatScenario {
    let ancestors = forest.ancestors(scenario.id());
    let steps = ancestors
        .iter()
        .flat_map(|ancestor| ancestor.prerequisites())
        .chain(ancestors.iter().flat_map(|ancestor| ancestor.actions()))
        .chain(scenario.steps())
        .cloned()
        .collect();
    let naming: Vec<&Scenario> = ancestors
        .into_iter()
        .filter(|ancestor| ancestor.is_organizational())
        .chain(std::iter::once(scenario))
        .collect();
    FlatScenario::new(compose_name(&naming), steps)
}

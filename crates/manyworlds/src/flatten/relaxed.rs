//! Relaxed flattening: one flat scenario per leaf.
//!
//! Each leaf replays its whole path. A scenario's assertions are emitted the
//! first time any leaf passes through it and skipped afterwards; the
//! `validated` flag on the scenario records that.

use crate::forest::Forest;
use crate::scenario::{Scenario, ScenarioId};

use super::FlatScenario;
use super::naming::compose_name;

pub(super) fn flatten(forest: &mut Forest) -> Vec<FlatScenario> {
    forest.reset_validated();
    let leaves: Vec<ScenarioId> = forest.leaf_scenarios().map(Scenario::id).collect();
    leaves
        .into_iter()
        .map(|leaf| flatten_leaf(forest, leaf))
        .collect()
}

fn flatten_leaf(forest: &mut Forest, leaf: ScenarioId) -> FlatScenario {
    let path: Vec<ScenarioId> = forest.path(leaf).iter().map(|s| s.id()).collect();
    let mut steps = Vec::new();
    let mut named = Vec::new();
    for id in path {
        let Some(scenario) = forest.scenario_mut(id) else {
            continue;
        };
        steps.extend(scenario.prerequisites().cloned());
        steps.extend(scenario.actions().cloned());
        if scenario.is_organizational() {
            named.push(id);
        } else if !scenario.is_validated() {
            steps.extend(scenario.assertions().cloned());
            scenario.set_validated(true);
            named.push(id);
        }
    }
    let naming: Vec<&Scenario> = named.iter().filter_map(|id| forest.scenario(*id)).collect();
    FlatScenario::new(compose_name(&naming), steps)
}

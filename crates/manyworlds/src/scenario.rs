//! Scenario nodes of a forest.

use std::fmt;

use manyworlds_grammar::StepKind;

use crate::step::Step;

/// Index of a scenario within its [`Forest`](crate::Forest).
///
/// Ids follow document order: a scenario created later always has a larger
/// id than every scenario before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScenarioId(pub(crate) usize);

impl ScenarioId {
    /// Position of the scenario in document order, starting at 0.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One node of a scenario tree.
///
/// Navigation (children, ancestors, siblings) goes through the owning
/// [`Forest`](crate::Forest); the node itself only knows its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    id: ScenarioId,
    name: String,
    steps: Vec<Step>,
    parent: Option<ScenarioId>,
    level: usize,
    validated: bool,
}

impl Scenario {
    pub(crate) fn new(
        id: ScenarioId,
        name: &str,
        parent: Option<ScenarioId>,
        level: usize,
    ) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            steps: Vec::new(),
            parent,
            level,
            validated: false,
        }
    }

    /// The scenario's id.
    #[must_use]
    pub const fn id(&self) -> ScenarioId {
        self.id
    }

    /// Trimmed scenario name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Steps in authored order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub(crate) fn steps_mut(&mut self) -> &mut Vec<Step> {
        &mut self.steps
    }

    /// Parent scenario, `None` for roots.
    #[must_use]
    pub const fn parent(&self) -> Option<ScenarioId> {
        self.parent
    }

    /// Returns `true` for scenarios without a parent.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Depth in the tree, 1 for roots.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Whether a relaxed flattening pass has already emitted this
    /// scenario's assertions.
    #[must_use]
    pub const fn is_validated(&self) -> bool {
        self.validated
    }

    pub(crate) fn set_validated(&mut self, validated: bool) {
        self.validated = validated;
    }

    /// Steps of the given kind, in authored order.
    pub fn steps_of_kind(&self, kind: StepKind) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(move |step| step.kind() == kind)
    }

    /// `Given` steps.
    pub fn prerequisites(&self) -> impl Iterator<Item = &Step> {
        self.steps_of_kind(StepKind::Prerequisite)
    }

    /// `When` steps.
    pub fn actions(&self) -> impl Iterator<Item = &Step> {
        self.steps_of_kind(StepKind::Action)
    }

    /// `Then` steps.
    pub fn assertions(&self) -> impl Iterator<Item = &Step> {
        self.steps_of_kind(StepKind::Assertion)
    }

    /// Returns `true` when the scenario has no assertions and so exists only
    /// to group its children.
    #[must_use]
    pub fn is_organizational(&self) -> bool {
        self.assertions().next().is_none()
    }

    pub(crate) fn last_step_mut(&mut self) -> Option<&mut Step> {
        self.steps.last_mut()
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Scenario: {} ({} prerequisites, {} actions, {} assertions)>",
            self.name,
            self.prerequisites().count(),
            self.actions().count(),
            self.assertions().count()
        )
    }
}

//! The scenario forest.
//!
//! A [`Forest`] owns every scenario of a document in an arena addressed by
//! [`ScenarioId`]. Each scenario records its parent; children, ancestors
//! and siblings are derived by scanning the arena, which keeps document
//! order without storing a second set of links.

mod builder;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::config::ParseOptions;
use crate::error::ParseError;
use crate::scenario::{Scenario, ScenarioId};

use builder::ForestBuilder;

/// One or more scenario trees parsed from an indented feature file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    name: Option<String>,
    description: Vec<String>,
    scenarios: Vec<Scenario>,
}

impl Forest {
    /// Parse the indented feature file at `path`.
    ///
    /// The whole file is read before parsing starts.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] when the file cannot be read and any other
    /// [`ParseError`] variant for the first malformed line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        Self::from_path_with(path, ParseOptions::default())
    }

    /// Parse the file at `path` with explicit options.
    ///
    /// # Errors
    ///
    /// See [`Forest::from_path`].
    pub fn from_path_with(
        path: impl AsRef<Path>,
        options: ParseOptions,
    ) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_with(&text, options)
    }

    /// Parse an in-memory document.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] for the first malformed line.
    ///
    /// # Examples
    ///
    /// ```
    /// use manyworlds::Forest;
    ///
    /// let forest = Forest::parse(concat!(
    ///     "Scenario: A\n",
    ///     "    Given x\n",
    ///     "    Scenario: B\n",
    ///     "        When y\n",
    ///     "        Then z\n",
    /// ))
    /// .unwrap();
    /// assert_eq!(forest.len(), 2);
    /// assert!(forest.find(&["A", "B"]).is_some());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, ParseOptions::default())
    }

    /// Parse an in-memory document with explicit options.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] for the first malformed line.
    pub fn parse_with(text: &str, options: ParseOptions) -> Result<Self, ParseError> {
        ForestBuilder::new(options).build(text)
    }

    /// Feature name from the `Feature:` header, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Free-text lines between the feature header and the first scenario.
    #[must_use]
    pub fn description(&self) -> &[String] {
        &self.description
    }

    /// Number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Returns `true` when no scenario has been parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Look up a scenario by id.
    #[must_use]
    pub fn scenario(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.get(id.0)
    }

    pub(crate) fn scenario_mut(&mut self, id: ScenarioId) -> Option<&mut Scenario> {
        self.scenarios.get_mut(id.0)
    }

    /// Every scenario in document order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Scenarios without a parent, in document order.
    pub fn root_scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter().filter(|scenario| scenario.is_root())
    }

    /// Scenarios without children, in document order.
    pub fn leaf_scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios
            .iter()
            .filter(|scenario| self.is_leaf(scenario.id()))
    }

    /// Returns `true` when no scenario names `id` as its parent.
    #[must_use]
    pub fn is_leaf(&self, id: ScenarioId) -> bool {
        self.children(id).next().is_none()
    }

    /// Parent of `id`, `None` for roots.
    #[must_use]
    pub fn parent(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenario(id)
            .and_then(Scenario::parent)
            .and_then(|parent| self.scenario(parent))
    }

    /// Direct children of `id`, in document order.
    pub fn children(&self, id: ScenarioId) -> impl Iterator<Item = &Scenario> {
        self.scenarios
            .iter()
            .filter(move |scenario| scenario.parent() == Some(id))
    }

    /// Scenarios sharing the parent of `id`, excluding `id` itself.
    ///
    /// Roots are siblings of the other roots.
    pub fn siblings(&self, id: ScenarioId) -> impl Iterator<Item = &Scenario> {
        let parent = self.scenario(id).and_then(Scenario::parent);
        self.scenarios
            .iter()
            .filter(move |scenario| scenario.id() != id && scenario.parent() == parent)
    }

    /// Ancestors of `id`, root first.
    #[must_use]
    pub fn ancestors(&self, id: ScenarioId) -> Vec<&Scenario> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(scenario) = current {
            ancestors.push(scenario);
            current = self.parent(scenario.id());
        }
        ancestors.reverse();
        ancestors
    }

    /// Ancestors of `id` followed by the scenario itself.
    #[must_use]
    pub fn path(&self, id: ScenarioId) -> Vec<&Scenario> {
        let mut path = self.ancestors(id);
        path.extend(self.scenario(id));
        path
    }

    /// Ancestors of `id` that have no assertions, root first.
    #[must_use]
    pub fn organizational_ancestors(&self, id: ScenarioId) -> Vec<&Scenario> {
        self.ancestors(id)
            .into_iter()
            .filter(|scenario| scenario.is_organizational())
            .collect()
    }

    /// Returns `true` once a later scenario sits at the same or a shallower
    /// level than `id`, so no further children can attach to it.
    #[must_use]
    pub fn is_closed(&self, id: ScenarioId) -> bool {
        let Some(scenario) = self.scenario(id) else {
            return true;
        };
        self.scenarios
            .iter()
            .skip(id.0 + 1)
            .any(|later| later.level() <= scenario.level())
    }

    /// Resolve a scenario from the names along its path, starting at a root.
    ///
    /// Returns `None` when `names` is empty or any segment is missing.
    #[must_use]
    pub fn find<S: AsRef<str>>(&self, names: &[S]) -> Option<&Scenario> {
        let (first, rest) = names.split_first()?;
        let mut current = self
            .root_scenarios()
            .find(|scenario| scenario.name() == first.as_ref())?;
        for name in rest {
            current = self
                .children(current.id())
                .find(|scenario| scenario.name() == name.as_ref())?;
        }
        Some(current)
    }

    pub(crate) fn reset_validated(&mut self) {
        for scenario in &mut self.scenarios {
            scenario.set_validated(false);
        }
    }
}

impl FromStr for Forest {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

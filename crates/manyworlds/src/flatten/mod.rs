//! Flattening of a scenario forest into linear scenarios.
//!
//! Two traversal policies are offered through [`FlattenMode`]:
//!
//! - **strict** emits one scenario per scenario with assertions, replaying
//!   the prerequisites and actions of its ancestors first;
//! - **relaxed** emits one scenario per leaf and checks each scenario's
//!   assertions only on the first path that reaches it.

mod naming;
mod relaxed;
mod strict;

use std::fs;
use std::path::Path;

use crate::config::{FlattenMode, FlattenOptions};
use crate::error::FlattenError;
use crate::forest::Forest;
use crate::step::Step;
use crate::writer;

/// One linear scenario produced by flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatScenario {
    name: String,
    steps: Vec<Step>,
}

impl FlatScenario {
    pub(crate) fn new(name: String, steps: Vec<Step>) -> Self {
        Self { name, steps }
    }

    /// Composite name, without the `Scenario:` keyword.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Steps in output order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Forest {
    /// Flatten the forest using `mode`.
    ///
    /// Relaxed mode updates each scenario's validated flag; the flags are
    /// cleared at the start of every pass so repeated calls agree.
    ///
    /// # Examples
    ///
    /// ```
    /// use manyworlds::{FlattenMode, Forest};
    ///
    /// let mut forest = Forest::parse(concat!(
    ///     "Scenario: A\n",
    ///     "Given x\n",
    ///     "    Scenario: B\n",
    ///     "    When y\n",
    ///     "    Then z\n",
    /// ))
    /// .unwrap();
    /// let flat = forest.flatten_scenarios(FlattenMode::Strict);
    /// assert_eq!(flat.len(), 1);
    /// assert_eq!(flat[0].name(), "[A] B");
    /// assert_eq!(flat[0].steps().len(), 3);
    /// ```
    pub fn flatten_scenarios(&mut self, mode: FlattenMode) -> Vec<FlatScenario> {
        let flat = match mode {
            FlattenMode::Strict => strict::flatten(self),
            FlattenMode::Relaxed => relaxed::flatten(self),
        };
        for scenario in &flat {
            log::debug!(
                "emitted {mode} scenario {:?} with {} steps",
                scenario.name(),
                scenario.steps().len()
            );
        }
        log::info!(
            "flattened {} scenarios into {} {mode} scenarios",
            self.len(),
            flat.len()
        );
        flat
    }

    /// Render the flat feature file as text.
    #[must_use]
    pub fn render(&mut self, options: FlattenOptions) -> String {
        let flat = self.flatten_scenarios(options.mode);
        let feature = self.name().map(|name| (name, self.description()));
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writer::write_document(&mut out, feature, &flat, options.write_comments);
        out
    }

    /// Write the flat feature file to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`FlattenError::Io`] when the file cannot be written.
    pub fn flatten(
        &mut self,
        path: impl AsRef<Path>,
        options: FlattenOptions,
    ) -> Result<(), FlattenError> {
        let path = path.as_ref();
        let document = self.render(options);
        fs::write(path, document).map_err(|source| FlattenError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

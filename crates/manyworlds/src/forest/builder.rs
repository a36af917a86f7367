//! Line-by-line construction of a [`Forest`].
//!
//! Every non-blank line is first checked for whole-unit indentation, then
//! classified and folded into the forest. The first failure aborts the
//! build.

use manyworlds_grammar::{IndentedLine, LineKind, StepLine, TableRow, classify};

use crate::config::{ParseOptions, StepIndentation};
use crate::datatable::DataTable;
use crate::error::ParseError;
use crate::scenario::{Scenario, ScenarioId};
use crate::step::Step;

use super::Forest;

pub(super) struct ForestBuilder {
    forest: Forest,
    step_indentation: Option<StepIndentation>,
}

impl ForestBuilder {
    pub(super) fn new(options: ParseOptions) -> Self {
        Self {
            forest: Forest::default(),
            step_indentation: options.step_indentation,
        }
    }

    pub(super) fn build(mut self, text: &str) -> Result<Forest, ParseError> {
        for (index, raw) in text.lines().enumerate() {
            self.push_line(index + 1, raw)?;
        }
        log::info!(
            "parsed {} scenarios in {} trees",
            self.forest.len(),
            self.forest.root_scenarios().count()
        );
        Ok(self.forest)
    }

    fn push_line(&mut self, line_no: usize, raw: &str) -> Result<(), ParseError> {
        let line = IndentedLine::split(raw);
        if line.is_blank() {
            return Ok(());
        }
        let content = line.content();
        let Some(level) = line.level() else {
            return Err(ParseError::InvalidIndentation {
                line_no,
                line: content.to_string(),
            });
        };
        let accepts_plain_text = self.forest.name.is_some() && self.forest.is_empty();
        let kind = classify(content, accepts_plain_text);
        log::trace!("line {line_no} at level {level}: {kind:?}");
        match kind {
            LineKind::FeatureHeader { name } => self.set_feature(line_no, content, name),
            LineKind::ScenarioHeader { name } => self.append_scenario(line_no, level, name),
            LineKind::Step(step) => self.append_step(line_no, level, content, step),
            LineKind::DataTableRow(row) => self.append_data_row(line_no, content, row),
            LineKind::PlainText(text) => {
                self.forest.description.push(text.to_string());
                Ok(())
            }
            LineKind::Unrecognized(text) => Err(ParseError::UnparseableLine {
                line_no,
                line: text.to_string(),
            }),
        }
    }

    fn set_feature(
        &mut self,
        line_no: usize,
        content: &str,
        name: &str,
    ) -> Result<(), ParseError> {
        if self.forest.name.is_some() || !self.forest.is_empty() {
            return Err(ParseError::FeatureLineMisplaced {
                line_no,
                line: content.to_string(),
            });
        }
        self.forest.name = Some(name.to_string());
        Ok(())
    }

    fn append_scenario(
        &mut self,
        line_no: usize,
        level: usize,
        name: &str,
    ) -> Result<(), ParseError> {
        let parent = match level.checked_sub(1) {
            Some(parent_level) if parent_level > 0 => Some(
                self.open_scenario_at(parent_level)
                    .ok_or_else(|| ParseError::ExcessiveIndentation {
                        line_no,
                        scenario: name.to_string(),
                    })?,
            ),
            _ => None,
        };
        let id = ScenarioId(self.forest.scenarios.len());
        let scenario = Scenario::new(id, name, parent, level);
        log::debug!(
            "attached scenario {:?} at level {level} under {parent:?}",
            scenario.name()
        );
        self.forest.scenarios.push(scenario);
        Ok(())
    }

    /// The one scenario at `level` that no later scenario has closed.
    fn open_scenario_at(&self, level: usize) -> Option<ScenarioId> {
        self.forest
            .scenarios
            .iter()
            .rev()
            .find(|scenario| scenario.level() == level)
            .map(Scenario::id)
            .filter(|id| !self.forest.is_closed(*id))
    }

    fn append_step(
        &mut self,
        line_no: usize,
        level: usize,
        content: &str,
        step: StepLine<'_>,
    ) -> Result<(), ParseError> {
        let Some(scenario) = self.forest.scenarios.last_mut() else {
            return Err(ParseError::StepOutsideScenario {
                line_no,
                line: content.to_string(),
            });
        };
        let found = level
            .checked_sub(scenario.level())
            .and_then(StepIndentation::from_offset);
        let convention = match (self.step_indentation, found) {
            (Some(expected), Some(actual)) if expected == actual => expected,
            (None, Some(actual)) => actual,
            _ => {
                return Err(ParseError::InvalidIndentation {
                    line_no,
                    line: step.text.to_string(),
                });
            }
        };
        self.step_indentation = Some(convention);

        let previous = scenario.steps().last().map(Step::kind);
        let kind = step
            .keyword
            .resolve(previous)
            .ok_or_else(|| ParseError::ConjunctionWithoutStep {
                line_no,
                line: content.to_string(),
            })?;
        let mut parsed = Step::new(step.text, kind);
        if let Some(comment) = step.comment {
            parsed = parsed.with_comment(comment);
        }
        scenario.steps_mut().push(parsed);
        Ok(())
    }

    fn append_data_row(
        &mut self,
        line_no: usize,
        content: &str,
        row: TableRow,
    ) -> Result<(), ParseError> {
        let Some(step) = self
            .forest
            .scenarios
            .last_mut()
            .and_then(Scenario::last_step_mut)
        else {
            return Err(ParseError::DataRowWithoutStep {
                line_no,
                line: content.to_string(),
            });
        };
        let slot = step.data_mut();
        if let Some(table) = slot.as_mut() {
            return table
                .push_row(row)
                .map_err(|source| ParseError::UnevenDataRow { line_no, source });
        }
        *slot = Some(DataTable::new(row));
        Ok(())
    }
}

//! Scenario steps.

use std::fmt;

use manyworlds_grammar::StepKind;

use crate::datatable::DataTable;

/// One `Given`/`When`/`Then` step of a scenario.
///
/// `And` and `But` lines are resolved to the kind of the step before them
/// while parsing, so a step only ever records one of the three kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: String,
    kind: StepKind,
    comment: Option<String>,
    data: Option<DataTable>,
}

impl Step {
    /// Create a step. The name is trimmed.
    #[must_use]
    pub fn new(name: impl AsRef<str>, kind: StepKind) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            kind,
            comment: None,
            data: None,
        }
    }

    /// Return the step with `comment` attached.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Return the step with `data` attached.
    #[must_use]
    pub fn with_data(mut self, data: DataTable) -> Self {
        self.data = Some(data);
        self
    }

    /// Step text without its keyword.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind fixed when the step was parsed.
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    /// Trailing comment, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Attached data table, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&DataTable> {
        self.data.as_ref()
    }

    pub(crate) fn data_mut(&mut self) -> &mut Option<DataTable> {
        &mut self.data
    }

    /// Render the step as one flat line.
    ///
    /// The first step of a run of equal kinds carries its own conjunction;
    /// later ones are written with `And`.
    ///
    /// # Examples
    ///
    /// ```
    /// use manyworlds::Step;
    /// use manyworlds::grammar::StepKind;
    ///
    /// let step = Step::new("the following users:", StepKind::Prerequisite);
    /// assert_eq!(step.format(true), "Given the following users:");
    /// assert_eq!(step.format(false), "And the following users:");
    /// ```
    #[must_use]
    pub fn format(&self, first_of_kind: bool) -> String {
        let conjunction = if first_of_kind {
            self.kind.conjunction()
        } else {
            "And"
        };
        format!("{conjunction} {}", self.name)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.name.chars();
        let capitalised: String = chars
            .next()
            .map(|first| first.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        write!(f, "<{}: {capitalised}>", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manyworlds_grammar::TableRow;

    #[test]
    fn trims_name() {
        let step = Step::new("  I see users ", StepKind::Assertion);
        assert_eq!(step.name(), "I see users");
    }

    #[test]
    fn display_capitalises_name() {
        let step = Step::new("the following users:", StepKind::Prerequisite);
        assert_eq!(step.to_string(), "<Prerequisite: The following users:>");
    }

    #[test]
    fn display_handles_empty_name() {
        let step = Step::new("", StepKind::Action);
        assert_eq!(step.to_string(), "<Action: >");
    }

    #[test]
    fn carries_comment_and_data() {
        let table = DataTable::new(TableRow::new(["Name"], None));
        let step = Step::new("users", StepKind::Prerequisite)
            .with_comment("seeded")
            .with_data(table.clone());
        assert_eq!(step.comment(), Some("seeded"));
        assert_eq!(step.data(), Some(&table));
    }

    #[test]
    fn format_uses_and_for_continuations() {
        let step = Step::new("I click \"OK\"", StepKind::Action);
        assert_eq!(step.format(true), "When I click \"OK\"");
        assert_eq!(step.format(false), "And I click \"OK\"");
    }
}

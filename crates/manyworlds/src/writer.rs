//! Rendering of flat Gherkin text.
//!
//! Output is assembled in memory so a failed write never leaves a partial
//! file behind.

use std::fmt::{self, Write};

use manyworlds_grammar::StepKind;

use crate::datatable::DataTable;
use crate::flatten::FlatScenario;
use crate::step::Step;

const INDENT: &str = "    ";

/// Write the optional feature declaration followed by every scenario.
pub(crate) fn write_document<W: Write>(
    writer: &mut W,
    feature: Option<(&str, &[String])>,
    scenarios: &[FlatScenario],
    write_comments: bool,
) -> fmt::Result {
    if let Some((name, description)) = feature {
        write_feature_declaration(writer, name, description)?;
    }
    for scenario in scenarios {
        write_scenario(writer, scenario, write_comments)?;
    }
    Ok(())
}

fn write_feature_declaration<W: Write>(
    writer: &mut W,
    name: &str,
    description: &[String],
) -> fmt::Result {
    writeln!(writer, "Feature: {name}")?;
    writeln!(writer)?;
    for line in description {
        writeln!(writer, "{INDENT}{line}")?;
    }
    if !description.is_empty() {
        writeln!(writer)?;
    }
    Ok(())
}

fn write_scenario<W: Write>(
    writer: &mut W,
    scenario: &FlatScenario,
    write_comments: bool,
) -> fmt::Result {
    writeln!(writer, "Scenario: {}", scenario.name())?;
    write_steps(writer, scenario.steps(), write_comments)?;
    writeln!(writer)
}

fn write_steps<W: Write>(writer: &mut W, steps: &[Step], write_comments: bool) -> fmt::Result {
    let mut previous: Option<StepKind> = None;
    for step in steps {
        let first_of_kind = previous != Some(step.kind());
        writeln!(writer, "{}", step.format(first_of_kind))?;
        if let Some(comment) = step.comment().filter(|_| write_comments) {
            writeln!(writer, "# {comment}")?;
        }
        if let Some(table) = step.data() {
            write_data_table(writer, table, write_comments)?;
        }
        previous = Some(step.kind());
    }
    Ok(())
}

fn write_data_table<W: Write>(
    writer: &mut W,
    table: &DataTable,
    write_comments: bool,
) -> fmt::Result {
    let widths = table.column_widths();
    for row in table.rows() {
        writer.write_str(INDENT)?;
        for (cell, &width) in row.cells().iter().zip(&widths) {
            write!(writer, "| {cell:<width$} ")?;
        }
        writer.write_char('|')?;
        if let Some(comment) = row.comment().filter(|_| write_comments) {
            write!(writer, " # {comment}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

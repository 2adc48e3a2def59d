//! Section builders of the instruction document.
//!
//! Each section renders to an optional block of text without a trailing
//! newline. `None` means the section is omitted entirely, heading included.
//! Heading levels, bullet markers and the `name (id)` sub-heading are a
//! compatibility contract with downstream parsers.

use crate::reference::molecule_reference;
use alembic_core::{InstructionContext, Molecule};
use serde::{Deserialize, Serialize};

/// Delimiter placed after each usage reference block
pub const REFERENCE_DELIMITER: &str = "---";

/// A section of the instruction document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Top-level heading
    Header,
    /// Task text, verbatim
    Task,
    /// Global constraints; omitted when there are none
    GlobalConstraints,
    /// One summary entry per molecule
    AvailableTools,
    /// One detailed block per molecule
    UsageReference,
    /// Fixed operating procedure
    OperationalGuidelines,
}

impl Section {
    /// All sections in document order
    pub const ALL: [Section; 6] = [
        Self::Header,
        Self::Task,
        Self::GlobalConstraints,
        Self::AvailableTools,
        Self::UsageReference,
        Self::OperationalGuidelines,
    ];

    /// Render this section
    #[must_use]
    pub fn render(self, molecules: &[Molecule], context: &InstructionContext) -> Option<String> {
        match self {
            Self::Header => Some("# Agent Instructions".to_string()),
            Self::Task => Some(format!("## Task\n{}", context.task)),
            Self::GlobalConstraints => global_constraints(context),
            Self::AvailableTools => Some(available_tools(molecules)),
            Self::UsageReference => Some(usage_reference(molecules)),
            Self::OperationalGuidelines => Some(operational_guidelines()),
        }
    }
}

fn global_constraints(context: &InstructionContext) -> Option<String> {
    if context.constraints.is_empty() {
        return None;
    }
    let mut out = String::from("## Global Constraints");
    for constraint in &context.constraints {
        out.push_str("\n- ");
        out.push_str(constraint);
    }
    Some(out)
}

fn available_tools(molecules: &[Molecule]) -> String {
    let mut out = String::from(
        "## Available Tools (Molecules)\n\
         You have access to the following high-level tools (\"Molecules\").\n\
         Use these molecules to accomplish your task. \
         Do NOT use raw MCP tools if a molecule wrapper exists.",
    );
    for molecule in molecules {
        out.push_str(&format!(
            "\n\n### {} ({})\n{}\n- **When to use**: {}\n- **Safety tier**: {}",
            molecule.name, molecule.id, molecule.description, molecule.semantics, molecule.tier
        ));
    }
    out
}

fn usage_reference(molecules: &[Molecule]) -> String {
    let mut out = String::from(
        "## Tool Usage Reference\n\
         Below are the detailed schemas and instructions for each molecule.",
    );
    for molecule in molecules {
        out.push_str("\n\n");
        out.push_str(&molecule_reference(molecule));
        out.push_str("\n\n");
        out.push_str(REFERENCE_DELIMITER);
    }
    out
}

fn operational_guidelines() -> String {
    "## Operational Guidelines\n\
     1. **Analyze the Request**: Understand the user's intent and select the appropriate molecule.\n\
     2. **Check Constraints**: Ensure your action complies with both global and molecule-specific \
     constraints, and obtain confirmation before invoking any molecule whose safety tier is not safe.\n\
     3. **Formulate Action**: Construct the usage JSON for the selected molecule.\n\
     4. **Execute**: Submit the molecule action."
        .to_string()
}

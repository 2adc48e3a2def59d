//! Instruction document composer.

use crate::section::Section;
use alembic_core::{InstructionContext, Molecule};

/// Composer rendering an ordered list of sections
///
/// Sections are joined by one blank line and the document ends with a
/// single newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionComposer {
    sections: Vec<Section>,
}

impl InstructionComposer {
    /// Create a composer with every section in canonical order
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
        }
    }

    /// Create a composer rendering only the given sections, in the given order
    #[must_use]
    pub fn with_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Sections rendered by this composer
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Render the instruction document
    #[must_use]
    pub fn compose(&self, molecules: &[Molecule], context: &InstructionContext) -> String {
        let blocks: Vec<String> = self
            .sections
            .iter()
            .filter_map(|section| section.render(molecules, context))
            .collect();
        let mut document = blocks.join("\n\n");
        document.push('\n');
        document
    }
}

impl Default for InstructionComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the full instruction document
#[must_use]
pub fn compose_instructions(molecules: &[Molecule], context: &InstructionContext) -> String {
    InstructionComposer::new().compose(molecules, context)
}

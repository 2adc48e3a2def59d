//! ALEMBIC Instruction Composition
//!
//! Renders the instruction document an agent receives. The document is a
//! pure function of the molecule list and the instruction context: no
//! timestamps, random ids or environment-dependent text.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compose;
pub mod digest;
pub mod reference;
pub mod section;

pub use compose::{compose_instructions, InstructionComposer};
pub use digest::document_digest;
pub use reference::molecule_reference;
pub use section::Section;

//! ALEMBIC Core Types
//!
//! This crate contains pure types and logic with no I/O.
//! Everything here is created per invocation and never mutated after
//! construction, so values can be shared freely across agent sessions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod id;
pub mod molecule;
pub mod schema;
pub mod tier;
pub mod tool;

// Re-exports
pub use context::InstructionContext;
pub use error::{CoreError, CoreResult};
pub use id::MoleculeId;
pub use molecule::{Molecule, MoleculeParameters};
pub use schema::{ParameterSchema, SchemaKind, StringConstraints, Translation};
pub use tier::Tier;
pub use tool::{RawTool, RegistryListing, ServerSpec};

//! ALEMBIC Molecules
//!
//! The canonical catalog, its validation, and the synthesizer that
//! reconciles raw registry tools against it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod naming;
pub mod standard;
pub mod synthesize;
pub mod validate;

pub use catalog::MoleculeCatalog;
pub use naming::{title_case, type_name};
pub use synthesize::{
    synthesize_molecules, CoveredTool, MoleculeSynthesizer, SynthesisDefaults, SynthesisReport,
};
pub use validate::{CatalogError, CatalogValidator, ValidationRule};

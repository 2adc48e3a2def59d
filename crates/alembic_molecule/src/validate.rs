//! Catalog validation for authoring defects.
//!
//! Lookup never fails on a bad catalog (first declaration wins); problems
//! are surfaced here instead, so tests and `alembic catalog --validate`
//! can reject them before they ship.

use alembic_core::{Molecule, MoleculeId};
use indexmap::{IndexMap, IndexSet};

/// Catalog authoring defect
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Id does not follow naming convention
    #[error("invalid molecule id: {id:?}")]
    InvalidId {
        /// Offending id
        id: MoleculeId,
    },
    /// Two molecules share an id
    #[error("duplicate molecule id: {id}")]
    DuplicateId {
        /// Duplicated id
        id: MoleculeId,
    },
    /// Molecule has no display name
    #[error("molecule {id} has an empty name")]
    EmptyName {
        /// Offending molecule
        id: MoleculeId,
    },
    /// Molecule composes no raw tools
    #[error("molecule {id} has no underlying tools")]
    EmptyUnderlyingTools {
        /// Offending molecule
        id: MoleculeId,
    },
    /// A raw tool is claimed by more than one molecule
    #[error("tool {tool} claimed by both {first} and {second}")]
    OverlappingCoverage {
        /// Raw tool name
        tool: String,
        /// Molecule that wins lookup
        first: MoleculeId,
        /// Molecule whose claim is shadowed
        second: MoleculeId,
    },
}

/// Validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Ids are lowercase alphanumeric with single inner underscores
    IdConvention,
    /// Ids are unique
    UniqueIds,
    /// Names are non-empty
    NonEmptyName,
    /// Every molecule composes at least one raw tool
    NonEmptyTools,
    /// No raw tool is composed by two molecules
    DisjointCoverage,
}

/// Validator for molecule sets
#[derive(Debug, Clone)]
pub struct CatalogValidator {
    rules: Vec<ValidationRule>,
}

impl CatalogValidator {
    /// Create a validator with all rules
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![
                ValidationRule::IdConvention,
                ValidationRule::UniqueIds,
                ValidationRule::NonEmptyName,
                ValidationRule::NonEmptyTools,
                ValidationRule::DisjointCoverage,
            ],
        }
    }

    /// Create a validator with only specific rules
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<ValidationRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Validate a molecule set, collecting every defect
    ///
    /// # Errors
    ///
    /// Returns all defects found, in molecule order
    pub fn validate(&self, molecules: &[Molecule]) -> Result<(), Vec<CatalogError>> {
        let mut errors = Vec::new();
        let mut ids: IndexSet<&str> = IndexSet::new();
        let mut owners: IndexMap<&str, &MoleculeId> = IndexMap::new();

        for molecule in molecules {
            if self.has(ValidationRule::IdConvention) && !is_valid_id(molecule.id.as_str()) {
                errors.push(CatalogError::InvalidId {
                    id: molecule.id.clone(),
                });
            }

            if self.has(ValidationRule::UniqueIds) && !ids.insert(molecule.id.as_str()) {
                errors.push(CatalogError::DuplicateId {
                    id: molecule.id.clone(),
                });
            }

            if self.has(ValidationRule::NonEmptyName) && molecule.name.trim().is_empty() {
                errors.push(CatalogError::EmptyName {
                    id: molecule.id.clone(),
                });
            }

            if self.has(ValidationRule::NonEmptyTools) && molecule.underlying_tools.is_empty() {
                errors.push(CatalogError::EmptyUnderlyingTools {
                    id: molecule.id.clone(),
                });
            }

            if self.has(ValidationRule::DisjointCoverage) {
                for tool in &molecule.underlying_tools {
                    match owners.get(tool.as_str()) {
                        Some(first) if **first != molecule.id => {
                            errors.push(CatalogError::OverlappingCoverage {
                                tool: tool.clone(),
                                first: (*first).clone(),
                                second: molecule.id.clone(),
                            });
                        }
                        Some(_) => {}
                        None => {
                            owners.insert(tool.as_str(), &molecule.id);
                        }
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn has(&self, rule: ValidationRule) -> bool {
        self.rules.contains(&rule)
    }
}

impl Default for CatalogValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase alphanumeric with underscores, no leading, trailing or doubled underscore
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !id.starts_with('_')
        && !id.ends_with('_')
        && !id.contains("__")
}

//! Canonical molecule catalog.

use crate::standard;
use crate::validate::{CatalogError, CatalogValidator};
use alembic_core::Molecule;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

static STANDARD: Lazy<MoleculeCatalog> = Lazy::new(|| MoleculeCatalog::new(standard::molecules()));

/// Read-only table of canonical molecules
///
/// Molecules live in an arena in declaration order. Two indexes point into
/// it: one by id, and one from raw tool name to the molecule composing it.
/// When authoring mistakes produce duplicate ids or overlapping coverage,
/// the first declaration wins and [`MoleculeCatalog::validate`] reports it.
#[derive(Debug, Clone)]
pub struct MoleculeCatalog {
    /// Molecules in declaration order
    entries: Vec<Molecule>,
    /// Id to arena index
    by_id: IndexMap<String, usize>,
    /// Raw tool name to arena index of its owning molecule
    coverage: IndexMap<String, usize>,
}

impl MoleculeCatalog {
    /// Build a catalog from molecules in declaration order
    #[must_use]
    pub fn new(molecules: Vec<Molecule>) -> Self {
        let mut by_id = IndexMap::new();
        let mut coverage: IndexMap<String, usize> = IndexMap::new();

        for (index, molecule) in molecules.iter().enumerate() {
            if by_id.contains_key(molecule.id.as_str()) {
                tracing::warn!(
                    id = %molecule.id,
                    "duplicate catalog id, keeping first declaration"
                );
            } else {
                by_id.insert(molecule.id.as_str().to_string(), index);
            }

            for tool in &molecule.underlying_tools {
                if let Some(&owner) = coverage.get(tool.as_str()) {
                    tracing::warn!(
                        tool = %tool,
                        owner = %molecules[owner].id,
                        shadowed = %molecule.id,
                        "overlapping catalog coverage, keeping first declaration"
                    );
                } else {
                    coverage.insert(tool.clone(), index);
                }
            }
        }

        tracing::debug!(
            molecules = molecules.len(),
            tools = coverage.len(),
            "molecule catalog loaded"
        );

        Self {
            entries: molecules,
            by_id,
            coverage,
        }
    }

    /// The process-wide standard catalog, built on first use
    #[must_use]
    pub fn standard() -> &'static MoleculeCatalog {
        &STANDARD
    }

    /// Fresh copies of every molecule, in catalog order
    #[must_use]
    pub fn all(&self) -> Vec<Molecule> {
        self.entries.clone()
    }

    /// Iterate molecules in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Molecule> {
        self.entries.iter()
    }

    /// Look up a molecule by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Molecule> {
        self.by_id.get(id).map(|&index| &self.entries[index])
    }

    /// The molecule that subsumes a raw tool, if any
    #[must_use]
    pub fn covers_tool(&self, tool_name: &str) -> Option<&Molecule> {
        self.coverage
            .get(tool_name)
            .map(|&index| &self.entries[index])
    }

    /// Check if an id is taken
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Raw tool names covered by the catalog, in declaration order
    pub fn covered_tools(&self) -> impl Iterator<Item = &str> {
        self.coverage.keys().map(String::as_str)
    }

    /// Number of molecules
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report authoring defects
    ///
    /// # Errors
    ///
    /// Returns every defect found
    pub fn validate(&self) -> Result<(), Vec<CatalogError>> {
        CatalogValidator::new().validate(&self.entries)
    }
}

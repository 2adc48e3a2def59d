//! Molecule identifiers.
//!
//! An id is both the display token (`Name (id)`) and the lookup key, so it
//! is kept as the exact string it was created from.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Molecule identifier - unique across one emitted molecule set
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoleculeId(String);

impl MoleculeId {
    /// Create a new id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for MoleculeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MoleculeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MoleculeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for MoleculeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MoleculeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for MoleculeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MoleculeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_molecule_id_display() {
        let id = MoleculeId::new("file_explorer");
        assert_eq!(format!("{}", id), "file_explorer");
        assert_eq!(id.as_str(), "file_explorer");
    }

    #[test]
    fn test_molecule_id_compares_with_str() {
        let id = MoleculeId::from("custom_search");
        assert_eq!(id, "custom_search");
        assert!(id != "other");
    }

    #[test]
    fn test_molecule_id_borrow_lookup() {
        let mut set = HashSet::new();
        set.insert(MoleculeId::from("code_editor"));
        assert!(set.contains("code_editor"));
    }

    #[test]
    fn test_molecule_id_serializes_transparently() {
        let id = MoleculeId::from("git_workspace");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"git_workspace\"");
    }
}

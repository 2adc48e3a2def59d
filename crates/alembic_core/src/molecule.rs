//! Molecules: agent-facing capability units wrapping raw tools.

use crate::error::{CoreError, CoreResult};
use crate::id::MoleculeId;
use crate::schema::{ParameterSchema, Translation};
use crate::tier::Tier;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Parameter schema of a molecule together with its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeParameters {
    /// Schema in the parameter algebra
    pub schema: ParameterSchema,
    /// Validator and parameter listing derived from `schema`
    pub translation: Translation,
}

/// A composite capability unit offered to an agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Molecule {
    /// Unique id, used as display token and lookup key
    pub id: MoleculeId,
    /// Display title
    pub name: String,
    /// What the molecule does
    pub description: String,
    /// One-line "when to use" guidance
    pub semantics: String,
    /// Safety classification
    pub tier: Tier,
    /// Raw tool names composed by this molecule, never empty
    pub underlying_tools: IndexSet<String>,
    /// Parameters, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<MoleculeParameters>,
}

impl Molecule {
    /// Create a molecule composing the given raw tools
    ///
    /// Description and semantics start empty and the tier starts at
    /// [`Tier::RequiresConfirmation`].
    ///
    /// # Errors
    ///
    /// Returns error if `underlying_tools` is empty
    pub fn new<I, S>(
        id: impl Into<MoleculeId>,
        name: impl Into<String>,
        underlying_tools: I,
    ) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = id.into();
        let underlying_tools: IndexSet<String> =
            underlying_tools.into_iter().map(Into::into).collect();
        if underlying_tools.is_empty() {
            return Err(CoreError::Validation {
                field: format!("{}.underlying_tools", id),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            description: String::new(),
            semantics: String::new(),
            tier: Tier::RequiresConfirmation,
            underlying_tools,
            parameters: None,
        })
    }

    /// Set description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set "when to use" guidance
    #[must_use]
    pub fn with_semantics(mut self, semantics: impl Into<String>) -> Self {
        self.semantics = semantics.into();
        self
    }

    /// Set tier
    #[must_use]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Set parameters
    #[must_use]
    pub fn with_parameters(mut self, parameters: MoleculeParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Check if this molecule composes the named raw tool
    #[must_use]
    pub fn covers(&self, tool_name: &str) -> bool {
        self.underlying_tools.contains(tool_name)
    }

    /// Parameter lines, empty when no parameters are known
    #[must_use]
    pub fn param_lines(&self) -> &[String] {
        self.parameters
            .as_ref()
            .map(|p| p.translation.param_lines.as_slice())
            .unwrap_or(&[])
    }
}

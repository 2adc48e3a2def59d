//! Caller-supplied context for one instruction document.

use serde::{Deserialize, Serialize};

/// Task and constraints an instruction document is rendered for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionContext {
    /// Task text, rendered verbatim
    pub task: String,
    /// Global constraints in the order they are rendered; may be empty
    #[serde(default)]
    pub constraints: Vec<String>,
}

impl InstructionContext {
    /// Create a context with no constraints
    #[must_use]
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            constraints: Vec::new(),
        }
    }

    /// Add a constraint
    #[must_use]
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    /// Replace all constraints
    #[must_use]
    pub fn with_constraints<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints = constraints.into_iter().map(Into::into).collect();
        self
    }

    /// Check if any constraints are set
    #[must_use]
    pub fn has_constraints(&self) -> bool {
        !self.constraints.is_empty()
    }
}

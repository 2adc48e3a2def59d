//! Safety tiers gating agent use of a molecule.

use serde::{Deserialize, Serialize};

/// Safety classification attached to every molecule
///
/// The tier tells the agent whether it must ask before invoking a molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Read-only, no confirmation needed
    Safe,
    /// Mutates state; confirm with the user first
    RequiresConfirmation,
    /// Irreversible or unbounded effects; only on explicit user request
    Restricted,
}

impl Tier {
    /// All tiers, least to most gated
    pub const ALL: [Tier; 3] = [Self::Safe, Self::RequiresConfirmation, Self::Restricted];

    /// Stable display label used in rendered documents
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::RequiresConfirmation => "requires confirmation",
            Self::Restricted => "restricted",
        }
    }

    /// Whether the agent must obtain confirmation before invoking
    #[must_use]
    pub const fn requires_confirmation(&self) -> bool {
        !matches!(self, Self::Safe)
    }

    /// One-line operating guidance for this tier
    #[must_use]
    pub const fn guidance(&self) -> &'static str {
        match self {
            Self::Safe => "Read-only; invoke without asking for confirmation.",
            Self::RequiresConfirmation => "Confirm with the user before invoking.",
            Self::Restricted => {
                "Invoke only when the user has explicitly asked for this exact action."
            }
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_labels() {
        assert_eq!(Tier::Safe.to_string(), "safe");
        assert_eq!(Tier::RequiresConfirmation.to_string(), "requires confirmation");
        assert_eq!(Tier::Restricted.to_string(), "restricted");
    }

    #[test]
    fn test_tier_gating() {
        assert!(!Tier::Safe.requires_confirmation());
        assert!(Tier::RequiresConfirmation.requires_confirmation());
        assert!(Tier::Restricted.requires_confirmation());
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Safe < Tier::RequiresConfirmation);
        assert!(Tier::RequiresConfirmation < Tier::Restricted);
        assert_eq!(Tier::ALL.len(), 3);
    }

    #[test]
    fn test_tier_serde() {
        let json = serde_json::to_string(&Tier::RequiresConfirmation).unwrap();
        assert_eq!(json, "\"requires_confirmation\"");
        let back: Tier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tier::RequiresConfirmation);
    }
}

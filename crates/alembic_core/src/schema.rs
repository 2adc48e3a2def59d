//! Minimal parameter schema algebra.
//!
//! Raw tools carry JSON Schema fragments of wildly varying quality. They are
//! lifted into [`ParameterSchema`] here; anything not understood becomes
//! [`SchemaKind::Unspecified`] instead of an error.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Constraints carried by string nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringConstraints {
    /// Minimum length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Regular expression the value must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl StringConstraints {
    /// Check if no constraint is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_length.is_none() && self.max_length.is_none() && self.pattern.is_none()
    }
}

/// Shape of a schema node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaKind {
    /// String with optional constraints
    String(StringConstraints),
    /// Any number
    Number,
    /// Integral number
    Integer,
    /// Boolean
    Boolean,
    /// Object with properties in declared order
    Object {
        /// Properties in declaration order
        properties: IndexMap<String, ParameterSchema>,
        /// Names listed as required
        required: IndexSet<String>,
    },
    /// Homogeneous array
    Array {
        /// Element schema
        items: Box<ParameterSchema>,
    },
    /// JSON null
    Null,
    /// Missing or unrecognized type information
    Unspecified,
}

impl SchemaKind {
    /// JSON Schema type keyword, `"any"` for unspecified nodes
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Object { .. } => "object",
            Self::Array { .. } => "array",
            Self::Null => "null",
            Self::Unspecified => "any",
        }
    }
}

/// A node in the parameter schema algebra
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSchema {
    /// Node shape
    pub kind: SchemaKind,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the node may be omitted by its parent
    #[serde(default)]
    pub optional: bool,
}

impl ParameterSchema {
    /// Create a required node of the given kind
    #[must_use]
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            description: None,
            optional: false,
        }
    }

    /// Create an unspecified node that accepts anything
    #[must_use]
    pub fn unspecified() -> Self {
        Self::new(SchemaKind::Unspecified)
    }

    /// Create an unconstrained string node
    #[must_use]
    pub fn string() -> Self {
        Self::new(SchemaKind::String(StringConstraints::default()))
    }

    /// Set description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark node optional
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Check if the node carries no type information
    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        matches!(self.kind, SchemaKind::Unspecified)
    }

    /// Lift a JSON Schema fragment into the algebra
    ///
    /// Never fails. Non-object fragments, missing `type` and unknown type
    /// names all resolve to [`SchemaKind::Unspecified`]. A `type` array
    /// resolves to its first non-null member.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(node) = value.as_object() else {
            return Self::unspecified();
        };

        let kind = match resolve_type(node.get("type")) {
            Some("string") => SchemaKind::String(StringConstraints {
                min_length: node.get("minLength").and_then(Value::as_u64),
                max_length: node.get("maxLength").and_then(Value::as_u64),
                pattern: node
                    .get("pattern")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
            Some("number") => SchemaKind::Number,
            Some("integer") => SchemaKind::Integer,
            Some("boolean") => SchemaKind::Boolean,
            Some("null") => SchemaKind::Null,
            Some("object") => {
                let required: IndexSet<String> = node
                    .get("required")
                    .and_then(Value::as_array)
                    .map(|names| {
                        names
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();

                let properties = node
                    .get("properties")
                    .and_then(Value::as_object)
                    .map(|props| {
                        props
                            .iter()
                            .map(|(name, child)| {
                                let mut schema = Self::from_json(child);
                                schema.optional = !required.contains(name);
                                (name.clone(), schema)
                            })
                            .collect()
                    })
                    .unwrap_or_default();

                SchemaKind::Object {
                    properties,
                    required,
                }
            }
            Some("array") => SchemaKind::Array {
                items: Box::new(
                    node.get("items")
                        .map(Self::from_json)
                        .unwrap_or_else(Self::unspecified),
                ),
            },
            _ => SchemaKind::Unspecified,
        };

        Self {
            kind,
            description: node
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            optional: false,
        }
    }
}

impl Default for ParameterSchema {
    fn default() -> Self {
        Self::unspecified()
    }
}

/// Resolve the `type` keyword, which may be a string or an array of strings
fn resolve_type(value: Option<&Value>) -> Option<&str> {
    match value? {
        Value::String(name) => Some(name.as_str()),
        Value::Array(names) => {
            let mut names = names.iter().filter_map(Value::as_str);
            let first = names.clone().next()?;
            names.find(|name| *name != "null").or(Some(first))
        }
        _ => None,
    }
}

/// Output of translating one schema
///
/// Identical input always yields an identical translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// Name the validator is declared under
    pub type_name: String,
    /// Validator expression
    pub expression: String,
    /// Full validator declaration
    pub generated_code: String,
    /// Human-readable parameter listing, one entry per parameter
    pub param_lines: Vec<String>,
    /// Paths of nodes that degraded to the permissive fallback
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallbacks: Vec<String>,
}

impl Translation {
    /// Check if any node degraded during translation
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}

//! Schema translator entry point.

use crate::{expr, params};
use alembic_core::{ParameterSchema, Translation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Translator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Spaces per nesting level in generated object expressions
    pub indent: usize,
    /// Emit `.describe(..)` for nodes carrying a description
    pub describe: bool,
}

impl TranslatorConfig {
    /// Set indent width
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether descriptions are emitted
    #[must_use]
    pub fn with_describe(mut self, describe: bool) -> Self {
        self.describe = describe;
        self
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            describe: true,
        }
    }
}

/// Translator from parameter schemas to validators and parameter listings
#[derive(Debug, Clone, Default)]
pub struct SchemaTranslator {
    config: TranslatorConfig,
}

impl SchemaTranslator {
    /// Create a translator with default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator with custom config
    #[must_use]
    pub fn with_config(config: TranslatorConfig) -> Self {
        Self { config }
    }

    /// Get the config
    #[must_use]
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Translate a schema, declaring the validator as `<type_name>Schema`
    #[must_use]
    pub fn translate(&self, schema: &ParameterSchema, type_name: &str) -> Translation {
        let mut fallbacks = Vec::new();
        let expression = expr::render(schema, &self.config, &mut fallbacks);
        let generated_code = format!("export const {}Schema = {};", type_name, expression);
        let param_lines = params::render(schema, type_name);

        Translation {
            type_name: type_name.to_string(),
            expression,
            generated_code,
            param_lines,
            fallbacks,
        }
    }

    /// Translate a raw JSON Schema fragment
    #[must_use]
    pub fn translate_json(&self, schema: &Value, type_name: &str) -> Translation {
        self.translate(&ParameterSchema::from_json(schema), type_name)
    }
}

/// Translate with the default configuration
#[must_use]
pub fn translate_schema(schema: &ParameterSchema, type_name: &str) -> Translation {
    SchemaTranslator::new().translate(schema, type_name)
}

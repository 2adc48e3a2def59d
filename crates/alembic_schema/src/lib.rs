//! ALEMBIC Schema Translation
//!
//! Turns a parameter schema into a validator expression and a flat,
//! human-readable parameter listing. Translation never fails: anything
//! unsupported degrades to a permissive fallback and is reported through
//! [`Translation::fallbacks`](alembic_core::Translation::fallbacks).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod expr;
pub mod params;
mod pattern;
pub mod translate;

pub use translate::{translate_schema, SchemaTranslator, TranslatorConfig};

/// Quote a string as a JSON string literal
pub(crate) fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

//! Human-readable parameter listings.
//!
//! One line per parameter: `"<path>": { "type": "<t>", ... } (<tags>)`.
//! Nested properties follow their parent with dotted paths, so the listing
//! stays flat and in declaration order.

use crate::pattern;
use crate::quote;
use alembic_core::{ParameterSchema, SchemaKind};

/// Render parameter lines for a schema
///
/// An object root lists its properties; any other root is listed as a
/// single parameter named `type_name`.
#[must_use]
pub fn render(schema: &ParameterSchema, type_name: &str) -> Vec<String> {
    let mut lines = Vec::new();
    match &schema.kind {
        SchemaKind::Object { properties, .. } => {
            for (name, child) in properties {
                describe(name, child, &mut lines);
            }
        }
        _ => describe(type_name, schema, &mut lines),
    }
    lines
}

fn describe(path: &str, node: &ParameterSchema, lines: &mut Vec<String>) {
    let mut fields = vec![field("type", quote(node.kind.type_name()))];
    match &node.kind {
        SchemaKind::String(constraints) => {
            if let Some(min) = constraints.min_length {
                fields.push(field("minLength", min.to_string()));
            }
            if let Some(max) = constraints.max_length {
                fields.push(field("maxLength", max.to_string()));
            }
            if let Some(source) = constraints
                .pattern
                .as_ref()
                .filter(|source| pattern::is_embeddable(source))
            {
                fields.push(field("pattern", quote(source)));
            }
        }
        SchemaKind::Array { items } => {
            fields.push(field("items", quote(items.kind.type_name())));
        }
        _ => {}
    }
    if let Some(description) = &node.description {
        fields.push(field("description", quote(description)));
    }

    let mut tags = vec![if node.optional { "optional" } else { "required" }];
    if node.is_unspecified() {
        tags.push("untyped");
    }

    lines.push(format!(
        "{}: {{ {} }} ({})",
        quote(path),
        fields.join(", "),
        tags.join(", ")
    ));

    match &node.kind {
        SchemaKind::Object { properties, .. } => {
            for (name, child) in properties {
                describe(&format!("{}.{}", path, name), child, lines);
            }
        }
        SchemaKind::Array { items } => {
            if let SchemaKind::Object { properties, .. } = &items.kind {
                for (name, child) in properties {
                    describe(&format!("{}[].{}", path, name), child, lines);
                }
            }
        }
        _ => {}
    }
}

fn field(key: &str, value: String) -> String {
    format!("{}: {}", quote(key), value)
}

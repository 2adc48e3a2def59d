//! Validator expression rendering.
//!
//! Expressions use the `z.*` vocabulary understood by the agent runtime.
//! Object properties are always quoted so arbitrary names stay valid.

use crate::pattern;
use crate::quote;
use crate::translate::TranslatorConfig;
use alembic_core::{ParameterSchema, SchemaKind, StringConstraints};

/// Render the validator expression for a schema
///
/// Paths of nodes that degraded are appended to `fallbacks`. The root path
/// is `$`, properties append `.name` and array items append `[]`.
#[must_use]
pub fn render(
    schema: &ParameterSchema,
    config: &TranslatorConfig,
    fallbacks: &mut Vec<String>,
) -> String {
    render_node(schema, config, 0, "$", fallbacks)
}

fn render_node(
    node: &ParameterSchema,
    config: &TranslatorConfig,
    depth: usize,
    path: &str,
    fallbacks: &mut Vec<String>,
) -> String {
    let mut out = match &node.kind {
        SchemaKind::String(constraints) => render_string(constraints, path, fallbacks),
        SchemaKind::Number => "z.number()".to_string(),
        SchemaKind::Integer => "z.number().int()".to_string(),
        SchemaKind::Boolean => "z.boolean()".to_string(),
        SchemaKind::Null => "z.null()".to_string(),
        SchemaKind::Object { properties, .. } => {
            if properties.is_empty() {
                "z.object({})".to_string()
            } else {
                let inner = " ".repeat(config.indent * (depth + 1));
                let outer = " ".repeat(config.indent * depth);
                let mut body = String::from("z.object({\n");
                for (name, child) in properties {
                    let child_path = format!("{}.{}", path, name);
                    let child_expr = render_node(child, config, depth + 1, &child_path, fallbacks);
                    body.push_str(&format!("{}{}: {},\n", inner, quote(name), child_expr));
                }
                body.push_str(&outer);
                body.push_str("})");
                body
            }
        }
        SchemaKind::Array { items } => {
            let item_path = format!("{}[]", path);
            format!(
                "z.array({})",
                render_node(items, config, depth, &item_path, fallbacks)
            )
        }
        SchemaKind::Unspecified => {
            fallbacks.push(path.to_string());
            "z.any()".to_string()
        }
    };

    if config.describe {
        if let Some(description) = &node.description {
            out.push_str(&format!(".describe({})", quote(description)));
        }
    }
    if node.optional {
        out.push_str(".optional()");
    }
    out
}

fn render_string(
    constraints: &StringConstraints,
    path: &str,
    fallbacks: &mut Vec<String>,
) -> String {
    let mut out = String::from("z.string()");
    if let Some(min) = constraints.min_length {
        out.push_str(&format!(".min({})", min));
    }
    if let Some(max) = constraints.max_length {
        out.push_str(&format!(".max({})", max));
    }
    if let Some(source) = &constraints.pattern {
        match pattern::literal_body(source) {
            Some(body) => out.push_str(&format!(".regex(/{}/)", body)),
            None => fallbacks.push(format!("{}#pattern", path)),
        }
    }
    out
}

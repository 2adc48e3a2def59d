//! Detailed per-molecule reference blocks.

use alembic_core::Molecule;

/// Render the usage reference block for one molecule
///
/// The block has no trailing newline; the caller places delimiters.
#[must_use]
pub fn molecule_reference(molecule: &Molecule) -> String {
    let tools = molecule
        .underlying_tools
        .iter()
        .map(|tool| format!("`{}`", tool))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!("# {}", molecule.name),
        format!("**ID**: `{}`", molecule.id),
        format!("**Description**: {}", molecule.description),
        format!("**When to use**: {}", molecule.semantics),
        format!(
            "**Safety tier**: {}. {}",
            molecule.tier,
            molecule.tier.guidance()
        ),
        format!("**Underlying tools**: {}", tools),
        String::new(),
    ];

    match &molecule.parameters {
        None => lines.push("**Parameters**: none declared.".to_string()),
        Some(parameters) => {
            if parameters.translation.param_lines.is_empty() {
                lines.push("**Parameters**: none.".to_string());
            } else {
                lines.push("**Parameters**:".to_string());
                lines.extend(
                    parameters
                        .translation
                        .param_lines
                        .iter()
                        .map(|line| format!("- {}", line)),
                );
            }
            lines.push(String::new());
            lines.push("**Validator**:".to_string());
            lines.push("```ts".to_string());
            lines.push(parameters.translation.generated_code.clone());
            lines.push("```".to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alembic_core::{Molecule, MoleculeParameters, ParameterSchema, Tier, Translation};

    fn bare() -> Molecule {
        Molecule::new("git_workspace", "Git Workspace", ["git_status", "git_diff"])
            .unwrap()
            .with_description("Inspect the repository")
            .with_semantics("Use to review changes")
            .with_tier(Tier::RequiresConfirmation)
    }

    #[test]
    fn test_reference_without_parameters() {
        assert_eq!(
            molecule_reference(&bare()),
            "# Git Workspace\n\
             **ID**: `git_workspace`\n\
             **Description**: Inspect the repository\n\
             **When to use**: Use to review changes\n\
             **Safety tier**: requires confirmation. Confirm with the user before invoking.\n\
             **Underlying tools**: `git_status`, `git_diff`\n\
             \n\
             **Parameters**: none declared."
        );
    }

    #[test]
    fn test_reference_with_parameters() {
        let molecule = bare().with_parameters(MoleculeParameters {
            schema: ParameterSchema::string(),
            translation: Translation {
                type_name: "GitWorkspace".to_string(),
                expression: "z.string()".to_string(),
                generated_code: "export const GitWorkspaceSchema = z.string();".to_string(),
                param_lines: vec![r#""GitWorkspace": { "type": "string" } (required)"#.to_string()],
                fallbacks: Vec::new(),
            },
        });
        let block = molecule_reference(&molecule);
        assert!(block.ends_with(
            "**Parameters**:\n\
             - \"GitWorkspace\": { \"type\": \"string\" } (required)\n\
             \n\
             **Validator**:\n\
             ```ts\n\
             export const GitWorkspaceSchema = z.string();\n\
             ```"
        ));
    }

    #[test]
    fn test_reference_empty_parameter_list() {
        let molecule = bare().with_parameters(MoleculeParameters {
            schema: ParameterSchema::string(),
            translation: Translation {
                type_name: "T".to_string(),
                expression: "z.object({})".to_string(),
                generated_code: "export const TSchema = z.object({});".to_string(),
                param_lines: Vec::new(),
                fallbacks: Vec::new(),
            },
        });
        assert!(molecule_reference(&molecule).contains("**Parameters**: none.\n"));
    }
}

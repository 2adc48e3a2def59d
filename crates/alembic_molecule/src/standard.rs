//! The hand-curated standard catalog.
//!
//! Entries are authored by hand, not derived from registry schemas. Each one
//! names the concrete raw tools it wraps; ordering here is catalog order.

use crate::naming::type_name;
use alembic_core::{Molecule, MoleculeParameters, ParameterSchema, Tier};
use alembic_schema::SchemaTranslator;
use serde_json::{json, Value};

/// Molecules of the standard catalog, in catalog order
#[must_use]
pub fn molecules() -> Vec<Molecule> {
    let translator = SchemaTranslator::new();
    vec![
        entry(
            &translator,
            "file_explorer",
            "File Explorer",
            &["list_dir", "read_file", "search_files"],
            Tier::Safe,
            "Browse directories, read file contents and search the workspace by name or content.",
            "Use before changing anything, to locate and read the files relevant to the task.",
            json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "minLength": 1,
                        "description": "Path relative to the workspace root"
                    },
                    "pattern": {
                        "type": "string",
                        "description": "Glob or text pattern; switches to search"
                    },
                    "recursive": {
                        "type": "boolean",
                        "description": "Descend into subdirectories when listing"
                    }
                },
                "required": ["path"]
            }),
        ),
        entry(
            &translator,
            "code_editor",
            "Code Editor",
            &["write_file", "edit_file", "create_directory"],
            Tier::RequiresConfirmation,
            "Create files, replace exact text spans in existing files and create directories.",
            "Use to apply a change you have already located with the file explorer.",
            json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "minLength": 1,
                        "description": "Target path relative to the workspace root"
                    },
                    "old_text": {
                        "type": "string",
                        "description": "Exact text to replace; omit to write the whole file"
                    },
                    "new_text": {
                        "type": "string",
                        "description": "Replacement text or full file content"
                    }
                },
                "required": ["path", "new_text"]
            }),
        ),
        entry(
            &translator,
            "git_workspace",
            "Git Workspace",
            &["git_status", "git_diff", "git_log", "git_commit", "git_checkout"],
            Tier::RequiresConfirmation,
            "Inspect repository state and history, commit staged work and switch branches.",
            "Use to review what changed and to record or switch work in version control.",
            json!({
                "type": "object",
                "properties": {
                    "operation": {
                        "type": "string",
                        "pattern": "^(status|diff|log|commit|checkout)$",
                        "description": "Git operation to run"
                    },
                    "message": {
                        "type": "string",
                        "minLength": 1,
                        "description": "Commit message, for commit"
                    },
                    "ref": {
                        "type": "string",
                        "description": "Branch or revision, for diff, log and checkout"
                    }
                },
                "required": ["operation"]
            }),
        ),
        entry(
            &translator,
            "web_research",
            "Web Research",
            &["web_search", "fetch_url"],
            Tier::Safe,
            "Search the web and fetch pages as readable text.",
            "Use when the task needs information that is not in the workspace.",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query; omit when fetching a known URL"
                    },
                    "url": {
                        "type": "string",
                        "pattern": "^https?://",
                        "description": "Page to fetch"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Upper bound on search results"
                    }
                }
            }),
        ),
        entry(
            &translator,
            "shell_command",
            "Shell Command",
            &["run_command"],
            Tier::Restricted,
            "Run a shell command in the workspace and capture its output.",
            "Use only for builds, tests or tools no other molecule covers.",
            json!({
                "type": "object",
                "properties": {
                    "command": {
                        "type": "string",
                        "minLength": 1,
                        "description": "Command line to execute"
                    },
                    "cwd": {
                        "type": "string",
                        "description": "Working directory relative to the workspace root"
                    },
                    "timeout_secs": {
                        "type": "integer",
                        "description": "Kill the command after this many seconds"
                    }
                },
                "required": ["command"]
            }),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn entry(
    translator: &SchemaTranslator,
    id: &str,
    name: &str,
    tools: &[&str],
    tier: Tier,
    description: &str,
    semantics: &str,
    schema: Value,
) -> Molecule {
    let schema = ParameterSchema::from_json(&schema);
    let translation = translator.translate(&schema, &type_name(id));
    Molecule::new(id, name, tools.iter().copied())
        .expect("standard catalog entries declare underlying tools")
        .with_description(description)
        .with_semantics(semantics)
        .with_tier(tier)
        .with_parameters(MoleculeParameters {
            schema,
            translation,
        })
}

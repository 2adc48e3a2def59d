//! Loading of tool listings, schemas and instruction context from disk.

use alembic_core::{InstructionContext, RawTool, RegistryListing};
use color_eyre::eyre::{bail, Result, WrapErr};
use std::fs;
use std::path::Path;

/// Load a registry listing or bare tool array
pub fn load_listing(path: &Path) -> Result<RegistryListing> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("reading tool listing {}", path.display()))?;
    RegistryListing::from_json(&text)
        .wrap_err_with(|| format!("decoding tool listing {}", path.display()))
}

/// Raw tools from an optional listing, optionally filtered by server category
///
/// No path means no raw tools: the catalog alone is used.
pub fn load_tools(path: Option<&Path>, category: Option<&str>) -> Result<Vec<RawTool>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let listing = load_listing(path)?;
    let listing = match category {
        Some(category) => listing.filter_category(category),
        None => listing,
    };
    tracing::info!(
        servers = listing.servers.len(),
        tools = listing.tool_count(),
        path = %path.display(),
        "loaded tool listing"
    );
    Ok(listing.tools())
}

/// Build the instruction context from a file and/or flags
///
/// `task` replaces the file's task; `constraints` are appended after the
/// file's constraints.
pub fn load_context(
    path: Option<&Path>,
    task: Option<String>,
    constraints: Vec<String>,
) -> Result<InstructionContext> {
    let mut context = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("reading context {}", path.display()))?;
            serde_json::from_str::<InstructionContext>(&text)
                .wrap_err_with(|| format!("decoding context {}", path.display()))?
        }
        None => match &task {
            Some(_) => InstructionContext::default(),
            None => bail!("a task is required: pass --task or --context"),
        },
    };

    if let Some(task) = task {
        context.task = task;
    }
    context.constraints.extend(constraints);
    Ok(context)
}

/// Load a JSON Schema document
pub fn load_schema(path: &Path) -> Result<serde_json::Value> {
    let text =
        fs::read_to_string(path).wrap_err_with(|| format!("reading schema {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("decoding schema {}", path.display()))
}

//! ALEMBIC CLI
//!
//! Synthesizes molecules from tool listings and renders agent instruction
//! documents. Artifacts go to stdout or `--output`; logs go to stderr.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod input;
mod logging;

use alembic_compose::{compose_instructions, document_digest};
use alembic_core::Molecule;
use alembic_molecule::{MoleculeCatalog, MoleculeSynthesizer, SynthesisReport};
use alembic_schema::SchemaTranslator;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "alembic")]
#[command(about = "ALEMBIC - Molecule synthesis and agent instruction composition")]
#[command(long_about = None)]
struct Cli {
    /// Log filter directives (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the agent instruction document
    Compose {
        /// Tool listing (registry listing or bare tool array)
        #[arg(short, long)]
        tools: Option<PathBuf>,
        /// Only use servers in this category
        #[arg(long)]
        category: Option<String>,
        /// Task text
        #[arg(long)]
        task: Option<String>,
        /// Global constraint, repeatable
        #[arg(short = 'c', long = "constraint")]
        constraints: Vec<String>,
        /// Context file with task and constraints
        #[arg(long)]
        context: Option<PathBuf>,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the document digest to stderr
        #[arg(long)]
        digest: bool,
    },
    /// List the synthesized molecule set
    Molecules {
        /// Tool listing (registry listing or bare tool array)
        #[arg(short, long)]
        tools: Option<PathBuf>,
        /// Only use servers in this category
        #[arg(long)]
        category: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Translate a JSON Schema into a validator expression
    Translate {
        /// JSON Schema file
        #[arg(short, long)]
        schema: PathBuf,
        /// Type name for the generated declaration
        #[arg(short, long, default_value = "Input")]
        name: String,
    },
    /// Show the standard catalog
    Catalog {
        /// Check catalog invariants and fail on defects
        #[arg(long)]
        validate: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    match cli.command {
        Commands::Compose {
            tools,
            category,
            task,
            constraints,
            context,
            output,
            digest,
        } => {
            let raw = input::load_tools(tools.as_deref(), category.as_deref())?;
            let context = input::load_context(context.as_deref(), task, constraints)?;
            let report = MoleculeSynthesizer::standard().synthesize_with_report(&raw);
            log_report(&report);

            let document = compose_instructions(&report.molecules, &context);
            match output {
                Some(path) => {
                    std::fs::write(&path, &document)
                        .wrap_err_with(|| format!("writing {}", path.display()))?;
                    tracing::info!(
                        path = %path.display(),
                        bytes = document.len(),
                        "instruction document written"
                    );
                }
                None => print!("{}", document),
            }
            if digest {
                eprintln!("blake3:{}", document_digest(&document));
            }
            Ok(())
        }
        Commands::Molecules {
            tools,
            category,
            json,
        } => {
            let raw = input::load_tools(tools.as_deref(), category.as_deref())?;
            let report = MoleculeSynthesizer::standard().synthesize_with_report(&raw);
            log_report(&report);

            if json {
                println!("{}", serde_json::to_string_pretty(&report.molecules)?);
            } else {
                print!("{}", render_table(&report.molecules));
            }
            Ok(())
        }
        Commands::Translate { schema, name } => {
            let schema = input::load_schema(&schema)?;
            let translation = SchemaTranslator::new().translate_json(&schema, &name);
            for path in &translation.fallbacks {
                tracing::warn!(path = %path, "schema degraded to permissive fallback");
            }

            println!("{}", translation.generated_code);
            if !translation.param_lines.is_empty() {
                println!();
                for line in &translation.param_lines {
                    println!("- {}", line);
                }
            }
            Ok(())
        }
        Commands::Catalog { validate } => {
            let catalog = MoleculeCatalog::standard();
            if validate {
                if let Err(errors) = catalog.validate() {
                    for error in &errors {
                        eprintln!("error: {}", error);
                    }
                    return Err(eyre!("standard catalog has {} defect(s)", errors.len()));
                }
                tracing::info!(molecules = catalog.len(), "standard catalog is valid");
            }
            print!("{}", render_table(&catalog.all()));
            Ok(())
        }
    }
}

fn log_report(report: &SynthesisReport) {
    tracing::info!(
        molecules = report.molecules.len(),
        synthesized = report.synthesized.len(),
        covered = report.covered.len(),
        duplicates = report.duplicates.len(),
        unnamed = report.unnamed,
        "molecule set synthesized"
    );
    for id in &report.degraded {
        tracing::warn!(molecule = %id, "parameter schema only partially translated");
    }
}

/// One tab-separated row per molecule: id, tier, name, underlying tools
fn render_table(molecules: &[Molecule]) -> String {
    let mut out = String::new();
    for molecule in molecules {
        let tools: Vec<&str> = molecule.underlying_tools.iter().map(String::as_str).collect();
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            molecule.id,
            molecule.tier,
            molecule.name,
            tools.join(",")
        ));
    }
    out
}

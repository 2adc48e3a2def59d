//! Molecule synthesis from raw registry tools.
//!
//! The emitted set is the full catalog, in catalog order, followed by one
//! ad-hoc molecule per uncovered raw tool in input order. A raw tool name
//! is composed by at most one emitted molecule and every id is unique.

use crate::catalog::MoleculeCatalog;
use crate::naming::{title_case, type_name};
use alembic_core::{Molecule, MoleculeId, MoleculeParameters, RawTool, Tier};
use alembic_schema::SchemaTranslator;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Defaults applied to ad-hoc molecules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisDefaults {
    /// "When to use" guidance
    pub semantics: String,
    /// Safety tier
    pub tier: Tier,
}

impl Default for SynthesisDefaults {
    fn default() -> Self {
        Self {
            semantics: "Use this tool directly for its stated purpose.".to_string(),
            tier: Tier::RequiresConfirmation,
        }
    }
}

/// A raw tool skipped because a catalog molecule already composes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveredTool {
    /// Raw tool name
    pub tool: String,
    /// Owning catalog molecule
    pub molecule: MoleculeId,
}

/// Result of a synthesis run with bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisReport {
    /// Emitted molecules
    pub molecules: Vec<Molecule>,
    /// Raw tools already covered by the catalog
    pub covered: Vec<CoveredTool>,
    /// Ids of ad-hoc molecules, in emission order
    pub synthesized: Vec<MoleculeId>,
    /// Raw tool names seen again after their first occurrence
    pub duplicates: Vec<String>,
    /// Raw tools skipped for having a blank name
    pub unnamed: usize,
    /// Ad-hoc molecules whose schema degraded during translation
    pub degraded: Vec<MoleculeId>,
}

/// Synthesizer reconciling raw tools against a catalog
#[derive(Debug, Clone)]
pub struct MoleculeSynthesizer<'a> {
    catalog: &'a MoleculeCatalog,
    translator: SchemaTranslator,
    defaults: SynthesisDefaults,
}

impl<'a> MoleculeSynthesizer<'a> {
    /// Create a synthesizer over a catalog
    #[must_use]
    pub fn new(catalog: &'a MoleculeCatalog) -> Self {
        Self {
            catalog,
            translator: SchemaTranslator::new(),
            defaults: SynthesisDefaults::default(),
        }
    }

    /// Set translator
    #[must_use]
    pub fn with_translator(mut self, translator: SchemaTranslator) -> Self {
        self.translator = translator;
        self
    }

    /// Set ad-hoc defaults
    #[must_use]
    pub fn with_defaults(mut self, defaults: SynthesisDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Produce the ordered molecule set for a list of raw tools
    #[must_use]
    pub fn synthesize(&self, raw_tools: &[RawTool]) -> Vec<Molecule> {
        self.synthesize_with_report(raw_tools).molecules
    }

    /// Produce the molecule set along with what happened to each raw tool
    #[must_use]
    pub fn synthesize_with_report(&self, raw_tools: &[RawTool]) -> SynthesisReport {
        let mut report = SynthesisReport {
            molecules: self.catalog.all(),
            ..SynthesisReport::default()
        };
        let mut taken: HashSet<String> = report
            .molecules
            .iter()
            .map(|m| m.id.as_str().to_string())
            .collect();
        let mut wrapped: HashSet<&str> = HashSet::new();

        for tool in raw_tools {
            if tool.name.trim().is_empty() {
                tracing::warn!("skipping raw tool with a blank name");
                report.unnamed += 1;
                continue;
            }

            if let Some(owner) = self.catalog.covers_tool(&tool.name) {
                tracing::debug!(
                    tool = %tool.name,
                    molecule = %owner.id,
                    "raw tool covered by catalog"
                );
                report.covered.push(CoveredTool {
                    tool: tool.name.clone(),
                    molecule: owner.id.clone(),
                });
                continue;
            }

            if !wrapped.insert(tool.name.as_str()) {
                tracing::debug!(tool = %tool.name, "duplicate raw tool, keeping first occurrence");
                report.duplicates.push(tool.name.clone());
                continue;
            }

            let id = unique_id(&tool.name, &taken);
            taken.insert(id.clone());
            let molecule = self.ad_hoc(tool, MoleculeId::new(id));

            if let Some(parameters) = &molecule.parameters {
                if parameters.translation.is_degraded() {
                    tracing::debug!(
                        tool = %tool.name,
                        fallbacks = ?parameters.translation.fallbacks,
                        "schema degraded to permissive fallback"
                    );
                    report.degraded.push(molecule.id.clone());
                }
            }

            tracing::debug!(tool = %tool.name, id = %molecule.id, "synthesized ad-hoc molecule");
            report.synthesized.push(molecule.id.clone());
            report.molecules.push(molecule);
        }

        tracing::debug!(
            raw_tools = raw_tools.len(),
            catalog = self.catalog.len(),
            synthesized = report.synthesized.len(),
            covered = report.covered.len(),
            "synthesis complete"
        );
        report
    }

    fn ad_hoc(&self, tool: &RawTool, id: MoleculeId) -> Molecule {
        let schema = tool.parameter_schema();
        let translation = self.translator.translate(&schema, &type_name(&tool.name));
        Molecule {
            id,
            name: title_case(&tool.name),
            description: tool.description.clone(),
            semantics: self.defaults.semantics.clone(),
            tier: self.defaults.tier,
            underlying_tools: IndexSet::from([tool.name.clone()]),
            parameters: Some(MoleculeParameters {
                schema,
                translation,
            }),
        }
    }
}

impl MoleculeSynthesizer<'static> {
    /// Synthesizer over the standard catalog
    #[must_use]
    pub fn standard() -> Self {
        Self::new(MoleculeCatalog::standard())
    }
}

/// Synthesize against the standard catalog with default settings
#[must_use]
pub fn synthesize_molecules(raw_tools: &[RawTool]) -> Vec<Molecule> {
    MoleculeSynthesizer::standard().synthesize(raw_tools)
}

/// First of `base`, `base_2`, `base_3`, ... not yet taken
fn unique_id(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{}_{}", base, n))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{CatalogValidator, ValidationRule};
    use alembic_core::SchemaKind;
    use proptest::prelude::*;
    use serde_json::json;

    fn custom_search() -> RawTool {
        RawTool::new("custom_search", "Search the custom database").with_input_schema(json!({
            "type": "object",
            "properties": { "query": { "type": "string" } },
            "required": ["query"]
        }))
    }

    fn catalog_ids() -> Vec<String> {
        MoleculeCatalog::standard()
            .iter()
            .map(|m| m.id.to_string())
            .collect()
    }

    #[test]
    fn test_empty_input_returns_full_catalog() {
        let molecules = synthesize_molecules(&[]);
        assert!(!molecules.is_empty());
        assert_eq!(molecules, MoleculeCatalog::standard().all());
    }

    #[test]
    fn test_scenario_custom_search_and_covered_read_file() {
        let tools = vec![
            custom_search(),
            RawTool::new("read_file", "Read file").with_input_schema(json!({})),
        ];
        let report = MoleculeSynthesizer::standard().synthesize_with_report(&tools);

        let catalog_len = MoleculeCatalog::standard().len();
        assert_eq!(report.molecules.len(), catalog_len + 1);
        let ids: Vec<String> = report.molecules.iter().map(|m| m.id.to_string()).collect();
        assert_eq!(&ids[..catalog_len], catalog_ids().as_slice());
        assert_eq!(ids[catalog_len], "custom_search");
        assert!(!ids.contains(&"read_file".to_string()));

        assert_eq!(report.synthesized, vec![MoleculeId::from("custom_search")]);
        assert_eq!(
            report.covered,
            vec![CoveredTool {
                tool: "read_file".to_string(),
                molecule: MoleculeId::from("file_explorer"),
            }]
        );
        let explorer_count = report
            .molecules
            .iter()
            .filter(|m| m.id == "file_explorer")
            .count();
        assert_eq!(explorer_count, 1);
    }

    #[test]
    fn test_ad_hoc_molecule_fields() {
        let molecules = synthesize_molecules(&[custom_search()]);
        let molecule = molecules.last().unwrap();
        assert_eq!(molecule.id, "custom_search");
        assert_eq!(molecule.name, "Custom Search");
        assert_eq!(molecule.description, "Search the custom database");
        assert_eq!(molecule.semantics, SynthesisDefaults::default().semantics);
        assert_eq!(molecule.tier, Tier::RequiresConfirmation);
        assert_eq!(
            molecule.underlying_tools.iter().collect::<Vec<_>>(),
            vec!["custom_search"]
        );
        assert_eq!(
            molecule.param_lines(),
            &[r#""query": { "type": "string" } (required)"#.to_string()]
        );
        let parameters = molecule.parameters.as_ref().unwrap();
        assert!(matches!(parameters.schema.kind, SchemaKind::Object { .. }));
        assert!(parameters
            .translation
            .generated_code
            .starts_with("export const CustomSearchSchema = "));
    }

    #[test]
    fn test_title_cased_name() {
        let molecules = synthesize_molecules(&[RawTool::new("git_status_check", "Check status")]);
        assert_eq!(molecules.last().unwrap().name, "Git Status Check");
    }

    #[test]
    fn test_untyped_schema_still_yields_molecule() {
        let report = MoleculeSynthesizer::standard()
            .synthesize_with_report(&[RawTool::new("mystery", "Does things")]);
        let molecule = report.molecules.last().unwrap();
        assert_eq!(molecule.id, "mystery");
        let parameters = molecule.parameters.as_ref().unwrap();
        assert_eq!(parameters.translation.expression, "z.any()");
        assert_eq!(report.degraded, vec![MoleculeId::from("mystery")]);
    }

    #[test]
    fn test_input_order_preserved() {
        let tools = vec![
            RawTool::new("zeta", ""),
            RawTool::new("write_file", ""),
            RawTool::new("alpha", ""),
        ];
        let synthesized = MoleculeSynthesizer::standard()
            .synthesize_with_report(&tools)
            .synthesized;
        assert_eq!(synthesized, vec![MoleculeId::from("zeta"), MoleculeId::from("alpha")]);
    }

    #[test]
    fn test_duplicate_raw_tools_wrapped_once() {
        let tools = vec![custom_search(), custom_search()];
        let report = MoleculeSynthesizer::standard().synthesize_with_report(&tools);
        assert_eq!(report.synthesized.len(), 1);
        assert_eq!(report.duplicates, vec!["custom_search"]);
    }

    #[test]
    fn test_id_collision_with_catalog_gets_suffix() {
        let tool = RawTool::new("code_editor", "A raw tool named like a molecule");
        let report = MoleculeSynthesizer::standard().synthesize_with_report(&[tool]);
        let molecule = report.molecules.last().unwrap();
        assert_eq!(molecule.id, "code_editor_2");
        assert_eq!(molecule.name, "Code Editor");
        assert!(molecule.covers("code_editor"));
    }

    #[test]
    fn test_blank_names_skipped() {
        let report = MoleculeSynthesizer::standard()
            .synthesize_with_report(&[RawTool::new("  ", "blank")]);
        assert_eq!(report.unnamed, 1);
        assert_eq!(report.molecules.len(), MoleculeCatalog::standard().len());
    }

    #[test]
    fn test_custom_catalog_and_defaults() {
        let catalog = MoleculeCatalog::new(vec![
            Molecule::new("pair", "Pair", ["a", "b"]).unwrap(),
        ]);
        let synthesizer = MoleculeSynthesizer::new(&catalog).with_defaults(SynthesisDefaults {
            semantics: "Custom".to_string(),
            tier: Tier::Restricted,
        });
        let molecules = synthesizer.synthesize(&[RawTool::new("a", ""), RawTool::new("c", "")]);
        assert_eq!(molecules.len(), 2);
        assert_eq!(molecules[1].id, "c");
        assert_eq!(molecules[1].tier, Tier::Restricted);
        assert_eq!(molecules[1].semantics, "Custom");
    }

    #[test]
    fn test_unique_id() {
        let taken: HashSet<String> = ["x", "x_2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(unique_id("y", &taken), "y");
        assert_eq!(unique_id("x", &taken), "x_3");
    }

    fn arb_tool_names() -> impl Strategy<Value = Vec<String>> {
        let pool = vec![
            "read_file", "list_dir", "run_command", "file_explorer", "custom_search",
            "git_status_check", "web_search", "alpha", "alpha_2", "beta",
        ];
        proptest::collection::vec(proptest::sample::select(pool), 0..12)
            .prop_map(|names| names.into_iter().map(str::to_string).collect())
    }

    proptest! {
        #[test]
        fn prop_emitted_set_is_consistent(names in arb_tool_names()) {
            let tools: Vec<RawTool> = names.iter().map(|n| RawTool::new(n.clone(), "")).collect();
            let molecules = synthesize_molecules(&tools);

            let ids: Vec<String> = molecules.iter().map(|m| m.id.to_string()).collect();
            let expected_ids = catalog_ids();
            prop_assert_eq!(&ids[..expected_ids.len()], expected_ids.as_slice());

            let validator = CatalogValidator::new().with_rules(vec![
                ValidationRule::UniqueIds,
                ValidationRule::NonEmptyTools,
                ValidationRule::DisjointCoverage,
            ]);
            prop_assert!(validator.validate(&molecules).is_ok());

            for name in &names {
                let owners = molecules.iter().filter(|m| m.covers(name)).count();
                prop_assert_eq!(owners, 1);
            }
            prop_assert_eq!(synthesize_molecules(&tools), molecules);
        }
    }
}

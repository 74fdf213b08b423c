//! Generation-pass hooks of the BOAT Swift 5 generator.
//!
//! The host code-generation framework drives a run through these hooks:
//! options are processed first, models are post-processed as a whole once
//! they are all built, field types are declared while templates render, and
//! the run closes with a console banner.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::flatten::{Flattened, Flattener};
use crate::swift::{BoatSwift5Types, TypeDeclaration};
use boat_swift_model::{Model, ModelGraph, TypeDescriptor, validate_graph};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

const BANNER_WIDTH: usize = 80;

/// A template rendered once per run into a fixed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportingFile {
    /// Template name.
    pub template_file: String,
    /// Output folder.
    pub folder: String,
    /// Output file name.
    pub destination_filename: String,
}

impl SupportingFile {
    /// Creates a new supporting file entry.
    #[must_use]
    pub fn new(
        template_file: impl Into<String>,
        folder: impl Into<String>,
        destination_filename: impl Into<String>,
    ) -> Self {
        Self {
            template_file: template_file.into(),
            folder: folder.into(),
            destination_filename: destination_filename.into(),
        }
    }
}

/// Options handed to the template renderer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedOptions {
    /// Template variables.
    pub additional_properties: BTreeMap<String, Value>,
    /// Supporting files to render.
    pub supporting_files: Vec<SupportingFile>,
}

/// Declared type of one model field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    /// Field name.
    pub name: String,
    /// Swift type.
    pub declaration: String,
    /// Whether the field is required.
    pub required: bool,
}

/// The BOAT Swift 5 generator.
pub struct Generator {
    config: GeneratorConfig,
    types: BoatSwift5Types,
    processed: Option<ModelGraph>,
}

impl Generator {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            types: BoatSwift5Types,
            processed: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the template variables and supporting files for this run.
    #[must_use]
    pub fn process_opts(&self) -> ProcessedOptions {
        let mut opts = ProcessedOptions::default();
        opts.additional_properties.insert(
            "useDBSDataProvider".to_string(),
            Value::Bool(self.config.uses_dbs_data_provider()),
        );
        opts.additional_properties.insert(
            "library".to_string(),
            Value::String(self.config.library().to_string()),
        );
        opts.additional_properties.insert(
            "projectName".to_string(),
            Value::String(self.config.project_name().to_string()),
        );
        opts.supporting_files.push(SupportingFile::new(
            "AnyCodable.swift.mustache",
            self.config.source_folder(),
            "AnyCodable.swift",
        ));
        opts
    }

    /// Declares the Swift type of a field.
    #[must_use]
    pub fn type_declaration(&self, ty: &TypeDescriptor) -> String {
        self.types.type_declaration(ty)
    }

    /// Declares every field of `model`, in field order.
    #[must_use]
    pub fn field_declarations(&self, model: &Model) -> Vec<FieldDeclaration> {
        model
            .fields
            .iter()
            .map(|field| FieldDeclaration {
                name: field.name.clone(),
                declaration: self.type_declaration(&field.type_descriptor),
                required: model.required_field_names.contains(&field.name),
            })
            .collect()
    }

    /// Checks `graph` strictly before post-processing.
    ///
    /// Dangling ancestors, unknown references and required-set mismatches are
    /// tolerated by [`Generator::post_process_all_models`]; this turns them
    /// into errors.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` for the first problem found.
    pub fn validate(&self, graph: &ModelGraph) -> Result<(), CodegenError> {
        validate_graph(graph)?;
        Ok(())
    }

    /// Post-processes the complete model graph by flattening allOf
    /// inheritance into every model.
    ///
    /// The flattened graph is kept for [`Generator::post_process`].
    ///
    /// # Errors
    /// Returns `CodegenError::CyclicInheritance` if the ancestry contains a
    /// cycle, in which case nothing should be emitted.
    pub fn post_process_all_models(
        &mut self,
        graph: &ModelGraph,
    ) -> Result<Flattened, CodegenError> {
        let flattened = Flattener::new(graph).flatten()?;
        tracing::info!(
            "Flattened {} models ({} dangling ancestors, {} field conflicts)",
            flattened.graph.len(),
            flattened.report.dangling.len(),
            flattened.report.conflicts.len()
        );
        self.processed = Some(flattened.graph.clone());
        Ok(flattened)
    }

    /// Returns the closing console banner.
    #[must_use]
    pub fn post_process(&self) -> String {
        let rule = "#".repeat(BANNER_WIDTH);
        let mut lines = vec![
            rule.clone(),
            banner_line("Thanks for using BOAT Swift OpenAPI Generator."),
        ];
        match &self.processed {
            Some(graph) => {
                lines.push(banner_line(&format!("Post processed {} models:", graph.len())));
                for model in graph.models() {
                    lines.push(banner_line(&format!(
                        "  {} ({} fields)",
                        model.name,
                        model.fields.len()
                    )));
                }
            }
            None => lines.push(banner_line("No models were post processed.")),
        }
        lines.push(rule);
        lines.join("\n")
    }
}

fn banner_line(text: &str) -> String {
    format!("# {:<width$}#", text, width = BANNER_WIDTH - 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boat_swift_model::{Field, PrimitiveType, SchemaError};

    fn generator() -> Generator {
        Generator::new(GeneratorConfig::default())
    }

    fn graph() -> ModelGraph {
        ModelGraph::new()
            .with_model(Model::new("Animal").with_field(Field::required(
                "id",
                TypeDescriptor::primitive(PrimitiveType::Int64),
            )))
            .with_model(
                Model::new("Dog").with_ancestor("Animal").with_field(Field::new(
                    "tricks",
                    TypeDescriptor::unique_list(TypeDescriptor::primitive(PrimitiveType::String)),
                )),
            )
    }

    #[test]
    fn test_process_opts_dbs() {
        let opts = generator().process_opts();

        assert_eq!(
            opts.additional_properties.get("useDBSDataProvider"),
            Some(&Value::Bool(true))
        );
        assert_eq!(
            opts.supporting_files,
            vec![SupportingFile::new(
                "AnyCodable.swift.mustache",
                "OpenAPIClient/Classes/OpenAPIs",
                "AnyCodable.swift",
            )]
        );
    }

    #[test]
    fn test_process_opts_other_library() {
        let config = GeneratorConfig::builder()
            .library("alamofire")
            .build()
            .expect("Failed to build");
        let opts = Generator::new(config).process_opts();

        assert_eq!(
            opts.additional_properties.get("useDBSDataProvider"),
            Some(&Value::Bool(false))
        );
    }

    #[test]
    fn test_post_process_all_models() {
        let mut generator = generator();
        let flattened = generator
            .post_process_all_models(&graph())
            .expect("Failed to post-process");

        let dog = flattened.graph.get("Dog").unwrap();
        assert!(dog.has_field("id"));
        assert!(dog.required_field_names.contains("id"));
    }

    #[test]
    fn test_validate_accepts_consistent_graph() {
        assert!(generator().validate(&graph()).is_ok());
    }

    #[test]
    fn test_validate_rejects_dangling_ancestor() {
        let dangling = graph().with_model(Model::new("Cat").with_ancestor("Feline"));
        let result = generator().validate(&dangling);

        assert!(matches!(
            result,
            Err(CodegenError::Schema(SchemaError::DanglingAncestor { .. }))
        ));
    }

    #[test]
    fn test_field_declarations() {
        let mut generator = generator();
        let flattened = generator
            .post_process_all_models(&graph())
            .expect("Failed to post-process");
        let decls = generator.field_declarations(flattened.graph.get("Dog").unwrap());

        assert_eq!(
            decls,
            vec![
                FieldDeclaration {
                    name: "tricks".to_string(),
                    declaration: "[String]".to_string(),
                    required: false,
                },
                FieldDeclaration {
                    name: "id".to_string(),
                    declaration: "Int64".to_string(),
                    required: true,
                },
            ]
        );
    }

    #[test]
    fn test_banner_lists_models() {
        let mut generator = generator();
        generator
            .post_process_all_models(&graph())
            .expect("Failed to post-process");
        let banner = generator.post_process();

        assert!(banner.contains("Thanks for using BOAT Swift OpenAPI Generator."));
        assert!(banner.contains("Dog (2 fields)"));
        assert!(banner.lines().all(|line| line.len() == BANNER_WIDTH));
    }

    #[test]
    fn test_banner_before_processing() {
        let banner = generator().post_process();
        assert!(banner.contains("No models were post processed."));
    }

    #[test]
    fn test_cycle_leaves_nothing_processed() {
        let cyclic = ModelGraph::new()
            .with_model(Model::new("A").with_ancestor("B"))
            .with_model(Model::new("B").with_ancestor("A"));
        let mut generator = generator();

        assert!(generator.post_process_all_models(&cyclic).is_err());
        assert!(generator.post_process().contains("No models were post processed."));
    }
}

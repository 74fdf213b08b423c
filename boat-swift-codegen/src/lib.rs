//! # BOAT Swift Codegen
//!
//! Model post-processing for BOAT Swift 5 client generation.
//!
//! This crate provides:
//! - allOf inheritance flattening, since Swift structs cannot inherit
//! - Swift type declarations that spell every list as an array literal
//! - Generator configuration and the generation-pass hooks

pub mod config;
pub mod error;
pub mod flatten;
pub mod generator;
pub mod swift;

pub use config::{GeneratorConfig, GeneratorConfigBuilder, Stability};
pub use error::CodegenError;
pub use flatten::{FieldConflict, FlattenReport, Flattened, Flattener, flatten, flatten_in_place};
pub use generator::{FieldDeclaration, Generator, ProcessedOptions, SupportingFile};

use boat_swift_model::ModelGraph;

/// Flattens a model graph document.
///
/// # Arguments
/// * `json` - Model graph document
///
/// # Returns
/// The flattened graph.
///
/// # Errors
/// Returns `CodegenError` if parsing or flattening fails.
pub fn flatten_from_json(json: &str) -> Result<ModelGraph, CodegenError> {
    let graph = boat_swift_model::parse_graph(json)?;
    flatten(&graph)
}

/// Flattens a model graph document file.
///
/// # Arguments
/// * `path` - Path to the model graph document
///
/// # Returns
/// The flattened graph.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or flattening fails.
pub fn flatten_from_file(path: &std::path::Path) -> Result<ModelGraph, CodegenError> {
    let graph = boat_swift_model::parse_graph_file(path)?;
    flatten(&graph)
}

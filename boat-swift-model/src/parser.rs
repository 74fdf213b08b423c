//! Model graph document loader.
//!
//! The upstream parser hands its model graph over as a JSON object keyed by
//! model name. This module decodes such documents, checks their structure and
//! normalizes the required markers, and writes graphs back out.

use crate::error::ParseError;
use crate::model::ModelGraph;
use std::collections::HashSet;
use std::path::Path;

/// Parses a model graph from a JSON document.
///
/// # Arguments
/// * `json` - Model graph document
///
/// # Returns
/// Parsed graph or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, a model's name disagrees
/// with its key, a model declares a field twice, or a required name matches
/// no field.
pub fn parse_graph(json: &str) -> Result<ModelGraph, ParseError> {
    let mut graph: ModelGraph = serde_json::from_str(json)?;

    for (key, model) in graph.entries_mut() {
        if model.name.is_empty() {
            model.name = key.clone();
        } else if model.name != *key {
            return Err(ParseError::NameMismatch {
                key: key.clone(),
                name: model.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        for field in &model.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(ParseError::duplicate_field(&model.name, &field.name));
            }
        }

        if let Some(unknown) = model
            .required_field_names
            .iter()
            .find(|name| !seen.contains(name.as_str()))
        {
            return Err(ParseError::unknown_required(&model.name, unknown));
        }

        model.sync_required();
    }

    Ok(graph)
}

/// Parses a model graph from a JSON file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_graph_file(path: &Path) -> Result<ModelGraph, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_graph(&json)
}

/// Serializes a model graph as pretty-printed JSON.
///
/// # Errors
/// Returns `ParseError` if serialization fails.
pub fn to_json(graph: &ModelGraph) -> Result<String, ParseError> {
    Ok(serde_json::to_string_pretty(graph)?)
}

/// Writes a model graph to a JSON file.
///
/// # Errors
/// Returns `ParseError` if serialization or writing fails.
pub fn write_graph_file(graph: &ModelGraph, path: &Path) -> Result<(), ParseError> {
    let json = to_json(graph)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PrimitiveType, TypeDescriptor};

    const PET_GRAPH: &str = r#"{
        "Animal": {
            "fields": [
                { "name": "id", "type": { "kind": "primitive", "type": "int64" } },
                { "name": "kind", "type": { "kind": "primitive", "type": "string" }, "required": true }
            ],
            "requiredFieldNames": ["id"]
        },
        "Dog": {
            "name": "Dog",
            "fields": [
                { "name": "tags", "type": { "kind": "list", "items": { "kind": "primitive", "type": "string" }, "uniqueItems": true } }
            ],
            "ancestorNames": ["Animal"]
        }
    }"#;

    #[test]
    fn test_parse_graph() {
        let graph = parse_graph(PET_GRAPH).expect("Failed to parse graph");

        assert_eq!(graph.len(), 2);
        let dog = graph.get("Dog").unwrap();
        assert_eq!(dog.ancestor_names, vec!["Animal"]);
        assert_eq!(
            dog.field("tags").unwrap().type_descriptor,
            TypeDescriptor::unique_list(TypeDescriptor::primitive(PrimitiveType::String))
        );
    }

    #[test]
    fn test_parse_graph_fills_name_from_key() {
        let graph = parse_graph(PET_GRAPH).expect("Failed to parse graph");
        assert_eq!(graph.get("Animal").unwrap().name, "Animal");
    }

    #[test]
    fn test_parse_graph_normalizes_required() {
        let graph = parse_graph(PET_GRAPH).expect("Failed to parse graph");
        let animal = graph.get("Animal").unwrap();

        assert!(animal.field("id").unwrap().required);
        assert!(animal.required_field_names.contains("kind"));
    }

    #[test]
    fn test_parse_empty_graph() {
        let graph = parse_graph("{}").expect("Failed to parse graph");
        assert!(graph.is_empty());
    }

    #[test]
    fn test_parse_name_mismatch() {
        let result = parse_graph(r#"{ "Cat": { "name": "Dog" } }"#);
        assert!(matches!(result, Err(ParseError::NameMismatch { .. })));
    }

    #[test]
    fn test_parse_duplicate_field() {
        let json = r#"{ "Cat": { "fields": [
            { "name": "id", "type": { "kind": "primitive", "type": "int64" } },
            { "name": "id", "type": { "kind": "primitive", "type": "string" } }
        ] } }"#;
        let result = parse_graph(json);
        assert!(matches!(result, Err(ParseError::DuplicateField { .. })));
    }

    #[test]
    fn test_parse_unknown_required_field() {
        let result = parse_graph(r#"{ "Cat": { "requiredFieldNames": ["whiskers"] } }"#);
        assert!(matches!(
            result,
            Err(ParseError::UnknownRequiredField { ref field, .. }) if field == "whiskers"
        ));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(parse_graph("{ not json"), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_graph_file_round_trip() {
        let graph = parse_graph(PET_GRAPH).expect("Failed to parse graph");
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("models.json");

        write_graph_file(&graph, &path).expect("Failed to write graph");
        let reloaded = parse_graph_file(&path).expect("Failed to read graph");

        assert_eq!(graph, reloaded);
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_graph_file(Path::new("/nonexistent/models.json"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}

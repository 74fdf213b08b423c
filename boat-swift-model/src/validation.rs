//! Model graph validation utilities.
//!
//! The flattening pass tolerates dangling ancestor names, so these checks are
//! advisory unless the caller asks for strict validation.

use crate::error::SchemaError;
use crate::model::ModelGraph;

/// An ancestor name with no corresponding model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingAncestor {
    /// Model listing the ancestor.
    pub model: String,
    /// Missing ancestor name.
    pub ancestor: String,
}

/// Validates a model graph for consistency.
///
/// # Arguments
/// * `graph` - The graph to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if a model lists a missing ancestor, a field refers
/// to a missing model, or a field's required flag disagrees with its model's
/// required set.
pub fn validate_graph(graph: &ModelGraph) -> Result<(), SchemaError> {
    if let Some(dangling) = dangling_ancestors(graph).into_iter().next() {
        return Err(SchemaError::DanglingAncestor {
            model: dangling.model,
            ancestor: dangling.ancestor,
        });
    }
    validate_references(graph)?;
    validate_required(graph)?;
    Ok(())
}

/// Collects every ancestor name that has no model in the graph.
#[must_use]
pub fn dangling_ancestors(graph: &ModelGraph) -> Vec<DanglingAncestor> {
    graph
        .models()
        .flat_map(|model| {
            model
                .ancestor_names
                .iter()
                .filter(|ancestor| !graph.contains(ancestor))
                .map(|ancestor| DanglingAncestor {
                    model: model.name.clone(),
                    ancestor: ancestor.clone(),
                })
        })
        .collect()
}

/// Validates that field types only refer to models in the graph.
fn validate_references(graph: &ModelGraph) -> Result<(), SchemaError> {
    for model in graph.models() {
        for field in &model.fields {
            if let Some(target) = field.type_descriptor.referenced_model() {
                if !graph.contains(target) {
                    return Err(SchemaError::UnknownReference {
                        model: model.name.clone(),
                        field: field.name.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Validates that required flags mirror the required sets.
fn validate_required(graph: &ModelGraph) -> Result<(), SchemaError> {
    for model in graph.models() {
        for field in &model.fields {
            if field.required != model.required_field_names.contains(&field.name) {
                return Err(SchemaError::RequiredMismatch {
                    model: model.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, Model};
    use crate::types::{PrimitiveType, TypeDescriptor};

    #[test]
    fn test_validate_valid_graph() {
        let graph = ModelGraph::new()
            .with_model(Model::new("Animal").with_field(Field::required(
                "id",
                TypeDescriptor::primitive(PrimitiveType::Int64),
            )))
            .with_model(
                Model::new("Dog")
                    .with_ancestor("Animal")
                    .with_field(Field::new(
                        "friends",
                        TypeDescriptor::list(TypeDescriptor::reference("Dog")),
                    )),
            );

        assert!(validate_graph(&graph).is_ok());
    }

    #[test]
    fn test_dangling_ancestors() {
        let graph = ModelGraph::new()
            .with_model(Model::new("Dog").with_ancestor("Animal").with_ancestor("Pet"))
            .with_model(Model::new("Pet"));

        assert_eq!(
            dangling_ancestors(&graph),
            vec![DanglingAncestor {
                model: "Dog".to_string(),
                ancestor: "Animal".to_string(),
            }]
        );
        assert!(matches!(
            validate_graph(&graph),
            Err(SchemaError::DanglingAncestor { .. })
        ));
    }

    #[test]
    fn test_validate_unknown_reference() {
        let graph = ModelGraph::new().with_model(
            Model::new("Order").with_field(Field::new(
                "lines",
                TypeDescriptor::map(TypeDescriptor::reference("Line")),
            )),
        );

        assert!(matches!(
            validate_graph(&graph),
            Err(SchemaError::UnknownReference { ref target, .. }) if target == "Line"
        ));
    }

    #[test]
    fn test_validate_required_mismatch() {
        let mut model = Model::new("Order");
        model.fields.push(Field::required(
            "id",
            TypeDescriptor::primitive(PrimitiveType::Uuid),
        ));
        let graph = ModelGraph::new().with_model(model);

        assert!(matches!(
            validate_graph(&graph),
            Err(SchemaError::RequiredMismatch { .. })
        ));
    }
}

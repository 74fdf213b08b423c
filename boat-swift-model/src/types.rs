//! Field type descriptors.
//!
//! This module contains the semantic type of a model field as handed over by
//! the upstream OpenAPI parser: primitives, references to other models, and
//! the list and map containers built from them.

use serde::{Deserialize, Serialize};

/// OpenAPI primitive types, keyed by their `type`/`format` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimitiveType {
    /// `type: string`.
    String,
    /// `type: integer` without a format.
    Integer,
    /// `type: integer, format: int32`.
    Int32,
    /// `type: integer, format: int64`.
    Int64,
    /// `type: number, format: float`.
    Float,
    /// `type: number, format: double` (and bare `number`).
    #[serde(alias = "number")]
    Double,
    /// `type: boolean`.
    Boolean,
    /// `type: string, format: date`.
    Date,
    /// `type: string, format: date-time`.
    DateTime,
    /// `type: string, format: binary`.
    Binary,
    /// `type: string, format: uri`.
    Uri,
    /// `type: string, format: uuid`.
    Uuid,
    /// `type: number` carrying an arbitrary-precision decimal.
    Decimal,
    /// Free-form value without a declared type.
    Any,
}

/// Semantic type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDescriptor {
    /// A primitive value.
    Primitive {
        /// The primitive type.
        #[serde(rename = "type")]
        primitive: PrimitiveType,
    },
    /// A reference to another model in the graph.
    Reference {
        /// Name of the referenced model.
        model: String,
    },
    /// An ordered collection.
    #[serde(rename_all = "camelCase")]
    List {
        /// Element type.
        items: Box<TypeDescriptor>,
        /// Mirrors OpenAPI `uniqueItems`.
        #[serde(default)]
        unique_items: bool,
    },
    /// A string-keyed dictionary (`additionalProperties`).
    Map {
        /// Value type.
        values: Box<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    /// Creates a primitive type descriptor.
    #[must_use]
    pub const fn primitive(primitive: PrimitiveType) -> Self {
        Self::Primitive { primitive }
    }

    /// Creates a reference to the named model.
    #[must_use]
    pub fn reference(model: impl Into<String>) -> Self {
        Self::Reference {
            model: model.into(),
        }
    }

    /// Creates a list of `items`.
    #[must_use]
    pub fn list(items: TypeDescriptor) -> Self {
        Self::List {
            items: Box::new(items),
            unique_items: false,
        }
    }

    /// Creates a list of `items` flagged with `uniqueItems: true`.
    #[must_use]
    pub fn unique_list(items: TypeDescriptor) -> Self {
        Self::List {
            items: Box::new(items),
            unique_items: true,
        }
    }

    /// Creates a string-keyed map of `values`.
    #[must_use]
    pub fn map(values: TypeDescriptor) -> Self {
        Self::Map {
            values: Box::new(values),
        }
    }

    /// Returns the model this type refers to, looking through list and map
    /// containers.
    #[must_use]
    pub fn referenced_model(&self) -> Option<&str> {
        match self {
            Self::Primitive { .. } => None,
            Self::Reference { model } => Some(model),
            Self::List { items, .. } => items.referenced_model(),
            Self::Map { values } => values.referenced_model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_descriptor_json_shape() {
        let ty = TypeDescriptor::unique_list(TypeDescriptor::primitive(PrimitiveType::String));
        let json = serde_json::to_value(&ty).expect("Failed to serialize");
        assert_eq!(json["kind"], "list");
        assert_eq!(json["uniqueItems"], true);
        assert_eq!(json["items"]["kind"], "primitive");
        assert_eq!(json["items"]["type"], "string");
    }

    #[test]
    fn test_type_descriptor_unique_items_defaults_false() {
        let ty: TypeDescriptor = serde_json::from_str(
            r#"{"kind":"list","items":{"kind":"reference","model":"Pet"}}"#,
        )
        .expect("Failed to parse");
        assert_eq!(ty, TypeDescriptor::list(TypeDescriptor::reference("Pet")));
    }

    #[test]
    fn test_referenced_model_through_containers() {
        let ty = TypeDescriptor::map(TypeDescriptor::list(TypeDescriptor::reference("Tag")));
        assert_eq!(ty.referenced_model(), Some("Tag"));

        let ty = TypeDescriptor::primitive(PrimitiveType::Uuid);
        assert_eq!(ty.referenced_model(), None);
    }
}

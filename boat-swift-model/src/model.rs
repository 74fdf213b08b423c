//! Model definitions.
//!
//! This module contains the structural description of the models produced by
//! the upstream parser: each model's own fields, the names of its required
//! fields, and the "allOf" parents it composes.

use crate::types::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Field (property) of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Semantic type.
    #[serde(rename = "type")]
    pub type_descriptor: TypeDescriptor,
    /// Whether the field is mandatory. Mirrors membership in the owning
    /// model's required set.
    #[serde(default)]
    pub required: bool,
}

impl Field {
    /// Creates a new optional field.
    #[must_use]
    pub fn new(name: impl Into<String>, type_descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            type_descriptor,
            required: false,
        }
    }

    /// Creates a new required field.
    #[must_use]
    pub fn required(name: impl Into<String>, type_descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            type_descriptor,
            required: true,
        }
    }
}

/// Model definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Model name. Documents may omit it, in which case the graph key is used.
    #[serde(default)]
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Names of the mandatory fields.
    #[serde(default)]
    pub required_field_names: BTreeSet<String>,
    /// Direct "allOf" parents, in declaration order.
    #[serde(default)]
    pub ancestor_names: Vec<String>,
}

impl Model {
    /// Creates a new model without fields or ancestors.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a field, returning the model.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    /// Adds a direct ancestor, returning the model.
    #[must_use]
    pub fn with_ancestor(mut self, name: impl Into<String>) -> Self {
        self.ancestor_names.push(name.into());
        self
    }

    /// Adds a field to the model, recording it as required if flagged.
    pub fn add_field(&mut self, field: Field) {
        if field.required {
            self.required_field_names.insert(field.name.clone());
        }
        self.fields.push(field);
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if a field with the given name exists.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Makes each field's `required` flag and the required set agree.
    ///
    /// A field counts as required when either side says so.
    pub fn sync_required(&mut self) {
        for field in &mut self.fields {
            if self.required_field_names.contains(&field.name) {
                field.required = true;
            } else if field.required {
                self.required_field_names.insert(field.name.clone());
            }
        }
    }
}

/// Mapping of model name to model for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelGraph {
    models: BTreeMap<String, Model>,
}

impl ModelGraph {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a model keyed by its name, returning the model it replaced.
    pub fn insert(&mut self, model: Model) -> Option<Model> {
        self.models.insert(model.name.clone(), model)
    }

    /// Adds a model, returning the graph.
    #[must_use]
    pub fn with_model(mut self, model: Model) -> Self {
        self.insert(model);
        self
    }

    /// Looks up a model by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Returns true if a model with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Returns the number of models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns true if the graph has no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Returns the model names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Iterates over the models in name order.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    pub(crate) fn entries_mut(&mut self) -> impl Iterator<Item = (&String, &mut Model)> {
        self.models.iter_mut()
    }
}

impl FromIterator<Model> for ModelGraph {
    fn from_iter<I: IntoIterator<Item = Model>>(iter: I) -> Self {
        let mut graph = Self::new();
        for model in iter {
            graph.insert(model);
        }
        graph
    }
}

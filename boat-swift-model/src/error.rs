//! Error types for model graph loading and validation.

use thiserror::Error;

/// Error type for model graph loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Model name does not match the key it is stored under.
    #[error("model stored under '{key}' is named '{name}'")]
    NameMismatch {
        /// Graph key.
        key: String,
        /// Declared model name.
        name: String,
    },

    /// Field declared twice in one model.
    #[error("duplicate field '{field}' in model '{model}'")]
    DuplicateField {
        /// Model name.
        model: String,
        /// Field name.
        field: String,
    },

    /// Required name that matches no field.
    #[error("required field '{field}' is not declared by model '{model}'")]
    UnknownRequiredField {
        /// Model name.
        model: String,
        /// Field name.
        field: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for model graph validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Ancestor name with no model in the graph.
    #[error("model '{model}' lists unknown ancestor '{ancestor}'")]
    DanglingAncestor {
        /// Model name.
        model: String,
        /// Missing ancestor name.
        ancestor: String,
    },

    /// Field type referring to a model that does not exist.
    #[error("field '{field}' of model '{model}' references unknown model '{target}'")]
    UnknownReference {
        /// Model name.
        model: String,
        /// Field name.
        field: String,
        /// Missing model name.
        target: String,
    },

    /// Required flag and required set disagree.
    #[error("required marker of field '{field}' in model '{model}' disagrees with the required set")]
    RequiredMismatch {
        /// Model name.
        model: String,
        /// Field name.
        field: String,
    },
}

impl ParseError {
    /// Creates a duplicate field error.
    pub fn duplicate_field(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            model: model.into(),
            field: field.into(),
        }
    }

    /// Creates an unknown required field error.
    pub fn unknown_required(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownRequiredField {
            model: model.into(),
            field: field.into(),
        }
    }
}

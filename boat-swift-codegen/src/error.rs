//! Error types for model post-processing.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Model graph parse error.
    #[error("model graph parse error: {0}")]
    Parse(#[from] boat_swift_model::ParseError),

    /// Model graph validation error.
    #[error("model graph error: {0}")]
    Schema(#[from] boat_swift_model::SchemaError),

    /// The ancestry of some model loops back on itself.
    #[error("cyclic inheritance: {}", .cycle.join(" -> "))]
    CyclicInheritance {
        /// Model names along the cycle, starting and ending with the same name.
        cycle: Vec<String>,
    },

    /// Library not offered by this generator.
    #[error("unknown library '{library}', expected one of: {}", .supported.join(", "))]
    UnknownLibrary {
        /// Requested library.
        library: String,
        /// Supported library names.
        supported: Vec<String>,
    },
}

impl CodegenError {
    /// Creates a cyclic inheritance error from the models along the cycle.
    pub fn cyclic<I, S>(cycle: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::CyclicInheritance {
            cycle: cycle.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_display() {
        let err = CodegenError::cyclic(["A", "B", "A"]);
        assert_eq!(err.to_string(), "cyclic inheritance: A -> B -> A");
    }

    #[test]
    fn test_unknown_library_display() {
        let err = CodegenError::UnknownLibrary {
            library: "curl".to_string(),
            supported: vec!["alamofire".to_string(), "urlsession".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown library 'curl', expected one of: alamofire, urlsession"
        );
    }
}

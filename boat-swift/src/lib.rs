//! # BOAT Swift
//!
//! Model post-processing for BOAT Swift 5 OpenAPI client generation.
//!
//! Swift structs have no inheritance, so models composed with `allOf` would
//! otherwise be generated without their parents' properties. This crate
//! flattens every ancestor's fields into each descendant model once the
//! upstream parser has built the model graph, and declares list-typed fields
//! with Swift array literal syntax.
//!
//! ## Quick Start
//!
//! ```
//! use boat_swift::prelude::*;
//!
//! let graph = ModelGraph::new()
//!     .with_model(Model::new("Animal").with_field(Field::required(
//!         "id",
//!         TypeDescriptor::primitive(PrimitiveType::Int64),
//!     )))
//!     .with_model(Model::new("Dog").with_ancestor("Animal"));
//!
//! let flat = flatten(&graph)?;
//! assert!(flat.get("Dog").unwrap().has_field("id"));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Model graph types, loading and validation
//! - [`codegen`] - Flattening, type declarations and generator hooks

pub mod prelude;

/// Model graph types, loading and validation.
pub mod model {
    pub use boat_swift_model::*;
}

/// Flattening, type declarations and generator hooks.
pub mod codegen {
    pub use boat_swift_codegen::*;
}

//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use boat_swift::prelude::*;
//! ```

// Model types
pub use boat_swift_model::{
    Field, Model, ModelGraph, ParseError, PrimitiveType, SchemaError, TypeDescriptor, parse_graph,
    parse_graph_file,
};

// Codegen types
pub use boat_swift_codegen::swift::{BoatSwift5Types, Swift5Types, TypeDeclaration};
pub use boat_swift_codegen::{
    CodegenError, FlattenReport, Flattened, Flattener, Generator, GeneratorConfig, flatten,
    flatten_in_place,
};

//! # BOAT Swift Model
//!
//! Model graph types for BOAT Swift 5 client generation.
//!
//! This crate provides:
//! - Field type descriptors (primitives, model references, lists, maps)
//! - Models and the model graph handed over by the upstream OpenAPI parser
//! - JSON loading and writing of model graph documents
//! - Graph validation

pub mod error;
pub mod model;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use model::{Field, Model, ModelGraph};
pub use parser::{parse_graph, parse_graph_file, to_json, write_graph_file};
pub use types::{PrimitiveType, TypeDescriptor};
pub use validation::{DanglingAncestor, dangling_ancestors, validate_graph};

//! Swift code generation modules.

pub mod types;

pub use types::{
    BoatSwift5Types, Swift5Types, TypeDeclaration, default_type_declaration, swift_primitive,
};

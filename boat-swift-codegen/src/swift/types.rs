//! Swift type declarations for model fields.

use boat_swift_model::{PrimitiveType, TypeDescriptor};

/// Produces the declared Swift type of a field.
pub trait TypeDeclaration {
    /// Returns the Swift spelling of `ty`.
    fn type_declaration(&self, ty: &TypeDescriptor) -> String;
}

/// Returns the Swift 5 name of a primitive type.
#[must_use]
pub const fn swift_primitive(primitive: PrimitiveType) -> &'static str {
    match primitive {
        PrimitiveType::String => "String",
        PrimitiveType::Integer => "Int",
        PrimitiveType::Int32 => "Int32",
        PrimitiveType::Int64 => "Int64",
        PrimitiveType::Float => "Float",
        PrimitiveType::Double => "Double",
        PrimitiveType::Boolean => "Bool",
        PrimitiveType::Date | PrimitiveType::DateTime => "Date",
        PrimitiveType::Binary | PrimitiveType::Uri => "URL",
        PrimitiveType::Uuid => "UUID",
        PrimitiveType::Decimal => "Decimal",
        PrimitiveType::Any => "AnyCodable",
    }
}

/// The stock Swift 5 declaration of `ty`.
///
/// Element and value types are declared through `inner`, so an overriding
/// declaration also applies inside containers it does not handle itself.
pub fn default_type_declaration(
    ty: &TypeDescriptor,
    inner: &dyn Fn(&TypeDescriptor) -> String,
) -> String {
    match ty {
        TypeDescriptor::Primitive { primitive } => swift_primitive(*primitive).to_string(),
        TypeDescriptor::Reference { model } => model.clone(),
        TypeDescriptor::List {
            items,
            unique_items: true,
        } => format!("Set<{}>", inner(items)),
        TypeDescriptor::List { items, .. } => format!("[{}]", inner(items)),
        TypeDescriptor::Map { values } => format!("[String: {}]", inner(values)),
    }
}

/// Declarations as the stock Swift 5 generator spells them.
///
/// Lists flagged `uniqueItems` come out as `Set<T>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swift5Types;

impl TypeDeclaration for Swift5Types {
    fn type_declaration(&self, ty: &TypeDescriptor) -> String {
        default_type_declaration(ty, &|t| self.type_declaration(t))
    }
}

/// Declarations used by BOAT Swift 5 models.
///
/// Every list is declared with array literal syntax, `[T]`, whatever its
/// `uniqueItems` flag, so generated models and the runtime library agree on
/// one collection spelling. Everything else is declared by the stock rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoatSwift5Types;

impl TypeDeclaration for BoatSwift5Types {
    fn type_declaration(&self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::List { items, .. } => format!("[{}]", self.type_declaration(items)),
            other => default_type_declaration(other, &|t| self.type_declaration(t)),
        }
    }
}

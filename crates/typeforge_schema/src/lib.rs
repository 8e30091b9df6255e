//! Schema models, enums, registry, and input-type descriptors for Typeforge.
//!
//! This crate provides:
//! - [`SchemaModel`] / [`FieldDescriptor`] - Models and their declared fields
//! - [`EnumDef`] - Schema enumerations
//! - [`SchemaRegistry`] - Read-only, cheaply shared lookup of models and enums
//! - [`InputTypeDescriptor`] - One generated declaration's fields and filter semantics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod input;
pub mod model;
pub mod registry;

pub use input::{FilterKind, InputField, InputKind, InputTypeDescriptor};
pub use model::{EnumDef, FieldDescriptor, FieldType, RelationArity, RelationRef, SchemaModel};
pub use registry::{SchemaDocument, SchemaRegistry};

//! Field resolution, import deduplication, and declaration synthesis for Typeforge.
//!
//! This crate provides:
//! - [`FieldResolver`] - Resolves one field to a [`ResolvedProperty`]
//! - [`ImportResolver`] - Per-file import manifest with conflict detection
//! - [`Synthesizer`] - Builds a [`DeclarationRecord`] from a descriptor
//! - [`Generator`] - Parallel generation runs with per-descriptor failure reports
//! - [`GeneratorConfig`] - Output shape options
//!
//! # Example
//!
//! ```
//! use typeforge_foundation::ScalarKind;
//! use typeforge_schema::{FieldDescriptor, InputKind, InputTypeDescriptor, SchemaModel, SchemaRegistry};
//! use typeforge_synth::{Generator, GeneratorConfig};
//!
//! let user = SchemaModel::new("User").with_field(FieldDescriptor::scalar("id", ScalarKind::String).id());
//! let generator = Generator::new(SchemaRegistry::new().with_model(user.clone()), GeneratorConfig::default());
//!
//! let record = generator
//!     .synthesize(&InputTypeDescriptor::for_model(&user, InputKind::Where))
//!     .unwrap();
//! assert_eq!(record.property("id").unwrap().declared_type, "StringFilter | string");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod declaration;
pub mod imports;
pub mod property;
pub mod resolver;
pub mod run;

pub use config::{Dialect, FileCase, GeneratorConfig, NullableStyle};
pub use declaration::{DeclarationRecord, Synthesizer};
pub use imports::{ImportEntry, ImportResolver, ModulePath};
pub use property::{AnnotationFactory, ResolvedProperty};
pub use resolver::FieldResolver;
pub use run::{GenerationFailure, GenerationReport, Generator};

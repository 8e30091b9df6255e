//! Typeforge - Schema-driven input declaration generator
//!
//! This crate re-exports all layers of the Typeforge system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: typeforge_synth      - Field resolver, imports, declaration synthesis, runs
//! Layer 2: typeforge_mapping    - Mapping table, symbol templates, filter catalog
//! Layer 1: typeforge_schema     - Models, enums, registry, input-type descriptors
//! Layer 0: typeforge_foundation - Scalar kinds, errors, ordered collections, naming
//! ```

pub use typeforge_foundation as foundation;
pub use typeforge_mapping as mapping;
pub use typeforge_schema as schema;
pub use typeforge_synth as synth;

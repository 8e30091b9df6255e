//! Filter kinds, the type-mapping table, and the filter catalog for Typeforge.
//!
//! This crate provides:
//! - [`MappingTable`] - Exhaustive lookup from [`RuleKey`] to [`TypeMappingRule`]
//! - [`SymbolTemplate`] / [`Target`] - Symbol names instantiated per field
//! - [`ScalarProfile`] - How each scalar kind is written in generated code
//! - [`catalog`] - The filter declarations model declarations reference

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod rule;
pub mod scalar;
pub mod symbol;
pub mod table;

pub use catalog::{CatalogEntry, FilterCore};
pub use rule::{RuleKey, SpecialCase, Subject, SymbolTemplate, Target, TypeMappingRule, TypeTerm};
pub use scalar::{ScalarProfile, scalar_profile};
pub use symbol::{Symbol, SymbolOrigin};
pub use table::{MappingTable, key_space, supports};

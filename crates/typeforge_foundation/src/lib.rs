//! Core types, errors, and ordered collections for Typeforge.
//!
//! This crate provides:
//! - [`ScalarKind`] - The closed set of schema scalar kinds
//! - [`Cardinality`] - Single values versus ordered sequences
//! - [`Error`] - Rich error types with context
//! - [`OrderedMap`] - Insertion-ordered map over `indexmap`
//! - Naming helpers for generated symbol and file names

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod naming;
pub mod types;

pub use collections::OrderedMap;
pub use error::{Error, ErrorContext, ErrorKind, LookupKind};
pub use types::{Cardinality, ScalarKind};

/// Result type used throughout Typeforge.
pub type Result<T> = std::result::Result<T, Error>;

//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: ScalarKind, Cardinality, Error, ordered collections, and naming.

mod errors;

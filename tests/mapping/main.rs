//! Integration tests for Layer 2: Mapping
//!
//! Tests for the type-mapping table, symbol templates, and the filter catalog.

mod catalog;
mod table;

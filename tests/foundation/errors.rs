//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use typeforge_foundation::{Error, ErrorContext, ErrorKind, LookupKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unmapped() {
    let err = Error::unmapped("(Json, atomicUpdate, list)");
    assert!(matches!(err.kind, ErrorKind::UnmappedCombination(_)));
    let msg = format!("{err}");
    assert!(msg.contains("Json"));
}

#[test]
fn error_unresolved_relation() {
    let err = Error::unresolved_relation("author", "User");
    assert_eq!(
        err.kind,
        ErrorKind::UnresolvedRelationTarget {
            field: "author".into(),
            target: "User".into(),
        }
    );
    let msg = format!("{err}");
    assert!(msg.contains("author"));
    assert!(msg.contains("User"));
}

#[test]
fn error_unresolved_enum() {
    let err = Error::unresolved_enum("role", "Role");
    assert!(matches!(err.kind, ErrorKind::UnresolvedEnumTarget { .. }));
    assert!(format!("{err}").contains("Role"));
}

#[test]
fn error_invalid_option() {
    let err = Error::invalid_option("fileCase", "snake");
    let msg = format!("{err}");
    assert!(msg.contains("fileCase"));
    assert!(msg.contains("snake"));
}

#[test]
fn error_not_found_is_not_found() {
    assert!(Error::not_found(LookupKind::Model, "User").is_not_found());
    assert!(!Error::parse("bad").is_not_found());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_display_without_context() {
    let err = Error::not_found(LookupKind::Model, "Post");
    assert_eq!(format!("{err}"), "model not found: Post");
}

#[test]
fn error_display_with_declaration_only() {
    let err = Error::conflicting_import("Decimal", "./Decimal.enum", "@prisma/client/runtime/library")
        .with_context(ErrorContext::new().with_declaration("PriceCreateInput"));
    assert!(format!("{err}").ends_with("(in PriceCreateInput)"));
}

#[test]
fn empty_context_adds_nothing() {
    let err = Error::parse("eof").with_context(ErrorContext::new());
    assert_eq!(format!("{err}"), "parse error: eof");
}

#[test]
fn errors_compare_by_kind_and_context() {
    let a = Error::unmapped("k").with_context(ErrorContext::new().with_field("f"));
    let b = Error::unmapped("k").with_context(ErrorContext::new().with_field("f"));
    assert_eq!(a, b);
    assert_ne!(a, Error::unmapped("k"));
}

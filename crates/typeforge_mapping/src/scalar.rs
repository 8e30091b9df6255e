//! How each scalar kind is written in generated declarations.

use typeforge_foundation::ScalarKind;

use crate::rule::{SymbolTemplate, TypeTerm};
use crate::symbol::SymbolOrigin;

/// Package exporting the decimal GraphQL scalar.
pub const DECIMAL_SCALAR_PACKAGE: &str = "prisma-graphql-type-decimal";
/// Package exporting the JSON GraphQL scalar.
pub const JSON_SCALAR_PACKAGE: &str = "graphql-type-json";

/// Output shape of one scalar kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalarProfile {
    /// The kind described.
    pub kind: ScalarKind,
    /// Host-language type union of a bare value.
    pub terms: &'static [TypeTerm],
    /// GraphQL scalar named by the annotation factory.
    pub annotation: SymbolTemplate,
    /// Whether filters accept a bare value as equality shorthand.
    pub shorthand: bool,
    /// Whether a dedicated nested filter sits behind `not`.
    pub nested: bool,
}

const fn builtin(name: &'static str) -> SymbolTemplate {
    SymbolTemplate::Fixed(name, SymbolOrigin::Builtin)
}

const fn dialect(name: &'static str) -> SymbolTemplate {
    SymbolTemplate::Fixed(name, SymbolOrigin::Dialect)
}

const fn profile(
    kind: ScalarKind,
    terms: &'static [TypeTerm],
    annotation: SymbolTemplate,
) -> ScalarProfile {
    ScalarProfile {
        kind,
        terms,
        annotation,
        shorthand: true,
        nested: true,
    }
}

static PROFILES: [ScalarProfile; 9] = [
    profile(
        ScalarKind::String,
        &[TypeTerm::Native("string")],
        builtin("String"),
    ),
    profile(ScalarKind::Int, &[TypeTerm::Native("number")], dialect("Int")),
    profile(ScalarKind::Float, &[TypeTerm::Native("number")], dialect("Float")),
    profile(
        ScalarKind::Boolean,
        &[TypeTerm::Native("boolean")],
        builtin("Boolean"),
    ),
    profile(
        ScalarKind::DateTime,
        &[TypeTerm::Native("Date"), TypeTerm::Native("string")],
        builtin("Date"),
    ),
    profile(
        ScalarKind::Bytes,
        &[TypeTerm::Native("Uint8Array")],
        builtin("String"),
    ),
    profile(
        ScalarKind::Decimal,
        &[TypeTerm::Symbol(SymbolTemplate::Fixed(
            "Decimal",
            SymbolOrigin::ClientRuntime,
        ))],
        SymbolTemplate::Fixed(
            "GraphQLDecimal",
            SymbolOrigin::Package(DECIMAL_SCALAR_PACKAGE),
        ),
    ),
    profile(
        ScalarKind::BigInt,
        &[TypeTerm::Native("bigint"), TypeTerm::Native("number")],
        builtin("String"),
    ),
    ScalarProfile {
        kind: ScalarKind::Json,
        terms: &[TypeTerm::Native("any")],
        annotation: SymbolTemplate::Fixed("GraphQLJSON", SymbolOrigin::Package(JSON_SCALAR_PACKAGE)),
        shorthand: false,
        nested: false,
    },
];

/// Returns the profile of a scalar kind.
#[must_use]
pub fn scalar_profile(kind: ScalarKind) -> &'static ScalarProfile {
    // PROFILES is laid out in ScalarKind::ALL order
    &PROFILES[kind as usize]
}

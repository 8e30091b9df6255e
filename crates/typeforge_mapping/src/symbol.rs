//! Symbols referenced by generated declarations.

use std::fmt;

use serde::Serialize;

use crate::catalog::CatalogEntry;

/// Where a referenced symbol is declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolOrigin {
    /// Part of the host language or GraphQL runtime; never imported.
    Builtin,
    /// Exported by the GraphQL dialect package (`Field`, `InputType`, `Int`, `Float`).
    Dialect,
    /// Exported by a fixed third-party package.
    Package(&'static str),
    /// Exported by the database client runtime (`Decimal`).
    ClientRuntime,
    /// Another generated input declaration.
    Input,
    /// A generated enum declaration.
    Enum,
}

impl SymbolOrigin {
    /// Returns true if referencing the symbol needs an import.
    #[must_use]
    pub const fn needs_import(self) -> bool {
        !matches!(self, Self::Builtin)
    }
}

/// A named symbol and where it comes from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Symbol {
    /// Symbol name as written in generated code.
    pub name: String,
    /// Declaring location.
    pub origin: SymbolOrigin,
    /// The catalog filter declaration this symbol names, if any.
    #[serde(skip)]
    pub entry: Option<CatalogEntry>,
}

impl Symbol {
    /// Creates a symbol with no catalog entry.
    #[must_use]
    pub fn new(name: impl Into<String>, origin: SymbolOrigin) -> Self {
        Self {
            name: name.into(),
            origin,
            entry: None,
        }
    }

    /// Creates the symbol naming a catalog declaration.
    #[must_use]
    pub fn catalog(entry: CatalogEntry) -> Self {
        Self {
            name: entry.name(),
            origin: SymbolOrigin::Input,
            entry: Some(entry),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

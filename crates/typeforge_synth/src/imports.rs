//! Import manifests.
//!
//! A module path is always derived from the symbol and the configuration by
//! [`ModulePath::for_symbol`]; callers never spell paths themselves. One
//! [`ImportResolver`] serves one output file and is not shared between files.

use std::fmt;

use serde::Serialize;
use tracing::trace;
use typeforge_foundation::{Error, OrderedMap, Result};
use typeforge_mapping::{Symbol, SymbolOrigin};

use crate::config::GeneratorConfig;

/// Module an imported symbol is loaded from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModulePath(String);

impl ModulePath {
    /// Computes the module path of a symbol.
    ///
    /// Returns `None` for builtins, which need no import.
    #[must_use]
    pub fn for_symbol(symbol: &Symbol, config: &GeneratorConfig) -> Option<Self> {
        let path = match symbol.origin {
            SymbolOrigin::Builtin => return None,
            SymbolOrigin::Dialect => config.dialect.package().to_owned(),
            SymbolOrigin::Package(package) => package.to_owned(),
            SymbolOrigin::ClientRuntime => format!("{}/runtime/library", config.prisma_client_import),
            SymbolOrigin::Input => format!("./{}.input", config.file_case.apply(&symbol.name)),
            SymbolOrigin::Enum => format!("./{}.enum", config.file_case.apply(&symbol.name)),
        };
        Some(Self(path))
    }

    /// Returns the path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `{symbol, modulePath}` pair of a manifest.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEntry {
    /// Imported symbol name.
    pub symbol: String,
    /// Module it is imported from.
    pub module_path: ModulePath,
}

/// Collects the imports of one output file, first registration first.
#[derive(Clone, Debug, Default)]
pub struct ImportResolver {
    entries: OrderedMap<String, ModulePath>,
}

impl ImportResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a symbol imported from a path.
    ///
    /// Registering the same pair again is a no-op. Registering a known symbol
    /// with a different path fails with `ConflictingImport` and leaves the
    /// manifest unchanged.
    pub fn register(&mut self, symbol: &str, path: ModulePath) -> Result<()> {
        match self.entries.insert_new(symbol.to_owned(), path.clone()) {
            None => {
                trace!(symbol, path = %path, "registered import");
                Ok(())
            }
            Some(existing) if *existing == path => Ok(()),
            Some(existing) => Err(Error::conflicting_import(
                symbol,
                existing.as_str(),
                path.as_str(),
            )),
        }
    }

    /// Registers a symbol at its conventional path; builtins are skipped.
    pub fn register_symbol(&mut self, symbol: &Symbol, config: &GeneratorConfig) -> Result<()> {
        match ModulePath::for_symbol(symbol, config) {
            Some(path) => self.register(&symbol.name, path),
            None => Ok(()),
        }
    }

    /// Returns true if the symbol is registered.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(&symbol.to_owned())
    }

    /// Returns the number of registered symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the resolver, returning the manifest in first-registration order.
    #[must_use]
    pub fn finalize(self) -> Vec<ImportEntry> {
        self.entries
            .into_entries()
            .into_iter()
            .map(|(symbol, module_path)| ImportEntry {
                symbol,
                module_path,
            })
            .collect()
    }
}

//! Declaration synthesis.
//!
//! [`Synthesizer::synthesize`] walks one descriptor in field order, resolves
//! each visible field, and feeds every referenced symbol to a fresh
//! [`ImportResolver`]. The result is a [`DeclarationRecord`] for the renderer.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, debug_span, trace};
use typeforge_foundation::{ErrorContext, Result};
use typeforge_mapping::{MappingTable, Symbol, SymbolOrigin, catalog};
use typeforge_schema::{InputField, InputKind, InputTypeDescriptor, SchemaRegistry};

use crate::config::GeneratorConfig;
use crate::imports::{ImportEntry, ImportResolver, ModulePath};
use crate::property::ResolvedProperty;
use crate::resolver::FieldResolver;

/// A synthesized declaration, ready to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationRecord {
    /// Declaration name.
    pub name: String,
    /// What the declaration is used for.
    pub kind: InputKind,
    /// Container decorator.
    pub decorator: String,
    /// Properties in schema order.
    pub properties: Vec<ResolvedProperty>,
    /// Import manifest in first-reference order.
    pub imports: Vec<ImportEntry>,
}

impl DeclarationRecord {
    /// Returns a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&ResolvedProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns the module a symbol is imported from.
    #[must_use]
    pub fn import_path(&self, symbol: &str) -> Option<&ModulePath> {
        self.imports
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| &entry.module_path)
    }

    /// Returns every symbol the properties reference, in property order.
    pub fn referenced_symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.properties.iter().flat_map(|p| p.references.iter())
    }

    /// Returns the catalog filter declarations this record references.
    #[must_use]
    pub fn catalog_references(&self) -> Vec<InputTypeDescriptor> {
        catalog::referenced(self.referenced_symbols())
    }

    /// Encodes the record as JSON for an external renderer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds declaration records from descriptors.
#[derive(Clone, Copy, Debug)]
pub struct Synthesizer<'a> {
    resolver: FieldResolver<'a>,
    config: &'a GeneratorConfig,
}

impl<'a> Synthesizer<'a> {
    /// Creates a synthesizer over read-only collaborators.
    #[must_use]
    pub fn new(
        registry: &'a SchemaRegistry,
        table: &'a MappingTable,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            resolver: FieldResolver::new(registry, table, config),
            config,
        }
    }

    /// Returns the field resolver.
    #[must_use]
    pub fn resolver(&self) -> &FieldResolver<'a> {
        &self.resolver
    }

    /// Synthesizes one declaration.
    ///
    /// Any resolution or import failure aborts this declaration; the error
    /// names the declaration and, where known, the field.
    pub fn synthesize(&self, descriptor: &InputTypeDescriptor) -> Result<DeclarationRecord> {
        let span = debug_span!("synthesize", declaration = %descriptor.name);
        let _enter = span.enter();

        let at_declaration = || ErrorContext::new().with_declaration(&descriptor.name);

        let mut imports = ImportResolver::new();
        for name in ["Field", self.config.decorator.as_str()] {
            imports
                .register_symbol(&Symbol::new(name, SymbolOrigin::Dialect), self.config)
                .map_err(|e| e.with_context(at_declaration()))?;
        }

        let kind = descriptor.kind;
        let shadowed: HashSet<&str> =
            if kind.exposes_foreign_keys() || !kind.includes_relations() {
                HashSet::new()
            } else {
                descriptor.foreign_key_columns().collect()
            };

        let mut properties = Vec::with_capacity(descriptor.fields.len());
        for input in &descriptor.fields {
            if !is_visible(input, kind, &shadowed) {
                trace!(field = %input.field.name, "skipped field");
                continue;
            }

            let at_field = || at_declaration().with_field(&input.field.name);
            let property = self
                .resolver
                .resolve_input(input, kind)
                .map_err(|e| e.with_context(at_field()))?;

            for symbol in &property.references {
                if symbol.name == descriptor.name {
                    continue;
                }
                imports
                    .register_symbol(symbol, self.config)
                    .map_err(|e| e.with_context(at_field()))?;
            }
            properties.push(property);
        }

        debug!(
            properties = properties.len(),
            imports = imports.len(),
            "synthesized declaration"
        );

        Ok(DeclarationRecord {
            name: descriptor.name.clone(),
            kind,
            decorator: self.config.decorator.clone(),
            properties,
            imports: imports.finalize(),
        })
    }
}

fn is_visible(input: &InputField, kind: InputKind, shadowed: &HashSet<&str>) -> bool {
    let field = &input.field;
    if field.hidden {
        return false;
    }
    if field.is_relation() {
        kind.includes_relations()
    } else {
        !shadowed.contains(field.name.as_str())
    }
}

//! Field descriptor resolution.
//!
//! The resolver picks a filter kind for a field, validates enum and relation
//! targets against the registry, looks the rule up in the mapping table, and
//! instantiates the rule's templates for the field.

use tracing::trace;
use typeforge_foundation::{Error, Result};
use typeforge_mapping::{MappingTable, RuleKey, Symbol, Target, TypeTerm};
use typeforge_schema::{FieldDescriptor, FieldType, FilterKind, InputField, InputKind, SchemaRegistry};

use crate::config::GeneratorConfig;
use crate::property::{AnnotationFactory, ResolvedProperty, render_union};

/// Resolves fields against a registry and mapping table.
#[derive(Clone, Copy, Debug)]
pub struct FieldResolver<'a> {
    registry: &'a SchemaRegistry,
    table: &'a MappingTable,
    config: &'a GeneratorConfig,
}

impl<'a> FieldResolver<'a> {
    /// Creates a resolver over read-only collaborators.
    #[must_use]
    pub fn new(
        registry: &'a SchemaRegistry,
        table: &'a MappingTable,
        config: &'a GeneratorConfig,
    ) -> Self {
        Self {
            registry,
            table,
            config,
        }
    }

    /// Returns the filter kind a field takes in a declaration of `kind`.
    #[must_use]
    pub fn filter_kind(&self, field: &FieldDescriptor, kind: InputKind) -> FilterKind {
        let relation = field.is_relation();
        match kind {
            InputKind::Where => FilterKind::Filter,
            InputKind::WhereUnique if field.is_unique_key() && !relation => FilterKind::Value,
            InputKind::WhereUnique => FilterKind::Filter,
            InputKind::Create if relation => FilterKind::CreateRelation,
            InputKind::Update if relation => FilterKind::UpdateRelation,
            InputKind::Update
                if !self.config.no_atomic_operations && !field.cardinality.is_list() =>
            {
                FilterKind::AtomicUpdate
            }
            InputKind::Create | InputKind::Update | InputKind::Filter => FilterKind::Value,
            InputKind::OrderBy | InputKind::CountAggregate => FilterKind::SortOrder,
        }
    }

    /// Resolves a field with a derived filter kind.
    pub fn resolve(&self, field: &FieldDescriptor, kind: InputKind) -> Result<ResolvedProperty> {
        self.resolve_with(field, kind, self.filter_kind(field, kind))
    }

    /// Resolves a descriptor field, honouring a pinned filter kind.
    pub fn resolve_input(&self, input: &InputField, kind: InputKind) -> Result<ResolvedProperty> {
        let filter = input
            .filter
            .unwrap_or_else(|| self.filter_kind(&input.field, kind));
        self.resolve_with(&input.field, kind, filter)
    }

    /// Resolves a field with an explicit filter kind.
    pub fn resolve_with(
        &self,
        field: &FieldDescriptor,
        kind: InputKind,
        filter: FilterKind,
    ) -> Result<ResolvedProperty> {
        self.check_target(field)?;

        let nullable = field.nullable && filter != FilterKind::SortOrder;
        let rule = self.table.lookup(RuleKey::for_field(field, filter, nullable))?;
        let target = Target::of(field);

        let mut references = Vec::new();
        let mut values = Vec::with_capacity(rule.terms.len());
        let mut null = false;
        for term in &rule.terms {
            match *term {
                TypeTerm::Native(text) => values.push(text.to_owned()),
                TypeTerm::Symbol(template) => {
                    let symbol = template.instantiate(target)?;
                    values.push(symbol.name.clone());
                    note(&mut references, symbol);
                }
                TypeTerm::EnumLiteral(template) => {
                    let symbol = template.instantiate(target)?;
                    values.push(format!("`${{{}}}`", symbol.name));
                    note(&mut references, symbol);
                }
                TypeTerm::Null => null = self.config.null_in_union(),
            }
        }

        let annotated = rule.annotation.instantiate(target)?;
        let annotation = AnnotationFactory {
            type_name: annotated.name.clone(),
            list: rule.list_annotation,
        };
        note(&mut references, annotated);

        let property = ResolvedProperty {
            name: field.name.clone(),
            declared_type: render_union(&values, rule.list_annotation, null),
            nullable,
            optional: is_optional(field, kind),
            annotation,
            filter,
            references,
        };
        trace!(
            field = %property.name,
            %filter,
            declared_type = %property.declared_type,
            "resolved property"
        );
        Ok(property)
    }

    fn check_target(&self, field: &FieldDescriptor) -> Result<()> {
        match &field.ty {
            FieldType::Scalar(_) => Ok(()),
            FieldType::Enum(name) => self
                .registry
                .find_enum(name)
                .map(|_| ())
                .map_err(|_| Error::unresolved_enum(&field.name, name)),
            FieldType::Relation(relation) => self
                .registry
                .find_model(&relation.target)
                .map(|_| ())
                .map_err(|_| Error::unresolved_relation(&field.name, &relation.target)),
        }
    }
}

fn note(references: &mut Vec<Symbol>, symbol: Symbol) {
    if symbol.origin.needs_import() && !references.contains(&symbol) {
        references.push(symbol);
    }
}

/// Create properties are required unless they may be null, have a default, or are lists.
fn is_optional(field: &FieldDescriptor, kind: InputKind) -> bool {
    match kind {
        InputKind::Create => field.nullable || field.has_default || field.cardinality.is_list(),
        _ => true,
    }
}

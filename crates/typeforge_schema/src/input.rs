//! Input-type descriptors.
//!
//! An [`InputTypeDescriptor`] describes one generated declaration: its name,
//! what it is for ([`InputKind`]), and its fields in schema order. Each field
//! may pin the [`FilterKind`] to use; otherwise the resolver derives one.

use std::fmt;

use serde::{Deserialize, Serialize};
use typeforge_foundation::{Error, Result};

use crate::model::{FieldDescriptor, RelationRef, SchemaModel};

/// What a generated declaration is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    /// Filter records of a model.
    Where,
    /// Select exactly one record by a unique key.
    WhereUnique,
    /// Create a record.
    Create,
    /// Update a record.
    Update,
    /// Sort records, including by related records.
    OrderBy,
    /// Sort by the per-field count aggregate.
    CountAggregate,
    /// A reusable operator container (`StringFilter`, `UserListRelationFilter`, ...).
    Filter,
}

impl InputKind {
    /// Every input kind.
    pub const ALL: [InputKind; 7] = [
        Self::Where,
        Self::WhereUnique,
        Self::Create,
        Self::Update,
        Self::OrderBy,
        Self::CountAggregate,
        Self::Filter,
    ];

    /// Returns the name suffix appended to the model name.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Where => "WhereInput",
            Self::WhereUnique => "WhereUniqueInput",
            Self::Create => "CreateInput",
            Self::Update => "UpdateInput",
            Self::OrderBy => "OrderByWithRelationInput",
            Self::CountAggregate => "CountOrderByAggregateInput",
            Self::Filter => "Filter",
        }
    }

    /// Returns the declaration name for a model (`User` → `UserWhereInput`).
    #[must_use]
    pub fn declaration_name(self, model: &str) -> String {
        format!("{model}{}", self.suffix())
    }

    /// Returns true if raw foreign key columns stay editable next to their relation.
    #[must_use]
    pub const fn exposes_foreign_keys(self) -> bool {
        matches!(self, Self::Update)
    }

    /// Returns true if relation fields appear in declarations of this kind.
    #[must_use]
    pub const fn includes_relations(self) -> bool {
        !matches!(self, Self::CountAggregate)
    }
}

/// The category of operators applicable to one property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    /// A bare value: create/update properties and filter operands.
    Value,
    /// A field filter that also accepts a bare value as equality shorthand.
    Filter,
    /// The nested filter behind a filter's `not` operator.
    NestedFilter,
    /// A sort direction (or related order-by input for relations).
    SortOrder,
    /// A bare value or an atomic update operations object.
    AtomicUpdate,
    /// The related model's where-input (`every`, `some`, `none`, `is`, `isNot`).
    RelationWhere,
    /// Logical combinators (`AND`, `OR`, `NOT`) over the owning where-input.
    Combinator,
    /// Nested create of related records.
    CreateRelation,
    /// Nested update of related records.
    UpdateRelation,
}

impl FilterKind {
    /// Every filter kind.
    pub const ALL: [FilterKind; 9] = [
        Self::Value,
        Self::Filter,
        Self::NestedFilter,
        Self::SortOrder,
        Self::AtomicUpdate,
        Self::RelationWhere,
        Self::Combinator,
        Self::CreateRelation,
        Self::UpdateRelation,
    ];

    /// Returns the serialized spelling (`value`, `nestedFilter`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Filter => "filter",
            Self::NestedFilter => "nestedFilter",
            Self::SortOrder => "sortOrder",
            Self::AtomicUpdate => "atomicUpdate",
            Self::RelationWhere => "relationWhere",
            Self::Combinator => "combinator",
            Self::CreateRelation => "createRelation",
            Self::UpdateRelation => "updateRelation",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field of a descriptor, optionally pinned to a filter kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputField {
    /// The schema field (or filter operator).
    pub field: FieldDescriptor,
    /// Filter kind chosen upstream; derived from the input kind when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterKind>,
}

impl InputField {
    /// Creates a field with a derived filter kind.
    #[must_use]
    pub fn new(field: FieldDescriptor) -> Self {
        Self {
            field,
            filter: None,
        }
    }

    /// Creates a field pinned to a filter kind.
    #[must_use]
    pub fn with_filter(field: FieldDescriptor, filter: FilterKind) -> Self {
        Self {
            field,
            filter: Some(filter),
        }
    }
}

/// Schema-derived description of one generated declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputTypeDescriptor {
    /// Declaration name (e.g. `UserWhereInput`).
    pub name: String,
    /// What the declaration is used for.
    pub kind: InputKind,
    /// The model the declaration belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Fields in schema-declared order.
    #[serde(default)]
    pub fields: Vec<InputField>,
}

impl InputTypeDescriptor {
    /// Creates an empty descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            kind,
            model: None,
            fields: Vec::new(),
        }
    }

    /// Builds the descriptor of a model-level declaration.
    ///
    /// `Where` descriptors start with the `AND`/`OR`/`NOT` combinators, each a
    /// list of the model's own where-input.
    #[must_use]
    pub fn for_model(model: &SchemaModel, kind: InputKind) -> Self {
        let mut descriptor =
            Self::new(kind.declaration_name(&model.name), kind).with_model(model.name.clone());

        if kind == InputKind::Where {
            for combinator in ["AND", "OR", "NOT"] {
                descriptor = descriptor.with_pinned(
                    FieldDescriptor::relation(combinator, RelationRef::to_many(&model.name)),
                    FilterKind::Combinator,
                );
            }
        }

        model
            .fields
            .iter()
            .cloned()
            .fold(descriptor, InputTypeDescriptor::with_field)
    }

    /// Decodes a JSON descriptor.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::parse(e.to_string()))
    }

    /// Sets the owning model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Appends a field whose filter kind is derived.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(InputField::new(field));
        self
    }

    /// Appends a field pinned to a filter kind.
    #[must_use]
    pub fn with_pinned(mut self, field: FieldDescriptor, filter: FilterKind) -> Self {
        self.fields.push(InputField::with_filter(field, filter));
        self
    }

    /// Returns the names of scalar columns that shadow a relation in this descriptor.
    pub fn foreign_key_columns(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter_map(|f| f.field.relation_ref())
            .flat_map(|relation| relation.foreign_keys.iter().map(String::as_str))
    }
}

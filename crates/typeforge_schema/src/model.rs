//! Schema definitions for models, fields, relations, and enums.
//!
//! These are produced by upstream schema analysis and are immutable once
//! loaded into a [`SchemaRegistry`](crate::SchemaRegistry).

use serde::{Deserialize, Serialize};
use typeforge_foundation::{Cardinality, ScalarKind};

/// The declared type of a field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// A built-in scalar.
    Scalar(ScalarKind),
    /// A schema enumeration, by name.
    Enum(String),
    /// A relation to another model.
    Relation(RelationRef),
}

/// How many records sit on the far side of a relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationArity {
    /// At most one related record.
    ToOne,
    /// Any number of related records.
    ToMany,
}

/// Reference from a relation field to its target model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationRef {
    /// Name of the related model.
    pub target: String,
    /// To-one or to-many.
    pub arity: RelationArity,
    /// Scalar columns on this model that store the related identifier.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub foreign_keys: Vec<String>,
    /// The opposite relation field on the target model, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_field: Option<String>,
}

impl RelationRef {
    /// Creates a to-one relation reference.
    #[must_use]
    pub fn to_one(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            arity: RelationArity::ToOne,
            foreign_keys: Vec::new(),
            back_field: None,
        }
    }

    /// Creates a to-many relation reference.
    #[must_use]
    pub fn to_many(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            arity: RelationArity::ToMany,
            foreign_keys: Vec::new(),
            back_field: None,
        }
    }

    /// Adds a foreign key column stored on the owning model.
    #[must_use]
    pub fn with_foreign_key(mut self, column: impl Into<String>) -> Self {
        self.foreign_keys.push(column.into());
        self
    }

    /// Sets the opposite relation field.
    #[must_use]
    pub fn with_back_field(mut self, field: impl Into<String>) -> Self {
        self.back_field = Some(field.into());
        self
    }
}

/// One declared field of a model (or one operator of a filter declaration).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field name as it appears in the generated declaration.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: FieldType,
    /// Single value or ordered sequence.
    #[serde(default)]
    pub cardinality: Cardinality,
    /// Whether the field may hold null.
    #[serde(default)]
    pub nullable: bool,
    /// Whether the field is the model identifier.
    #[serde(default)]
    pub is_id: bool,
    /// Whether the field carries a uniqueness constraint.
    #[serde(default)]
    pub is_unique: bool,
    /// Whether the schema supplies a default value.
    #[serde(default)]
    pub has_default: bool,
    /// Excluded from every generated declaration.
    #[serde(default)]
    pub hidden: bool,
}

impl FieldDescriptor {
    /// Creates a required single-valued field of the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            cardinality: Cardinality::Single,
            nullable: false,
            is_id: false,
            is_unique: false,
            has_default: false,
            hidden: false,
        }
    }

    /// Creates a scalar field.
    #[must_use]
    pub fn scalar(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::new(name, FieldType::Scalar(kind))
    }

    /// Creates an enum-typed field.
    #[must_use]
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Enum(enum_name.into()))
    }

    /// Creates a relation field; to-many relations are list-valued.
    #[must_use]
    pub fn relation(name: impl Into<String>, relation: RelationRef) -> Self {
        let cardinality = match relation.arity {
            RelationArity::ToOne => Cardinality::Single,
            RelationArity::ToMany => Cardinality::List,
        };
        Self {
            cardinality,
            ..Self::new(name, FieldType::Relation(relation))
        }
    }

    /// Marks the field as list-valued.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.cardinality = Cardinality::List;
        self
    }

    /// Marks the field as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Marks the field as the model identifier.
    #[must_use]
    pub fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    /// Marks the field as unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    /// Marks the field as having a schema default.
    #[must_use]
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Marks the field as hidden from generated declarations.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Returns the scalar kind, if this is a scalar field.
    #[must_use]
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self.ty {
            FieldType::Scalar(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns the enum name, if this is an enum field.
    #[must_use]
    pub fn enum_name(&self) -> Option<&str> {
        match &self.ty {
            FieldType::Enum(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the relation reference, if this is a relation field.
    #[must_use]
    pub fn relation_ref(&self) -> Option<&RelationRef> {
        match &self.ty {
            FieldType::Relation(relation) => Some(relation),
            _ => None,
        }
    }

    /// Returns true if this field is a relation.
    #[must_use]
    pub fn is_relation(&self) -> bool {
        matches!(self.ty, FieldType::Relation(_))
    }

    /// Returns true if the field identifies a record on its own.
    #[must_use]
    pub fn is_unique_key(&self) -> bool {
        (self.is_id || self.is_unique) && !self.cardinality.is_list()
    }
}

/// A model declared in the schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModel {
    /// Model name (e.g. `User`).
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl SchemaModel {
    /// Creates a model with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the model.
    #[must_use]
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// An enumeration declared in the schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    /// Enum name (e.g. `Role`).
    pub name: String,
    /// Member names in declaration order.
    #[serde(default)]
    pub values: Vec<String>,
}

impl EnumDef {
    /// Creates an enum with the given members.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

//! Rule vocabulary: keys, type terms, and symbol templates.
//!
//! A [`TypeMappingRule`] never names a concrete model or enum. It holds
//! [`SymbolTemplate`]s that are instantiated against a [`Target`] (the scalar
//! kind, enum name, or related model of one field) when a property is resolved.

use std::fmt;

use typeforge_foundation::naming::capitalize;
use typeforge_foundation::{Cardinality, Error, Result, ScalarKind};
use typeforge_schema::{FieldDescriptor, FieldType, FilterKind};

use crate::catalog::{CatalogEntry, FilterCore};
use crate::symbol::{Symbol, SymbolOrigin};

// =============================================================================
// Keys
// =============================================================================

/// What a field's values are, as far as the mapping table is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subject {
    /// A built-in scalar.
    Scalar(ScalarKind),
    /// Any schema enumeration.
    Enum,
    /// Any relation.
    Relation,
}

impl Subject {
    /// Every subject.
    pub const ALL: [Subject; 11] = [
        Self::Scalar(ScalarKind::String),
        Self::Scalar(ScalarKind::Int),
        Self::Scalar(ScalarKind::Float),
        Self::Scalar(ScalarKind::Boolean),
        Self::Scalar(ScalarKind::DateTime),
        Self::Scalar(ScalarKind::Bytes),
        Self::Scalar(ScalarKind::Decimal),
        Self::Scalar(ScalarKind::BigInt),
        Self::Scalar(ScalarKind::Json),
        Self::Enum,
        Self::Relation,
    ];

    /// Returns the subject of a field.
    #[must_use]
    pub fn of(field: &FieldDescriptor) -> Self {
        match field.ty {
            FieldType::Scalar(kind) => Self::Scalar(kind),
            FieldType::Enum(_) => Self::Enum,
            FieldType::Relation(_) => Self::Relation,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::Enum => f.write_str("enum"),
            Self::Relation => f.write_str("relation"),
        }
    }
}

/// Lookup key of the mapping table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleKey {
    /// What the field holds.
    pub subject: Subject,
    /// Which operators apply.
    pub filter: FilterKind,
    /// Single value or sequence.
    pub cardinality: Cardinality,
    /// Whether `null` is an accepted value.
    pub nullable: bool,
}

impl RuleKey {
    /// Creates a key.
    #[must_use]
    pub const fn new(
        subject: Subject,
        filter: FilterKind,
        cardinality: Cardinality,
        nullable: bool,
    ) -> Self {
        Self {
            subject,
            filter,
            cardinality,
            nullable,
        }
    }

    /// Creates the key for a field, with nullability decided by the caller.
    #[must_use]
    pub fn for_field(field: &FieldDescriptor, filter: FilterKind, nullable: bool) -> Self {
        Self::new(Subject::of(field), filter, field.cardinality, nullable)
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}", self.subject, self.filter, self.cardinality)?;
        if self.nullable {
            f.write_str(", nullable")?;
        }
        f.write_str(")")
    }
}

// =============================================================================
// Targets
// =============================================================================

/// The concrete thing a rule is instantiated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target<'a> {
    /// A scalar field.
    Scalar(ScalarKind),
    /// An enum field, by enum name.
    Enum(&'a str),
    /// A relation field.
    Relation {
        /// Related model.
        model: &'a str,
        /// Opposite relation field on the related model.
        back_field: Option<&'a str>,
    },
}

impl<'a> Target<'a> {
    /// Returns the target of a field.
    #[must_use]
    pub fn of(field: &'a FieldDescriptor) -> Self {
        match &field.ty {
            FieldType::Scalar(kind) => Self::Scalar(*kind),
            FieldType::Enum(name) => Self::Enum(name),
            FieldType::Relation(relation) => Self::Relation {
                model: &relation.target,
                back_field: relation.back_field.as_deref(),
            },
        }
    }

    /// Returns the matching rule subject.
    #[must_use]
    pub const fn subject(self) -> Subject {
        match self {
            Self::Scalar(kind) => Subject::Scalar(kind),
            Self::Enum(_) => Subject::Enum,
            Self::Relation { .. } => Subject::Relation,
        }
    }

    fn core(self) -> Option<FilterCore> {
        match self {
            Self::Scalar(kind) => Some(FilterCore::Scalar(kind)),
            Self::Enum(name) => Some(FilterCore::Enum(name.to_owned())),
            Self::Relation { .. } => None,
        }
    }

    fn model(self) -> Option<(&'a str, Option<&'a str>)> {
        match self {
            Self::Relation { model, back_field } => Some((model, back_field)),
            _ => None,
        }
    }
}

impl fmt::Display for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::Enum(name) => write!(f, "enum {name}"),
            Self::Relation { model, .. } => write!(f, "relation to {model}"),
        }
    }
}

// =============================================================================
// Templates and terms
// =============================================================================

/// A symbol whose name depends on the field it is instantiated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolTemplate {
    /// A symbol with a fixed name.
    Fixed(&'static str, SymbolOrigin),
    /// `[Nested]<Base>[Nullable]Filter` or `[Nested]Enum<E>[Nullable]Filter`.
    FieldFilter {
        /// Nested variant used behind `not`.
        nested: bool,
        /// Nullable variant.
        nullable: bool,
    },
    /// `<Base>NullableListFilter` or `Enum<E>NullableListFilter`.
    ListFilter,
    /// `[Nullable]<Base>FieldUpdateOperationsInput`.
    UpdateOperations {
        /// Nullable variant.
        nullable: bool,
    },
    /// The enum declaration itself.
    EnumDeclaration,
    /// `<T>[Nullable]RelationFilter`.
    RelationFilter {
        /// Nullable variant.
        nullable: bool,
    },
    /// `<T>ListRelationFilter`.
    ListRelationFilter,
    /// `<T>WhereInput`.
    WhereInput,
    /// `<T>OrderByWithRelationInput`.
    OrderByWithRelation,
    /// `<T>OrderByRelationAggregateInput`.
    OrderByRelationAggregate,
    /// `<T>CreateNested{One|Many}[Without<Back>]Input`.
    CreateNested {
        /// To-many variant.
        many: bool,
    },
    /// `<T>Update{One|Many}[Without<Back>]NestedInput`.
    UpdateNested {
        /// To-many variant.
        many: bool,
    },
}

impl SymbolTemplate {
    /// Instantiates the template for a target.
    ///
    /// Fails with `UnmappedCombination` when the template cannot name anything
    /// for the target (an enum template applied to a scalar, for instance).
    pub fn instantiate(self, target: Target<'_>) -> Result<Symbol> {
        let mismatch = || Error::unmapped(format!("{self:?} for {target}"));
        let symbol = match self {
            Self::Fixed(name, origin) => Symbol::new(name, origin),
            Self::FieldFilter { nested, nullable } => Symbol::catalog(CatalogEntry::FieldFilter {
                core: target.core().ok_or_else(mismatch)?,
                nested,
                nullable,
            }),
            Self::ListFilter => Symbol::catalog(CatalogEntry::ListFilter {
                core: target.core().ok_or_else(mismatch)?,
            }),
            Self::UpdateOperations { nullable } => {
                Symbol::catalog(CatalogEntry::UpdateOperations {
                    core: target.core().ok_or_else(mismatch)?,
                    nullable,
                })
            }
            Self::EnumDeclaration => match target {
                Target::Enum(name) => Symbol::new(name, SymbolOrigin::Enum),
                _ => return Err(mismatch()),
            },
            Self::RelationFilter { nullable } => {
                let (model, _) = target.model().ok_or_else(mismatch)?;
                Symbol::catalog(CatalogEntry::RelationFilter {
                    model: model.to_owned(),
                    nullable,
                })
            }
            Self::ListRelationFilter => {
                let (model, _) = target.model().ok_or_else(mismatch)?;
                Symbol::catalog(CatalogEntry::ListRelationFilter {
                    model: model.to_owned(),
                })
            }
            Self::WhereInput => {
                let (model, _) = target.model().ok_or_else(mismatch)?;
                Symbol::new(format!("{model}WhereInput"), SymbolOrigin::Input)
            }
            Self::OrderByWithRelation => {
                let (model, _) = target.model().ok_or_else(mismatch)?;
                Symbol::new(format!("{model}OrderByWithRelationInput"), SymbolOrigin::Input)
            }
            Self::OrderByRelationAggregate => {
                let (model, _) = target.model().ok_or_else(mismatch)?;
                Symbol::new(
                    format!("{model}OrderByRelationAggregateInput"),
                    SymbolOrigin::Input,
                )
            }
            Self::CreateNested { many } => {
                let (model, back) = target.model().ok_or_else(mismatch)?;
                Symbol::new(
                    format!("{model}CreateNested{}{}Input", arity(many), without(back)),
                    SymbolOrigin::Input,
                )
            }
            Self::UpdateNested { many } => {
                let (model, back) = target.model().ok_or_else(mismatch)?;
                Symbol::new(
                    format!("{model}Update{}{}NestedInput", arity(many), without(back)),
                    SymbolOrigin::Input,
                )
            }
        };
        Ok(symbol)
    }
}

fn arity(many: bool) -> &'static str {
    if many { "Many" } else { "One" }
}

fn without(back_field: Option<&str>) -> String {
    back_field
        .map(|field| format!("Without{}", capitalize(field)))
        .unwrap_or_default()
}

/// One member of a property's type union.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTerm {
    /// A host-language type (`string`, `number`, `Date`, ...).
    Native(&'static str),
    /// A referenced symbol used as a type.
    Symbol(SymbolTemplate),
    /// The string-literal union of an enum's members.
    EnumLiteral(SymbolTemplate),
    /// The `null` literal.
    Null,
}

impl TypeTerm {
    /// Returns the symbol template this term references, if any.
    #[must_use]
    pub const fn template(self) -> Option<SymbolTemplate> {
        match self {
            Self::Symbol(template) | Self::EnumLiteral(template) => Some(template),
            Self::Native(_) | Self::Null => None,
        }
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Distinguishing behaviour of a rule, kept for inspection and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialCase {
    /// Date values are annotated as the generic `Date` scalar.
    DateLeakGuard,
    /// A bare value is accepted in place of the filter object.
    EqualityShorthand,
    /// To-one relation filter unioned with the related where-input.
    RelationWhereUnion,
    /// To-many relation filter exposing `every`/`some`/`none`.
    ListRelationWrapper,
    /// Enum filter that also imports the enum declaration.
    EnumDeclarationImport,
    /// Sequence of scalars rather than a single scalar.
    ScalarSequence,
    /// JSON values route to the structural JSON filter.
    JsonStructural,
}

/// How one key maps to a property type and annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMappingRule {
    /// Members of the declared type union, in output order.
    pub terms: Vec<TypeTerm>,
    /// The annotation factory's type.
    pub annotation: SymbolTemplate,
    /// Whether the value terms and the annotation are sequences.
    pub list_annotation: bool,
    /// Distinguishing behaviour, if any.
    pub special: Option<SpecialCase>,
}

impl TypeMappingRule {
    /// Returns true if `null` is one of the terms.
    #[must_use]
    pub fn accepts_null(&self) -> bool {
        self.terms.contains(&TypeTerm::Null)
    }
}

//! Filter declarations referenced by model-level declarations.
//!
//! Every filter symbol the mapping table can name carries a [`CatalogEntry`].
//! The entry rebuilds the `Filter`-kind [`InputTypeDescriptor`] for that
//! symbol, so a generation run can close over everything its declarations
//! import.

use typeforge_foundation::{OrderedMap, ScalarKind};
use typeforge_schema::{
    FieldDescriptor, FieldType, FilterKind, InputKind, InputTypeDescriptor, RelationRef,
};

use crate::symbol::Symbol;

/// JSON filter operators, in output order.
pub const JSON_OPERATORS: [&str; 13] = [
    "equals",
    "path",
    "string_contains",
    "string_starts_with",
    "string_ends_with",
    "array_starts_with",
    "array_ends_with",
    "array_contains",
    "lt",
    "lte",
    "gt",
    "gte",
    "not",
];

const ORDERING_OPERATORS: [&str; 4] = ["lt", "lte", "gt", "gte"];
const TEXT_OPERATORS: [&str; 3] = ["contains", "startsWith", "endsWith"];
const ARITHMETIC_OPERATORS: [&str; 4] = ["increment", "decrement", "multiply", "divide"];

/// The value type a scalar or enum filter operates on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterCore {
    /// A scalar kind.
    Scalar(ScalarKind),
    /// An enum, by name.
    Enum(String),
}

impl FilterCore {
    /// Returns the name prefix (`String`, `Bool`, `EnumRole`).
    #[must_use]
    pub fn prefix(&self) -> String {
        match self {
            Self::Scalar(kind) => kind.base_name().to_owned(),
            Self::Enum(name) => format!("Enum{name}"),
        }
    }

    fn operand(&self, name: &str) -> FieldDescriptor {
        let ty = match self {
            Self::Scalar(kind) => FieldType::Scalar(*kind),
            Self::Enum(name) => FieldType::Enum(name.clone()),
        };
        FieldDescriptor::new(name, ty)
    }
}

/// One filter declaration the catalog can build.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CatalogEntry {
    /// Scalar or enum field filter.
    FieldFilter {
        /// Operand type.
        core: FilterCore,
        /// Nested variant behind `not`.
        nested: bool,
        /// Nullable variant.
        nullable: bool,
    },
    /// Filter over a scalar or enum list.
    ListFilter {
        /// Element type.
        core: FilterCore,
    },
    /// Atomic update operations.
    UpdateOperations {
        /// Operand type.
        core: FilterCore,
        /// Nullable variant.
        nullable: bool,
    },
    /// To-one relation filter.
    RelationFilter {
        /// Related model.
        model: String,
        /// Nullable variant.
        nullable: bool,
    },
    /// To-many relation filter.
    ListRelationFilter {
        /// Related model.
        model: String,
    },
}

fn nullable_part(nullable: bool) -> &'static str {
    if nullable { "Nullable" } else { "" }
}

impl CatalogEntry {
    /// Returns the declaration name.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::FieldFilter {
                core,
                nested,
                nullable,
            } => format!(
                "{}{}{}Filter",
                if *nested { "Nested" } else { "" },
                core.prefix(),
                nullable_part(*nullable)
            ),
            Self::ListFilter { core } => format!("{}NullableListFilter", core.prefix()),
            Self::UpdateOperations { core, nullable } => format!(
                "{}{}FieldUpdateOperationsInput",
                nullable_part(*nullable),
                core.prefix()
            ),
            Self::RelationFilter { model, nullable } => {
                format!("{model}{}RelationFilter", nullable_part(*nullable))
            }
            Self::ListRelationFilter { model } => format!("{model}ListRelationFilter"),
        }
    }

    /// Builds the declaration's descriptor.
    #[must_use]
    pub fn descriptor(&self) -> InputTypeDescriptor {
        let descriptor = InputTypeDescriptor::new(self.name(), InputKind::Filter);
        match self {
            Self::FieldFilter {
                core: FilterCore::Scalar(ScalarKind::Json),
                ..
            } => json_filter(descriptor),
            Self::FieldFilter { core, nullable, .. } => field_filter(descriptor, core, *nullable),
            Self::ListFilter { core } => list_filter(descriptor, core),
            Self::UpdateOperations { core, nullable } => {
                update_operations(descriptor, core, *nullable)
            }
            Self::RelationFilter { model, nullable } => ["is", "isNot"]
                .into_iter()
                .fold(descriptor.with_model(model.clone()), |d, op| {
                    let mut field = FieldDescriptor::relation(op, RelationRef::to_one(model));
                    field.nullable = *nullable;
                    d.with_pinned(field, FilterKind::RelationWhere)
                }),
            Self::ListRelationFilter { model } => ["every", "some", "none"]
                .into_iter()
                .fold(descriptor.with_model(model.clone()), |d, op| {
                    d.with_pinned(
                        FieldDescriptor::relation(op, RelationRef::to_one(model)),
                        FilterKind::RelationWhere,
                    )
                }),
        }
    }
}

fn value(descriptor: InputTypeDescriptor, field: FieldDescriptor) -> InputTypeDescriptor {
    descriptor.with_pinned(field, FilterKind::Value)
}

fn with_nullability(field: FieldDescriptor, nullable: bool) -> FieldDescriptor {
    if nullable { field.nullable() } else { field }
}

fn field_filter(
    mut descriptor: InputTypeDescriptor,
    core: &FilterCore,
    nullable: bool,
) -> InputTypeDescriptor {
    descriptor = value(descriptor, with_nullability(core.operand("equals"), nullable));

    let kind = match core {
        FilterCore::Scalar(kind) => Some(*kind),
        FilterCore::Enum(_) => None,
    };

    if kind != Some(ScalarKind::Boolean) {
        for op in ["in", "notIn"] {
            descriptor = value(descriptor, with_nullability(core.operand(op).list(), nullable));
        }
    }
    if kind.is_some_and(ScalarKind::is_ordered) {
        descriptor = ORDERING_OPERATORS
            .into_iter()
            .fold(descriptor, |d, op| value(d, core.operand(op)));
    }
    if kind == Some(ScalarKind::String) {
        descriptor = TEXT_OPERATORS
            .into_iter()
            .fold(descriptor, |d, op| value(d, core.operand(op)));
    }

    descriptor.with_pinned(
        with_nullability(core.operand("not"), nullable),
        FilterKind::NestedFilter,
    )
}

fn json_filter(descriptor: InputTypeDescriptor) -> InputTypeDescriptor {
    JSON_OPERATORS.into_iter().fold(descriptor, |d, op| match op {
        "path" => value(d, FieldDescriptor::scalar(op, ScalarKind::String).list()),
        "string_contains" | "string_starts_with" | "string_ends_with" => {
            value(d, FieldDescriptor::scalar(op, ScalarKind::String))
        }
        "not" => d.with_pinned(
            FieldDescriptor::scalar(op, ScalarKind::Json),
            FilterKind::NestedFilter,
        ),
        _ => value(d, FieldDescriptor::scalar(op, ScalarKind::Json)),
    })
}

fn list_filter(descriptor: InputTypeDescriptor, core: &FilterCore) -> InputTypeDescriptor {
    let descriptor = value(descriptor, core.operand("equals").list().nullable());
    let descriptor = value(descriptor, core.operand("has").nullable());
    let descriptor = ["hasEvery", "hasSome"]
        .into_iter()
        .fold(descriptor, |d, op| value(d, core.operand(op).list()));
    value(descriptor, FieldDescriptor::scalar("isEmpty", ScalarKind::Boolean))
}

fn update_operations(
    descriptor: InputTypeDescriptor,
    core: &FilterCore,
    nullable: bool,
) -> InputTypeDescriptor {
    let descriptor = value(descriptor, with_nullability(core.operand("set"), nullable));
    match core {
        FilterCore::Scalar(kind) if kind.is_numeric() => ARITHMETIC_OPERATORS
            .into_iter()
            .fold(descriptor, |d, op| value(d, core.operand(op))),
        _ => descriptor,
    }
}

/// Returns the catalog descriptors named by `symbols`, first occurrence first.
pub fn referenced<'a>(symbols: impl IntoIterator<Item = &'a Symbol>) -> Vec<InputTypeDescriptor> {
    let mut seen = OrderedMap::new();
    for entry in symbols.into_iter().filter_map(|s| s.entry.as_ref()) {
        seen.insert_new(entry.clone(), ());
    }
    seen.keys().map(CatalogEntry::descriptor).collect()
}

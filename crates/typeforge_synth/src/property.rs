//! Resolved output properties.

use serde::{Serialize, Serializer};
use typeforge_mapping::Symbol;
use typeforge_schema::FilterKind;

/// The type named by a property's metadata annotation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnnotationFactory {
    /// GraphQL type name (`StringFilter`, `Int`, `Date`).
    pub type_name: String,
    /// Whether the annotation names a list of that type.
    pub list: bool,
}

impl AnnotationFactory {
    /// Returns the factory expression (`() => Int`, `() => [String]`).
    #[must_use]
    pub fn expression(&self) -> String {
        if self.list {
            format!("() => [{}]", self.type_name)
        } else {
            format!("() => {}", self.type_name)
        }
    }
}

impl Serialize for AnnotationFactory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.expression())
    }
}

/// One property of a synthesized declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProperty {
    /// Property name.
    pub name: String,
    /// Declared type, possibly a union (`StringFilter | string`).
    pub declared_type: String,
    /// Whether the value may be null.
    pub nullable: bool,
    /// Whether the property may be omitted.
    pub optional: bool,
    /// Metadata annotation.
    pub annotation: AnnotationFactory,
    /// The filter kind the property was resolved with.
    pub filter: FilterKind,
    /// Imported symbols the property references, first use first.
    pub references: Vec<Symbol>,
}

impl ResolvedProperty {
    /// Returns true if the property references a symbol by name.
    #[must_use]
    pub fn references_symbol(&self, name: &str) -> bool {
        self.references.iter().any(|s| s.name == name)
    }
}

/// Renders type terms as a union, wrapping value terms in `Array<...>` for lists.
pub(crate) fn render_union(values: &[String], list: bool, null: bool) -> String {
    let mut union = values.join(" | ");
    if list {
        union = format!("Array<{union}>");
    }
    if null {
        union.push_str(" | null");
    }
    union
}

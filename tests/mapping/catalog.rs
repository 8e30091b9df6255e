//! Integration tests for the filter catalog

use typeforge_foundation::ScalarKind;
use typeforge_mapping::catalog::{self, JSON_OPERATORS};
use typeforge_mapping::{CatalogEntry, FilterCore, SymbolTemplate, Target};
use typeforge_schema::{FilterKind, InputKind};

fn names(entry: &CatalogEntry) -> Vec<String> {
    entry
        .descriptor()
        .fields
        .into_iter()
        .map(|f| f.field.name)
        .collect()
}

#[test]
fn template_and_catalog_names_agree() {
    let template = SymbolTemplate::FieldFilter {
        nested: true,
        nullable: true,
    };
    let symbol = template.instantiate(Target::Scalar(ScalarKind::DateTime)).unwrap();
    let entry = symbol.entry.clone().unwrap();
    assert_eq!(symbol.name, "NestedDateTimeNullableFilter");
    assert_eq!(entry.descriptor().name, symbol.name);
}

#[test]
fn datetime_filter_operators() {
    let entry = CatalogEntry::FieldFilter {
        core: FilterCore::Scalar(ScalarKind::DateTime),
        nested: false,
        nullable: false,
    };
    assert_eq!(
        names(&entry),
        vec!["equals", "in", "notIn", "lt", "lte", "gt", "gte", "not"]
    );
}

#[test]
fn bytes_filter_is_unordered() {
    let entry = CatalogEntry::FieldFilter {
        core: FilterCore::Scalar(ScalarKind::Bytes),
        nested: false,
        nullable: false,
    };
    assert_eq!(names(&entry), vec!["equals", "in", "notIn", "not"]);
}

#[test]
fn json_nullable_filter_matches_operator_list() {
    let entry = CatalogEntry::FieldFilter {
        core: FilterCore::Scalar(ScalarKind::Json),
        nested: false,
        nullable: true,
    };
    let descriptor = entry.descriptor();
    assert_eq!(descriptor.name, "JsonNullableFilter");
    assert_eq!(descriptor.kind, InputKind::Filter);
    assert_eq!(names(&entry), JSON_OPERATORS.to_vec());
    let not = descriptor.fields.last().unwrap();
    assert_eq!(not.filter, Some(FilterKind::NestedFilter));
    assert!(!not.field.nullable);
}

#[test]
fn list_filters() {
    let entry = CatalogEntry::ListFilter {
        core: FilterCore::Enum("Role".into()),
    };
    assert_eq!(entry.name(), "EnumRoleNullableListFilter");
    assert_eq!(
        names(&entry),
        vec!["equals", "has", "hasEvery", "hasSome", "isEmpty"]
    );
}

#[test]
fn relation_filters_belong_to_the_related_model() {
    let entry = CatalogEntry::RelationFilter {
        model: "User".into(),
        nullable: true,
    };
    let descriptor = entry.descriptor();
    assert_eq!(descriptor.name, "UserNullableRelationFilter");
    assert_eq!(descriptor.model.as_deref(), Some("User"));
    assert_eq!(names(&entry), vec!["is", "isNot"]);
    assert!(descriptor.fields.iter().all(|f| f.field.nullable));
}

#[test]
fn referenced_skips_non_catalog_symbols() {
    let where_input = SymbolTemplate::WhereInput
        .instantiate(Target::Relation {
            model: "User",
            back_field: None,
        })
        .unwrap();
    let list = SymbolTemplate::ListRelationFilter
        .instantiate(Target::Relation {
            model: "User",
            back_field: None,
        })
        .unwrap();
    let descriptors = catalog::referenced([&where_input, &list]);
    assert_eq!(descriptors.len(), 1);
    assert_eq!(descriptors[0].name, "UserListRelationFilter");
}

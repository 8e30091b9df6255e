//! Integration tests for the schema registry

use typeforge_foundation::{ErrorKind, LookupKind, ScalarKind};
use typeforge_schema::{FieldType, RelationArity, SchemaRegistry};

const BLOG: &str = r#"{
    "models": [
        {
            "name": "User",
            "fields": [
                { "name": "id", "type": { "scalar": "String" }, "isId": true },
                { "name": "role", "type": { "enum": "Role" }, "hasDefault": true },
                { "name": "posts", "type": { "relation": { "target": "Post", "arity": "toMany", "backField": "author" } }, "cardinality": "list" }
            ]
        },
        {
            "name": "Post",
            "fields": [
                { "name": "id", "type": { "scalar": "Int" }, "isId": true },
                { "name": "author", "type": { "relation": { "target": "User", "arity": "toOne", "foreignKeys": ["authorId"], "backField": "posts" } } },
                { "name": "authorId", "type": { "scalar": "String" } },
                { "name": "tags", "type": { "scalar": "String" }, "cardinality": "list" }
            ]
        }
    ],
    "enums": [ { "name": "Role", "values": ["USER", "ADMIN"] } ]
}"#;

#[test]
fn loads_models_and_enums_from_json() {
    let registry = SchemaRegistry::from_json(BLOG).unwrap();
    assert_eq!(registry.model_count(), 2);

    let post = registry.find_model("Post").unwrap();
    let author = post.field("author").unwrap().relation_ref().unwrap();
    assert_eq!(author.arity, RelationArity::ToOne);
    assert_eq!(author.foreign_keys, vec!["authorId"]);
    assert!(post.field("tags").unwrap().cardinality.is_list());

    let role = registry.find_enum("Role").unwrap();
    assert_eq!(role.values, vec!["USER", "ADMIN"]);
}

#[test]
fn field_flags_default_to_false() {
    let registry = SchemaRegistry::from_json(BLOG).unwrap();
    let user = registry.find_model("User").unwrap();
    let id = user.field("id").unwrap();
    assert!(id.is_id);
    assert!(!id.nullable);
    assert!(!id.hidden);
    assert_eq!(id.ty, FieldType::Scalar(ScalarKind::String));
    assert!(user.field("role").unwrap().has_default);
}

#[test]
fn models_keep_document_order() {
    let registry = SchemaRegistry::from_json(BLOG).unwrap();
    let names: Vec<_> = registry.models().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["User", "Post"]);
}

#[test]
fn lookups_fail_with_not_found() {
    let registry = SchemaRegistry::from_json(BLOG).unwrap();
    let err = registry.find_enum("Status").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::NotFound { what: LookupKind::Enum, .. }
    ));
}

#[test]
fn registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SchemaRegistry>();
}

#[test]
fn malformed_document_is_a_parse_error() {
    let err = SchemaRegistry::from_json(r#"{ "models": [ { "name": 3 } ] }"#).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse(_)));
}

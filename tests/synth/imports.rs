//! Import manifests of synthesized declarations.

use typeforge_foundation::{ErrorKind, ScalarKind};
use typeforge_schema::{
    EnumDef, FieldDescriptor, InputKind, InputTypeDescriptor, SchemaModel, SchemaRegistry,
};
use typeforge_synth::{Dialect, FileCase, Generator, GeneratorConfig, ImportResolver, ModulePath};
use typeforge_mapping::{Symbol, SymbolOrigin};

use crate::fixtures::{registry, synthesize, user};

fn symbols(record: &typeforge_synth::DeclarationRecord) -> Vec<&str> {
    record.imports.iter().map(|e| e.symbol.as_str()).collect()
}

#[test]
fn enum_where_imports_filter_and_declaration() {
    let record = synthesize(&user(), InputKind::Where);
    assert_eq!(
        record.import_path("EnumRoleFilter").map(ModulePath::as_str),
        Some("./EnumRoleFilter.input")
    );
    assert_eq!(
        record.import_path("Role").map(ModulePath::as_str),
        Some("./Role.enum")
    );
}

#[test]
fn manifest_follows_first_reference_order() {
    let record = synthesize(&user(), InputKind::Where);
    assert_eq!(
        symbols(&record),
        vec![
            "Field",
            "InputType",
            "StringFilter",
            "StringNullableFilter",
            "EnumRoleFilter",
            "Role",
            "IntNullableFilter",
            "FloatFilter",
            "JsonNullableFilter",
            "PostListRelationFilter",
            "UserListRelationFilter",
        ]
    );
}

#[test]
fn create_imports_dialect_scalars_only() {
    let record = synthesize(&user(), InputKind::Create);
    assert_eq!(
        symbols(&record),
        vec![
            "Field",
            "InputType",
            "Role",
            "Int",
            "Float",
            "GraphQLJSON",
            "PostCreateNestedManyWithoutAuthorInput",
            "UserCreateNestedManyWithoutFollowingInput",
            "UserCreateNestedManyWithoutFollowersInput",
        ]
    );
}

#[test]
fn manifest_has_no_duplicate_symbols() {
    let generator = crate::fixtures::generator();
    let report = generator.run_closed(generator.model_descriptors(), 3);
    for record in &report.records {
        let mut seen = std::collections::HashSet::new();
        for entry in &record.imports {
            assert!(seen.insert(&entry.symbol), "{} imports {} twice", record.name, entry.symbol);
        }
    }
}

#[test]
fn conflicting_sources_fail_the_declaration() {
    let price = SchemaModel::new("Price")
        .with_field(FieldDescriptor::enumeration("currency", "Decimal"))
        .with_field(FieldDescriptor::scalar("amount", ScalarKind::Decimal));
    let registry = SchemaRegistry::new()
        .with_enum(EnumDef::new("Decimal", ["EUR", "USD"]))
        .with_model(price.clone());
    let generator = Generator::new(registry, GeneratorConfig::default());

    let err = generator
        .synthesize(&InputTypeDescriptor::for_model(&price, InputKind::Create))
        .unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::ConflictingImport {
            symbol: "Decimal".into(),
            existing: "./Decimal.enum".into(),
            requested: "@prisma/client/runtime/library".into(),
        }
    );
    let context = err.context.unwrap();
    assert_eq!(context.declaration.as_deref(), Some("PriceCreateInput"));
    assert_eq!(context.field.as_deref(), Some("amount"));
}

#[test]
fn resolver_rejects_second_path() {
    let config = GeneratorConfig::default();
    let mut imports = ImportResolver::new();
    let input = Symbol::new("Role", SymbolOrigin::Enum);
    imports.register_symbol(&input, &config).unwrap();
    let path = ModulePath::for_symbol(&Symbol::new("Role", SymbolOrigin::Input), &config).unwrap();
    assert!(imports.register("Role", path).is_err());
    assert_eq!(imports.finalize().len(), 1);
}

#[test]
fn type_graphql_dialect_and_kebab_files() {
    let config = GeneratorConfig::default()
        .with_dialect(Dialect::TypeGraphql)
        .with_file_case(FileCase::Kebab);
    let generator = Generator::new(registry(), config);
    let record = generator
        .synthesize(&InputTypeDescriptor::for_model(&user(), InputKind::Where))
        .unwrap();
    assert_eq!(
        record.import_path("InputType").map(ModulePath::as_str),
        Some("type-graphql")
    );
    assert_eq!(
        record.import_path("StringNullableFilter").map(ModulePath::as_str),
        Some("./string-nullable-filter.input")
    );
}

#[test]
fn decimal_imports_runtime_and_scalar_package() {
    let price = SchemaModel::new("Price")
        .with_field(FieldDescriptor::scalar("amount", ScalarKind::Decimal).nullable());
    let generator = Generator::new(
        SchemaRegistry::new().with_model(price.clone()),
        GeneratorConfig::default().with_prisma_client_import("@acme/db"),
    );
    let record = generator
        .synthesize(&InputTypeDescriptor::for_model(&price, InputKind::Create))
        .unwrap();
    assert_eq!(
        record.property("amount").unwrap().declared_type,
        "Decimal | null"
    );
    assert_eq!(
        record.import_path("Decimal").map(ModulePath::as_str),
        Some("@acme/db/runtime/library")
    );
    assert_eq!(
        record.import_path("GraphQLDecimal").map(ModulePath::as_str),
        Some("prisma-graphql-type-decimal")
    );
}

#[test]
fn acronym_names_keep_their_spelling_in_paths() {
    let owner = SchemaModel::new("Owner")
        .with_field(FieldDescriptor::scalar("id", ScalarKind::Int).id())
        .with_field(FieldDescriptor::relation(
            "key",
            typeforge_schema::RelationRef::to_one("APIKey"),
        ))
        .with_field(FieldDescriptor::enumeration("method", "HTTPMethod"));
    let registry = SchemaRegistry::new()
        .with_model(SchemaModel::new("APIKey"))
        .with_model(owner.clone())
        .with_enum(EnumDef::new("HTTPMethod", ["GET", "POST"]));
    let record = Generator::new(registry, GeneratorConfig::default())
        .synthesize(&InputTypeDescriptor::for_model(&owner, InputKind::Where))
        .unwrap();

    assert_eq!(
        record.import_path("APIKeyWhereInput").map(ModulePath::as_str),
        Some("./APIKeyWhereInput.input")
    );
    assert_eq!(
        record.import_path("APIKeyRelationFilter").map(ModulePath::as_str),
        Some("./APIKeyRelationFilter.input")
    );
    assert_eq!(
        record.import_path("EnumHTTPMethodFilter").map(ModulePath::as_str),
        Some("./EnumHTTPMethodFilter.input")
    );
    assert_eq!(
        record.import_path("HTTPMethod").map(ModulePath::as_str),
        Some("./HTTPMethod.enum")
    );
}

#[test]
fn type_graphql_preset_with_custom_decorator() {
    let config = GeneratorConfig::type_graphql().with_decorator("ArgsType");
    let generator = Generator::new(registry(), config);
    let record = generator
        .synthesize(&InputTypeDescriptor::for_model(&user(), InputKind::Where))
        .unwrap();
    assert_eq!(record.decorator, "ArgsType");
    assert_eq!(&symbols(&record)[..2], ["Field", "ArgsType"]);
    assert_eq!(
        record.import_path("ArgsType").map(ModulePath::as_str),
        Some("type-graphql")
    );
    assert!(record.import_path("InputType").is_none());
}

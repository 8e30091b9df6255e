//! Integration tests for the type-mapping table

use proptest::prelude::*;
use typeforge_foundation::{Cardinality, ErrorKind, ScalarKind};
use typeforge_mapping::{
    MappingTable, RuleKey, SpecialCase, Subject, SymbolOrigin, SymbolTemplate, Target, TypeTerm,
    key_space, supports,
};
use typeforge_schema::FilterKind;

fn lookup(subject: Subject, filter: FilterKind, cardinality: Cardinality, nullable: bool) -> RuleKey {
    RuleKey::new(subject, filter, cardinality, nullable)
}

// =============================================================================
// Exhaustiveness
// =============================================================================

#[test]
fn every_scalar_has_every_model_level_rule() {
    let table = MappingTable::standard();
    for kind in ScalarKind::ALL {
        let subject = Subject::Scalar(kind);
        for filter in [FilterKind::Value, FilterKind::Filter, FilterKind::SortOrder] {
            for cardinality in Cardinality::ALL {
                for nullable in [false, true] {
                    let key = lookup(subject, filter, cardinality, nullable);
                    assert!(table.lookup(key).is_ok(), "missing rule for {key}");
                }
            }
        }
        for filter in [FilterKind::NestedFilter, FilterKind::AtomicUpdate] {
            let key = lookup(subject, filter, Cardinality::Single, false);
            assert!(table.lookup(key).is_ok(), "missing rule for {key}");
        }
    }
}

#[test]
fn table_holds_only_supported_keys() {
    let table = MappingTable::standard();
    let supported = key_space()
        .filter(|k| supports(k.subject, k.filter, k.cardinality))
        .count();
    assert_eq!(table.len(), supported);
    assert!(table
        .keys()
        .iter()
        .all(|k| supports(k.subject, k.filter, k.cardinality)));
}

#[test]
fn relation_rules() {
    let table = MappingTable::standard();
    for filter in [
        FilterKind::Filter,
        FilterKind::SortOrder,
        FilterKind::CreateRelation,
        FilterKind::UpdateRelation,
    ] {
        for cardinality in Cardinality::ALL {
            assert!(table
                .lookup(lookup(Subject::Relation, filter, cardinality, false))
                .is_ok());
        }
    }
    let err = table
        .lookup(lookup(Subject::Relation, FilterKind::Value, Cardinality::Single, false))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnmappedCombination(ref k) if k.contains("relation")));
}

#[test]
fn fresh_table_equals_standard() {
    let fresh = MappingTable::build();
    let standard = MappingTable::standard();
    assert_eq!(fresh.keys(), standard.keys());
    for key in fresh.keys() {
        assert_eq!(fresh.lookup(key).unwrap(), standard.lookup(key).unwrap());
    }
}

// =============================================================================
// Special Cases
// =============================================================================

#[test]
fn date_values_never_name_datetime() {
    let table = MappingTable::standard();
    for cardinality in Cardinality::ALL {
        for nullable in [false, true] {
            let rule = table
                .lookup(lookup(
                    Subject::Scalar(ScalarKind::DateTime),
                    FilterKind::Value,
                    cardinality,
                    nullable,
                ))
                .unwrap();
            let symbol = rule
                .annotation
                .instantiate(Target::Scalar(ScalarKind::DateTime))
                .unwrap();
            assert!(!symbol.name.contains("DateTime"));
            assert_eq!(rule.special, Some(SpecialCase::DateLeakGuard));
        }
    }
}

#[test]
fn json_filter_has_no_shorthand() {
    let rule = MappingTable::standard()
        .lookup(lookup(
            Subject::Scalar(ScalarKind::Json),
            FilterKind::Filter,
            Cardinality::Single,
            true,
        ))
        .unwrap();
    assert_eq!(
        rule.terms,
        vec![
            TypeTerm::Symbol(SymbolTemplate::FieldFilter {
                nested: false,
                nullable: true
            }),
            TypeTerm::Null
        ]
    );
    assert_eq!(rule.special, Some(SpecialCase::JsonStructural));
}

#[test]
fn enum_filters_reference_the_declaration() {
    let rule = MappingTable::standard()
        .lookup(lookup(Subject::Enum, FilterKind::Filter, Cardinality::Single, false))
        .unwrap();
    let target = Target::Enum("Role");
    let names: Vec<_> = rule
        .terms
        .iter()
        .filter_map(|t| t.template())
        .map(|t| t.instantiate(target).unwrap())
        .map(|s| (s.name, s.origin))
        .collect();
    assert_eq!(
        names,
        vec![
            ("EnumRoleFilter".to_string(), SymbolOrigin::Input),
            ("Role".to_string(), SymbolOrigin::Enum)
        ]
    );
}

#[test]
fn decimal_values_come_from_the_client_runtime() {
    let rule = MappingTable::standard()
        .lookup(lookup(
            Subject::Scalar(ScalarKind::Decimal),
            FilterKind::Value,
            Cardinality::Single,
            false,
        ))
        .unwrap();
    assert_eq!(
        rule.terms,
        vec![TypeTerm::Symbol(SymbolTemplate::Fixed(
            "Decimal",
            SymbolOrigin::ClientRuntime
        ))]
    );
}

// =============================================================================
// Properties
// =============================================================================

fn any_key() -> impl Strategy<Value = RuleKey> {
    let keys: Vec<RuleKey> = key_space().collect();
    prop::sample::select(keys)
}

proptest! {
    #[test]
    fn lookup_agrees_with_supports(key in any_key()) {
        let found = MappingTable::standard().lookup(key).is_ok();
        prop_assert_eq!(found, supports(key.subject, key.filter, key.cardinality));
    }

    #[test]
    fn nullable_rules_end_with_null(key in any_key()) {
        if let Ok(rule) = MappingTable::standard().lookup(key) {
            prop_assert_eq!(rule.terms.last() == Some(&TypeTerm::Null), key.nullable);
            prop_assert!(!rule.terms.is_empty());
        }
    }
}

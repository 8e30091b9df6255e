//! The type-mapping table.
//!
//! The table is built once from [`supports`] and the scalar profiles and is
//! never mutated afterwards. It holds exactly one rule for every supported
//! [`RuleKey`] and nothing else; any other key is an `UnmappedCombination`.

use std::collections::HashMap;
use std::sync::LazyLock;

use typeforge_foundation::{Cardinality, Error, Result, ScalarKind};
use typeforge_schema::FilterKind;

use crate::rule::{RuleKey, SpecialCase, Subject, SymbolTemplate, TypeMappingRule, TypeTerm};
use crate::scalar::scalar_profile;
use crate::symbol::SymbolOrigin;

const SORT_ORDER: SymbolTemplate = SymbolTemplate::Fixed("SortOrder", SymbolOrigin::Enum);

static STANDARD: LazyLock<MappingTable> = LazyLock::new(MappingTable::build);

/// Returns true if `filter` applies to a field of this subject and cardinality.
///
/// Both nullabilities of a supported pair are supported.
#[must_use]
pub const fn supports(subject: Subject, filter: FilterKind, cardinality: Cardinality) -> bool {
    let single = matches!(cardinality, Cardinality::Single);
    match (subject, filter) {
        (Subject::Scalar(_) | Subject::Enum, FilterKind::Value | FilterKind::SortOrder)
        | (_, FilterKind::Filter) => true,
        (Subject::Scalar(_) | Subject::Enum, FilterKind::NestedFilter | FilterKind::AtomicUpdate)
        | (Subject::Relation, FilterKind::RelationWhere) => single,
        (
            Subject::Relation,
            FilterKind::SortOrder | FilterKind::CreateRelation | FilterKind::UpdateRelation,
        ) => true,
        (Subject::Relation, FilterKind::Combinator) => !single,
        _ => false,
    }
}

/// Every key of the full key space, supported or not.
pub fn key_space() -> impl Iterator<Item = RuleKey> {
    Subject::ALL.into_iter().flat_map(|subject| {
        FilterKind::ALL.into_iter().flat_map(move |filter| {
            Cardinality::ALL.into_iter().flat_map(move |cardinality| {
                [false, true]
                    .into_iter()
                    .map(move |nullable| RuleKey::new(subject, filter, cardinality, nullable))
            })
        })
    })
}

/// Static lookup from [`RuleKey`] to [`TypeMappingRule`].
#[derive(Debug)]
pub struct MappingTable {
    rules: HashMap<RuleKey, TypeMappingRule>,
}

impl MappingTable {
    /// Returns the shared standard table.
    #[must_use]
    pub fn standard() -> &'static MappingTable {
        &STANDARD
    }

    /// Builds a fresh table with one rule per supported key.
    #[must_use]
    pub fn build() -> Self {
        let rules = key_space()
            .filter(|key| supports(key.subject, key.filter, key.cardinality))
            .filter_map(|key| derive(key).map(|rule| (key, rule)))
            .collect();
        Self { rules }
    }

    /// Looks up the rule for a key.
    pub fn lookup(&self, key: RuleKey) -> Result<&TypeMappingRule> {
        self.rules
            .get(&key)
            .ok_or_else(|| Error::unmapped(key.to_string()))
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns every key with a rule, in key order.
    #[must_use]
    pub fn keys(&self) -> Vec<RuleKey> {
        let mut keys: Vec<_> = self.rules.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

fn rule(
    terms: Vec<TypeTerm>,
    annotation: SymbolTemplate,
    list_annotation: bool,
    special: Option<SpecialCase>,
) -> TypeMappingRule {
    TypeMappingRule {
        terms,
        annotation,
        list_annotation,
        special,
    }
}

fn symbol_terms(templates: &[SymbolTemplate]) -> Vec<TypeTerm> {
    templates.iter().copied().map(TypeTerm::Symbol).collect()
}

fn enum_literal() -> TypeTerm {
    TypeTerm::EnumLiteral(SymbolTemplate::EnumDeclaration)
}

/// Derives the rule of a supported key.
fn derive(key: RuleKey) -> Option<TypeMappingRule> {
    use FilterKind as F;
    use Subject as S;

    let list = key.cardinality.is_list();
    let nullable = key.nullable;

    let mut derived = match (key.subject, key.filter) {
        (S::Scalar(kind), F::Value) => {
            let profile = scalar_profile(kind);
            let special = match kind {
                ScalarKind::DateTime => Some(SpecialCase::DateLeakGuard),
                _ if list => Some(SpecialCase::ScalarSequence),
                _ => None,
            };
            rule(profile.terms.to_vec(), profile.annotation, list, special)
        }
        (S::Enum, F::Value) => rule(
            vec![enum_literal()],
            SymbolTemplate::EnumDeclaration,
            list,
            Some(SpecialCase::EnumDeclarationImport),
        ),

        (S::Scalar(_) | S::Enum, F::Filter) if list => rule(
            symbol_terms(&[SymbolTemplate::ListFilter]),
            SymbolTemplate::ListFilter,
            false,
            Some(SpecialCase::ScalarSequence),
        ),
        (S::Scalar(kind), F::Filter | F::NestedFilter) => {
            let profile = scalar_profile(kind);
            let nested = key.filter == F::NestedFilter;
            if nested && !profile.nested {
                rule(
                    profile.terms.to_vec(),
                    profile.annotation,
                    false,
                    Some(SpecialCase::JsonStructural),
                )
            } else {
                let filter = SymbolTemplate::FieldFilter { nested, nullable };
                let mut terms = symbol_terms(&[filter]);
                if profile.shorthand {
                    terms.extend_from_slice(profile.terms);
                }
                let special = if profile.shorthand {
                    SpecialCase::EqualityShorthand
                } else {
                    SpecialCase::JsonStructural
                };
                rule(terms, filter, false, Some(special))
            }
        }
        (S::Enum, F::Filter | F::NestedFilter) => {
            let filter = SymbolTemplate::FieldFilter {
                nested: key.filter == F::NestedFilter,
                nullable,
            };
            rule(
                vec![TypeTerm::Symbol(filter), enum_literal()],
                filter,
                false,
                Some(SpecialCase::EnumDeclarationImport),
            )
        }
        (S::Relation, F::Filter) if list => rule(
            symbol_terms(&[SymbolTemplate::ListRelationFilter]),
            SymbolTemplate::ListRelationFilter,
            false,
            Some(SpecialCase::ListRelationWrapper),
        ),
        (S::Relation, F::Filter) => {
            let filter = SymbolTemplate::RelationFilter { nullable };
            rule(
                symbol_terms(&[filter, SymbolTemplate::WhereInput]),
                filter,
                false,
                Some(SpecialCase::RelationWhereUnion),
            )
        }

        (S::Scalar(_) | S::Enum, F::SortOrder) => rule(
            vec![TypeTerm::EnumLiteral(SORT_ORDER)],
            SORT_ORDER,
            false,
            None,
        ),
        (S::Relation, F::SortOrder) => {
            let order = if list {
                SymbolTemplate::OrderByRelationAggregate
            } else {
                SymbolTemplate::OrderByWithRelation
            };
            rule(symbol_terms(&[order]), order, false, None)
        }

        (S::Scalar(kind), F::AtomicUpdate) => {
            let profile = scalar_profile(kind);
            if profile.shorthand {
                let operations = SymbolTemplate::UpdateOperations { nullable };
                let mut terms = profile.terms.to_vec();
                terms.push(TypeTerm::Symbol(operations));
                rule(terms, operations, false, None)
            } else {
                rule(
                    profile.terms.to_vec(),
                    profile.annotation,
                    false,
                    Some(SpecialCase::JsonStructural),
                )
            }
        }
        (S::Enum, F::AtomicUpdate) => {
            let operations = SymbolTemplate::UpdateOperations { nullable };
            rule(
                vec![enum_literal(), TypeTerm::Symbol(operations)],
                operations,
                false,
                Some(SpecialCase::EnumDeclarationImport),
            )
        }

        (S::Relation, F::RelationWhere) => rule(
            symbol_terms(&[SymbolTemplate::WhereInput]),
            SymbolTemplate::WhereInput,
            false,
            None,
        ),
        (S::Relation, F::Combinator) => rule(
            symbol_terms(&[SymbolTemplate::WhereInput]),
            SymbolTemplate::WhereInput,
            true,
            None,
        ),
        (S::Relation, F::CreateRelation) => {
            let nested = SymbolTemplate::CreateNested { many: list };
            rule(symbol_terms(&[nested]), nested, false, None)
        }
        (S::Relation, F::UpdateRelation) => {
            let nested = SymbolTemplate::UpdateNested { many: list };
            rule(symbol_terms(&[nested]), nested, false, None)
        }

        _ => return None,
    };

    if nullable {
        derived.terms.push(TypeTerm::Null);
    }
    Some(derived)
}

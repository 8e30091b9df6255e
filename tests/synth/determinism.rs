//! Reproducibility of synthesized records.

use proptest::prelude::*;
use typeforge_foundation::ScalarKind;
use typeforge_schema::{FieldDescriptor, InputKind, InputTypeDescriptor, SchemaModel, SchemaRegistry};
use typeforge_synth::{Generator, GeneratorConfig};

use crate::fixtures::{generator, user};

#[test]
fn resolving_twice_is_byte_identical() {
    let generator = generator();
    let descriptor = InputTypeDescriptor::for_model(&user(), InputKind::Where);
    let first = generator.synthesize(&descriptor).unwrap();
    let second = generator.synthesize(&descriptor).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn repeated_closed_runs_agree() {
    let generator = generator();
    let a = generator.run_closed(generator.model_descriptors(), 1);
    let b = generator.run_closed(generator.model_descriptors(), 4);
    assert_eq!(a, b);
}

fn field_strategy() -> impl Strategy<Value = (ScalarKind, bool, bool)> {
    (
        prop::sample::select(ScalarKind::ALL.to_vec()),
        any::<bool>(),
        any::<bool>(),
    )
}

fn model_from(fields: &[(ScalarKind, bool, bool)]) -> SchemaModel {
    fields
        .iter()
        .enumerate()
        .fold(SchemaModel::new("Item"), |model, (i, &(kind, nullable, list))| {
            let mut field = FieldDescriptor::scalar(format!("f{i}"), kind);
            if nullable {
                field = field.nullable();
            }
            if list {
                field = field.list();
            }
            model.with_field(field)
        })
}

proptest! {
    #[test]
    fn records_are_deterministic(
        fields in prop::collection::vec(field_strategy(), 0..12),
        kind in prop::sample::select(InputKind::ALL[..6].to_vec()),
    ) {
        let model = model_from(&fields);
        let generator = Generator::new(
            SchemaRegistry::new().with_model(model.clone()),
            GeneratorConfig::atomic(),
        );
        let descriptor = InputTypeDescriptor::for_model(&model, kind);
        let first = generator.synthesize(&descriptor).unwrap();
        let second = generator.synthesize(&descriptor).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.properties.len(), fields.len() + if kind == InputKind::Where { 3 } else { 0 });
    }

    #[test]
    fn imports_are_first_references(
        fields in prop::collection::vec(field_strategy(), 0..12),
        kind in prop::sample::select(InputKind::ALL[..6].to_vec()),
    ) {
        let model = model_from(&fields);
        let generator = Generator::new(
            SchemaRegistry::new().with_model(model.clone()),
            GeneratorConfig::default(),
        );
        let record = generator
            .synthesize(&InputTypeDescriptor::for_model(&model, kind))
            .unwrap();

        let mut expected = vec!["Field".to_string(), "InputType".to_string()];
        for symbol in record.referenced_symbols() {
            if symbol.name != record.name && !expected.contains(&symbol.name) {
                expected.push(symbol.name.clone());
            }
        }
        let actual: Vec<String> = record.imports.iter().map(|e| e.symbol.clone()).collect();
        prop_assert_eq!(actual, expected);
    }
}

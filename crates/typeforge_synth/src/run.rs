//! Generation runs over many descriptors.
//!
//! Descriptors are independent. A run splits them across scoped worker
//! threads that share the registry, table and configuration read-only; each
//! synthesis owns its own import resolver. Failures are collected per
//! descriptor and never stop their siblings.

use std::collections::HashSet;
use std::thread;

use tracing::{debug, info, warn};
use typeforge_foundation::{Error, Result};
use typeforge_mapping::MappingTable;
use typeforge_schema::{InputKind, InputTypeDescriptor, SchemaRegistry};

use crate::config::GeneratorConfig;
use crate::declaration::{DeclarationRecord, Synthesizer};

/// A descriptor that could not be synthesized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationFailure {
    /// Name of the failed descriptor.
    pub declaration: String,
    /// Why it failed.
    pub error: Error,
}

/// Outcome of a run, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Successfully synthesized declarations.
    pub records: Vec<DeclarationRecord>,
    /// Every failed descriptor.
    pub failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    /// Returns true if no descriptor failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns a record by declaration name.
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&DeclarationRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    fn extend(&mut self, other: GenerationReport) {
        self.records.extend(other.records);
        self.failures.extend(other.failures);
    }
}

/// Drives synthesis for one schema and configuration.
#[derive(Clone, Debug)]
pub struct Generator {
    registry: SchemaRegistry,
    table: &'static MappingTable,
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator over the standard mapping table.
    #[must_use]
    pub fn new(registry: SchemaRegistry, config: GeneratorConfig) -> Self {
        Self {
            registry,
            table: MappingTable::standard(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the schema registry.
    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Returns a synthesizer borrowing this generator's collaborators.
    #[must_use]
    pub fn synthesizer(&self) -> Synthesizer<'_> {
        Synthesizer::new(&self.registry, self.table, &self.config)
    }

    /// Synthesizes a single descriptor.
    pub fn synthesize(&self, descriptor: &InputTypeDescriptor) -> Result<DeclarationRecord> {
        self.synthesizer().synthesize(descriptor)
    }

    /// Returns the model-level descriptors of every model, model by model.
    #[must_use]
    pub fn model_descriptors(&self) -> Vec<InputTypeDescriptor> {
        self.registry
            .models()
            .flat_map(|model| {
                InputKind::ALL
                    .into_iter()
                    .filter(|kind| *kind != InputKind::Filter)
                    .map(move |kind| InputTypeDescriptor::for_model(model, kind))
            })
            .collect()
    }

    /// Synthesizes descriptors across up to `workers` threads.
    #[must_use]
    pub fn run(&self, descriptors: &[InputTypeDescriptor], workers: usize) -> GenerationReport {
        if descriptors.is_empty() {
            return GenerationReport::default();
        }
        let workers = workers.clamp(1, descriptors.len());
        let chunk = descriptors.len().div_ceil(workers);
        debug!(descriptors = descriptors.len(), workers, "starting run");

        let outcomes: Vec<Result<DeclarationRecord>> = thread::scope(|scope| {
            let handles: Vec<_> = descriptors
                .chunks(chunk)
                .map(|part| {
                    scope.spawn(move || {
                        let synthesizer = self.synthesizer();
                        part.iter()
                            .map(|d| synthesizer.synthesize(d))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        });

        let mut report = GenerationReport::default();
        for (descriptor, outcome) in descriptors.iter().zip(outcomes) {
            match outcome {
                Ok(record) => report.records.push(record),
                Err(error) => {
                    warn!(declaration = %descriptor.name, %error, "declaration failed");
                    report.failures.push(GenerationFailure {
                        declaration: descriptor.name.clone(),
                        error,
                    });
                }
            }
        }
        report
    }

    /// Runs the descriptors and then every catalog filter they reference,
    /// transitively, each at most once.
    #[must_use]
    pub fn run_closed(
        &self,
        descriptors: Vec<InputTypeDescriptor>,
        workers: usize,
    ) -> GenerationReport {
        let mut seen: HashSet<String> = descriptors.iter().map(|d| d.name.clone()).collect();
        let mut pending = descriptors;
        let mut report = GenerationReport::default();

        while !pending.is_empty() {
            let round = self.run(&pending, workers);
            pending = round
                .records
                .iter()
                .flat_map(DeclarationRecord::catalog_references)
                .filter(|d| seen.insert(d.name.clone()))
                .collect();
            report.extend(round);
        }

        info!(
            records = report.records.len(),
            failures = report.failures.len(),
            "run complete"
        );
        report
    }
}

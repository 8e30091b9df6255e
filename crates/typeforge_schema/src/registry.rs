//! Schema registry: read-only lookup of models and enums.
//!
//! The registry is built once per generation run. It is backed by `im`
//! persistent maps, so cloning is O(1) and every worker can hold its own
//! handle without copying the schema.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use typeforge_foundation::{Error, LookupKind, Result};

use crate::model::{EnumDef, SchemaModel};

/// Serialized form of a schema, as supplied by upstream schema analysis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Models in declaration order.
    #[serde(default)]
    pub models: Vec<SchemaModel>,
    /// Enums in declaration order.
    #[serde(default)]
    pub enums: Vec<EnumDef>,
}

/// Lookup of models and enums by name.
#[derive(Clone, Debug, Default)]
pub struct SchemaRegistry {
    models: im::OrdMap<String, Arc<SchemaModel>>,
    enums: im::OrdMap<String, Arc<EnumDef>>,
    /// Model names in registration order.
    model_order: im::Vector<String>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a decoded schema document.
    #[must_use]
    pub fn from_document(document: SchemaDocument) -> Self {
        let registry = document
            .enums
            .into_iter()
            .fold(Self::new(), SchemaRegistry::with_enum);
        document
            .models
            .into_iter()
            .fold(registry, SchemaRegistry::with_model)
    }

    /// Decodes a JSON schema document into a registry.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: SchemaDocument =
            serde_json::from_str(json).map_err(|e| Error::parse(e.to_string()))?;
        Ok(Self::from_document(document))
    }

    /// Returns a registry with the model added.
    ///
    /// A model with the same name replaces the earlier one in place.
    #[must_use]
    pub fn with_model(mut self, model: SchemaModel) -> Self {
        let name = model.name.clone();
        if self.models.insert(name.clone(), Arc::new(model)).is_none() {
            self.model_order.push_back(name);
        }
        self
    }

    /// Returns a registry with the enum added.
    #[must_use]
    pub fn with_enum(mut self, def: EnumDef) -> Self {
        self.enums.insert(def.name.clone(), Arc::new(def));
        self
    }

    /// Looks up a model by name.
    pub fn find_model(&self, name: &str) -> Result<&SchemaModel> {
        self.models
            .get(name)
            .map(AsRef::as_ref)
            .ok_or_else(|| Error::not_found(LookupKind::Model, name))
    }

    /// Looks up an enum by name.
    pub fn find_enum(&self, name: &str) -> Result<&EnumDef> {
        self.enums
            .get(name)
            .map(AsRef::as_ref)
            .ok_or_else(|| Error::not_found(LookupKind::Enum, name))
    }

    /// Returns models in registration order.
    pub fn models(&self) -> impl Iterator<Item = &SchemaModel> {
        self.model_order
            .iter()
            .filter_map(|name| self.models.get(name).map(AsRef::as_ref))
    }

    /// Returns enums ordered by name.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.enums.values().map(AsRef::as_ref)
    }

    /// Returns the number of registered models.
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}

//! JSON entity-model source.
//!
//! The backend build maintains a structured model file, `entities.json`,
//! describing every entity the scaffolder may be asked about. This adapter
//! reads it and produces immutable [`EntityDescriptor`]s.
//!
//! # `entities.json` format
//!
//! ```json
//! {
//!   "namespace": "Shop.Core.Data.Entities",
//!   "entities": [
//!     { "name": "Invoice",
//!       "properties": [
//!         { "name": "Id",         "type": "int" },
//!         { "name": "Total",      "type": "decimal" },
//!         { "name": "IssuedDate", "type": "DateTime", "nullable": true }
//!       ] }
//!   ]
//! }
//! ```
//!
//! Nullability comes from either the explicit `"nullable": true` flag or a
//! trailing `?` on the type string (`"DateTime?"`); both spellings are
//! common in exported models.

mod discover;

pub use discover::discover_model;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument};

use entigen_core::{
    application::{ApplicationError, ports::EntitySource},
    domain::{EntityDescriptor, EntityName, PropertyDescriptor, SemanticType},
    error::EntigenResult,
};

/// Default model file name, looked up under the source root.
pub const MODEL_FILE_NAME: &str = "entities.json";

// ── Model file types ─────────────────────────────────────────────────────────

/// Deserialised representation of the whole model file.
#[derive(Debug, Deserialize, Clone)]
pub struct ModelFile {
    /// Namespace every entity in this model lives in.
    pub namespace: String,
    pub entities: Vec<EntityEntry>,
}

/// One entity declaration.
#[derive(Debug, Deserialize, Clone)]
pub struct EntityEntry {
    /// Entity type name, conventionally PascalCase.
    pub name: String,
    /// Public properties in declaration order.
    pub properties: Vec<PropertyEntry>,
}

/// One property declaration.
#[derive(Debug, Deserialize, Clone)]
pub struct PropertyEntry {
    pub name: String,
    /// Declared type as the backend spells it (e.g. `"DateTime?"`).
    #[serde(rename = "type")]
    pub declared_type: String,
    /// Explicit nullability flag; a trailing `?` on `type` also counts.
    #[serde(default)]
    pub nullable: bool,
}

impl PropertyEntry {
    /// Split the declared type into (base type, nullable).
    fn classify(&self) -> (SemanticType, bool) {
        let (base, annotated) = match self.declared_type.strip_suffix('?') {
            Some(base) => (base, true),
            None => (self.declared_type.as_str(), false),
        };
        (SemanticType::classify(base.trim()), annotated || self.nullable)
    }
}

// ── Source ───────────────────────────────────────────────────────────────────

/// Entity source backed by one `entities.json` file.
///
/// The file is read and parsed on every `inspect` call; one invocation
/// inspects exactly one entity, so there is nothing worth caching.
pub struct JsonModelSource {
    model_path: PathBuf,
}

impl JsonModelSource {
    /// Create a source pointed at a model file.
    ///
    /// The file does not need to exist yet; `inspect` reports `SchemaLoad`
    /// if it is missing when called.
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }

    /// The model file this source reads.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    fn load(&self) -> EntigenResult<ModelFile> {
        let raw = fs::read_to_string(&self.model_path).map_err(|e| {
            ApplicationError::SchemaLoad {
                path: self.model_path.clone(),
                reason: e.to_string(),
            }
        })?;

        let model: ModelFile =
            serde_json::from_str(&raw).map_err(|e| ApplicationError::SchemaLoad {
                path: self.model_path.clone(),
                reason: format!("invalid JSON: {e}"),
            })?;
        Ok(model)
    }
}

impl EntitySource for JsonModelSource {
    #[instrument(skip(self), fields(model = %self.model_path.display()))]
    fn inspect(&self, entity: &EntityName) -> EntigenResult<EntityDescriptor> {
        let model = self.load()?;

        // Entity names are case-sensitive, matching the backend's own rules,
        // so the lookup uses the name exactly as the user typed it.
        let entry = model
            .entities
            .iter()
            .find(|e| e.name == entity.raw())
            .ok_or_else(|| ApplicationError::EntityNotFound {
                entity: entity.raw().to_string(),
                model: self.model_path.clone(),
            })?;

        let properties = entry
            .properties
            .iter()
            .map(|p| {
                let (semantic, nullable) = p.classify();
                PropertyDescriptor::new(&p.name, semantic, nullable)
            })
            .collect();

        debug!(
            entity = %entry.name,
            properties = entry.properties.len(),
            "entity inspected from model"
        );
        Ok(EntityDescriptor::new(
            entity.clone(),
            model.namespace,
            properties,
        ))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MODEL: &str = r#"{
        "namespace": "Shop.Core.Data.Entities",
        "entities": [
            { "name": "Invoice",
              "properties": [
                { "name": "Id",         "type": "int" },
                { "name": "Total",      "type": "decimal" },
                { "name": "IssuedDate", "type": "DateTime", "nullable": true }
              ] },
            { "name": "Customer",
              "properties": [
                { "name": "Id",       "type": "int" },
                { "name": "FullName", "type": "string?" },
                { "name": "Active",   "type": "bool" }
              ] }
        ]
    }"#;

    fn source_with(model: &str) -> (TempDir, JsonModelSource) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(MODEL_FILE_NAME);
        fs::write(&path, model).unwrap();
        (dir, JsonModelSource::new(path))
    }

    fn name(s: &str) -> EntityName {
        EntityName::parse(s).unwrap()
    }

    #[test]
    fn inspects_entity_with_properties_in_declaration_order() {
        let (_dir, source) = source_with(MODEL);
        let descriptor = source.inspect(&name("Invoice")).unwrap();

        assert_eq!(descriptor.namespace, "Shop.Core.Data.Entities");
        let names: Vec<_> = descriptor.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Id", "Total", "IssuedDate"]);
    }

    #[test]
    fn classifies_semantic_types() {
        let (_dir, source) = source_with(MODEL);
        let descriptor = source.inspect(&name("Invoice")).unwrap();

        assert_eq!(descriptor.properties[0].semantic, SemanticType::Number);
        assert_eq!(descriptor.properties[1].semantic, SemanticType::Number);
        assert_eq!(descriptor.properties[2].semantic, SemanticType::Date);
    }

    #[test]
    fn nullable_comes_from_flag_or_question_mark() {
        let (_dir, source) = source_with(MODEL);

        let invoice = source.inspect(&name("Invoice")).unwrap();
        assert!(invoice.properties[2].nullable, "explicit flag");
        assert!(!invoice.properties[0].nullable);

        let customer = source.inspect(&name("Customer")).unwrap();
        assert!(customer.properties[1].nullable, "trailing '?'");
        assert_eq!(customer.properties[1].semantic, SemanticType::Text);
    }

    #[test]
    fn unknown_entity_is_entity_not_found() {
        let (_dir, source) = source_with(MODEL);
        let err = source.inspect(&name("Order")).unwrap_err();
        assert!(err.to_string().contains("'Order' not found"));
    }

    #[test]
    fn entity_lookup_is_case_sensitive() {
        let (_dir, source) = source_with(MODEL);
        assert!(source.inspect(&name("invoice")).is_err());
    }

    #[test]
    fn missing_model_file_is_schema_load() {
        let source = JsonModelSource::new("/nonexistent/entities.json");
        let err = source.inspect(&name("Invoice")).unwrap_err();
        assert!(err.to_string().contains("failed to load entity model"));
    }

    #[test]
    fn malformed_model_file_is_schema_load() {
        let (_dir, source) = source_with("{ not json");
        let err = source.inspect(&name("Invoice")).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }
}

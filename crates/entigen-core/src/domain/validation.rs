use std::collections::HashSet;

use crate::domain::{entities::entity::EntityDescriptor, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Check a freshly inspected descriptor before anything is rendered.
    pub fn validate_descriptor(descriptor: &EntityDescriptor) -> Result<(), DomainError> {
        if descriptor.namespace.is_empty() {
            return Err(DomainError::InvalidModel("namespace is empty".into()));
        }
        if descriptor.properties.is_empty() {
            return Err(DomainError::InvalidModel(format!(
                "entity '{}' declares no properties",
                descriptor.name
            )));
        }

        let mut seen = HashSet::new();
        for prop in &descriptor.properties {
            if prop.name.is_empty() {
                return Err(DomainError::InvalidModel(format!(
                    "entity '{}' has a property without a name",
                    descriptor.name
                )));
            }
            if !seen.insert(prop.name.as_str()) {
                return Err(DomainError::InvalidModel(format!(
                    "duplicate property '{}' on entity '{}'",
                    prop.name, descriptor.name
                )));
            }
        }

        Ok(())
    }
}

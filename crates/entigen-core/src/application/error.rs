//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.
//!
//! Everything here is fatal to the run except `Filesystem`, which the file
//! writer downgrades to a per-file `Failed` outcome.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The entity model file is missing or could not be parsed.
    #[error("failed to load entity model {}: {reason}", path.display())]
    SchemaLoad { path: PathBuf, reason: String },

    /// The named entity does not exist in the model.
    #[error("entity '{entity}' not found in {}", model.display())]
    EntityNotFound { entity: String, model: PathBuf },

    /// The source root directory does not exist.
    #[error("source root not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// A named project folder is absent under the source root.
    #[error("project '{project}' not found under {}", root.display())]
    ProjectNotFound { project: String, root: PathBuf },

    /// A filesystem operation failed.
    #[error("filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SchemaLoad { path, .. } => vec![
                format!("Could not read the entity model at {}", path.display()),
                "Ensure the backend build has produced/updated entities.json".into(),
                "Point --model at the correct file if it lives elsewhere".into(),
            ],
            Self::EntityNotFound { entity, model } => vec![
                format!("'{}' is not declared in {}", entity, model.display()),
                "Check the spelling (entity names are case-sensitive)".into(),
                "Regenerate the model file after adding the entity".into(),
            ],
            Self::PathNotFound { path } => vec![
                format!("Directory does not exist: {}", path.display()),
                "Pass --src-path pointing at the solution root".into(),
            ],
            Self::ProjectNotFound { project, root } => vec![
                format!("No '{}' folder under {}", project, root.display()),
                "Check --core-project / --web-api-project / --angular-project".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EntityNotFound { .. } | Self::PathNotFound { .. } | Self::ProjectNotFound { .. } => {
                ErrorCategory::NotFound
            }
            Self::SchemaLoad { .. } => ErrorCategory::Configuration,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}

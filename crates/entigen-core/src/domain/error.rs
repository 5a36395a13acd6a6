// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports hold them by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// The entity name cannot be transformed into all required casing
    /// variants. Fatal: checked before anything is rendered or written.
    #[error("invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    /// The entity model is structurally wrong (empty entity list, property
    /// without a name, duplicate property names).
    #[error("invalid entity model: {0}")]
    InvalidModel(String),

    #[error("invalid scaffold parameters: {0}")]
    InvalidParameters(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// No built-in template exists for the requested scaffold kind.
    /// Per-kind recoverable: the orchestrator skips the kind and continues.
    #[error("no template registered for scaffold kind '{kind}'")]
    TemplateNotFound { kind: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEntityName { name, reason } => vec![
                format!("Entity name '{}' is invalid: {}", name, reason),
                "Use a PascalCase identifier: letters, digits, underscores".into(),
                "Examples: Invoice, SalesOrder, CustomerAddress".into(),
            ],
            Self::InvalidModel(msg) => vec![
                format!("The entity model file is malformed: {}", msg),
                "Check entities.json against the documented schema".into(),
            ],
            Self::TemplateNotFound { kind } => vec![
                format!("No template for kind '{}'", kind),
                "Run: entigen kinds to see the supported scaffold kinds".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEntityName { .. } | Self::InvalidModel(_) | Self::InvalidParameters(_) => {
                ErrorCategory::Validation
            }
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

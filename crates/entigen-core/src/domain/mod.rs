// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Entigen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O - model file loading, filesystem access - is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Descriptors and parameters are built once per
//!   invocation and never mutated afterwards
//! - **Pure rendering**: template expansion is a function of its inputs

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod merge;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    entity::{EntityDescriptor, EntityName, PropertyDescriptor, SemanticType},
    layout::ProjectLayout,
    params::{ServiceParameters, ServiceParametersBuilder},
    report::{FileReport, OutcomeCounts, RenderedFile, RunReport, WriteOutcome},
    template::{RenderContext, TemplateKind},
};

pub use error::{DomainError, ErrorCategory};
pub use merge::{MergeFailure, REGION_CLOSE, REGION_OPEN, replace_region};
pub use validation::DomainValidator;

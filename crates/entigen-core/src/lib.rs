//! Entigen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Entigen
//! CRUD scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          entigen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, LayoutResolver,      │
//! │   FileWriter) Orchestrates Use Cases    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Source, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    entigen-adapters (Infrastructure)    │
//! │ (JsonModelSource, LocalFilesystem, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (EntityDescriptor, ProjectLayout,      │
//! │   RenderContext) No External Deps       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use entigen_core::{
//!     application::ScaffoldService,
//!     domain::{EntityName, ServiceParameters},
//! };
//!
//! // 1. Parse and validate the entity name
//! let entity = EntityName::parse("Invoice").unwrap();
//!
//! // 2. Describe the run
//! let params = ServiceParameters::builder(entity)
//!     .src_root("./src")
//!     .build()
//!     .unwrap();
//!
//! // 3. Use the application service (with injected adapters)
//! let service = ScaffoldService::new(source, renderer, filesystem);
//! let report = service.run(&params).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{EntitySource, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        EntityDescriptor, EntityName, ProjectLayout, PropertyDescriptor, RenderContext,
        RenderedFile, RunReport, SemanticType, ServiceParameters, ServiceParametersBuilder,
        TemplateKind, WriteOutcome,
    };
    pub use crate::error::{EntigenError, EntigenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

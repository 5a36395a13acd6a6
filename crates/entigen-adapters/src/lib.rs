//! Infrastructure adapters for Entigen.
//!
//! This crate implements the ports defined in `entigen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod model;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use model::{JsonModelSource, MODEL_FILE_NAME, discover_model};
pub use renderer::TemplateSetRenderer;

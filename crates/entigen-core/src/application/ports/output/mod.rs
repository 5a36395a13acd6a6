//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `entigen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{
    EntityDescriptor, EntityName, ProjectLayout, RenderedFile, ServiceParameters, TemplateKind,
};
use crate::error::EntigenResult;

/// Port for entity inspection.
///
/// Implemented by:
/// - `entigen_adapters::model::JsonModelSource` (entities.json)
///
/// ## Design Notes
///
/// The original toolchain reflected over a compiled assembly; here the
/// entity definition is consumed from a structured model file instead, so
/// inspection never executes foreign code. The adapter owns the model
/// location; the application only names the entity.
pub trait EntitySource: Send + Sync {
    /// Build the immutable descriptor for one entity.
    ///
    /// # Errors
    /// - `SchemaLoad`: model file missing or malformed
    /// - `EntityNotFound`: the entity is not declared in the model
    fn inspect(&self, entity: &EntityName) -> EntigenResult<EntityDescriptor>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `entigen_adapters::filesystem::LocalFilesystem` (production)
/// - `entigen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `write_file` is atomic at the file level in the local adapter (write to
/// temp, then rename), so an interrupted run never leaves a half-written
/// target behind.
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> EntigenResult<()>;

    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> EntigenResult<String>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> EntigenResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `entigen_adapters::renderer::TemplateSetRenderer` (built-in skeletons)
pub trait TemplateRenderer: Send + Sync {
    /// Render every file of one scaffold kind.
    ///
    /// Rendering is pure: identical inputs always produce identical output
    /// text, which is what makes the writer's skip/overwrite decisions
    /// meaningful.
    ///
    /// # Errors
    /// - `TemplateNotFound`: no built-in skeleton for `kind` (recoverable;
    ///   the orchestrator skips the kind and continues)
    fn render(
        &self,
        kind: TemplateKind,
        descriptor: &EntityDescriptor,
        params: &ServiceParameters,
        layout: &ProjectLayout,
    ) -> EntigenResult<Vec<RenderedFile>>;
}

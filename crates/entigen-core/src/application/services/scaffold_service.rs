//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Inspect the entity (model file)
//! 2. Resolve the project layout
//! 3. For each required scaffold kind: render, then write
//!
//! Failure policy (deliberate partial-failure design): inspector and locator
//! errors abort the run - nothing downstream can proceed without a valid
//! entity or layout. Renderer and writer failures are per-kind/per-file and
//! never abort; they land in the report instead.

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{EntitySource, Filesystem, TemplateRenderer},
        services::{file_writer::FileWriter, layout_resolver::LayoutResolver},
    },
    domain::{
        DomainError, DomainValidator, EntityDescriptor, ProjectLayout, RenderedFile, RunReport,
        ServiceParameters, TemplateKind,
    },
    error::{EntigenError, EntigenResult},
};

/// Main scaffolding service.
///
/// Owns the driven ports; the CLI constructs it with concrete adapters.
pub struct ScaffoldService {
    source: Box<dyn EntitySource>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        source: Box<dyn EntitySource>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            source,
            renderer,
            filesystem,
        }
    }

    /// Run the full scaffold pipeline for one invocation.
    ///
    /// Returns the per-file report; `Err` only for fatal (aborting) errors.
    #[instrument(skip_all, fields(entity = %params.entity()))]
    pub fn run(&self, params: &ServiceParameters) -> EntigenResult<RunReport> {
        info!(
            entity = %params.entity(),
            namespace = params.namespace(),
            overwrite = params.overwrite(),
            "scaffold started"
        );

        let (descriptor, layout) = self.prepare(params)?;
        let mut report = RunReport::new(params.entity().pascal());

        for kind in TemplateKind::for_run(params) {
            let files = match self.renderer.render(kind, &descriptor, params, &layout) {
                Ok(files) => files,
                Err(EntigenError::Domain(DomainError::TemplateNotFound { kind })) => {
                    warn!(kind, "no template for kind; skipping");
                    continue;
                }
                Err(e) => {
                    // Per-kind recoverable: report and move on.
                    warn!(kind = %kind, error = %e, "rendering failed; skipping kind");
                    continue;
                }
            };

            for file in files {
                let outcome = FileWriter::write(&file, params.overwrite(), self.filesystem.as_ref());
                info!(
                    kind = %kind,
                    path = %file.path.display(),
                    outcome = %outcome,
                    "file processed"
                );
                report.record(kind, file.path, outcome);
            }
        }

        info!(
            run_id = %report.run_id,
            summary = %report.counts(),
            "scaffold completed"
        );
        Ok(report)
    }

    /// Render everything without touching the filesystem (dry run).
    #[instrument(skip_all, fields(entity = %params.entity()))]
    pub fn plan(&self, params: &ServiceParameters) -> EntigenResult<Vec<RenderedFile>> {
        let (descriptor, layout) = self.prepare(params)?;

        let mut files = Vec::new();
        for kind in TemplateKind::for_run(params) {
            match self.renderer.render(kind, &descriptor, params, &layout) {
                Ok(rendered) => files.extend(rendered),
                Err(EntigenError::Domain(DomainError::TemplateNotFound { kind })) => {
                    warn!(kind, "no template for kind; skipping");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(files)
    }

    /// Shared fatal-error phase: inspect + validate + resolve.
    fn prepare(
        &self,
        params: &ServiceParameters,
    ) -> EntigenResult<(EntityDescriptor, ProjectLayout)> {
        let descriptor = self.source.inspect(params.entity())?;
        DomainValidator::validate_descriptor(&descriptor).map_err(EntigenError::Domain)?;
        info!(
            entity = %descriptor.full_name(),
            properties = descriptor.properties.len(),
            "entity inspected"
        );

        let layout = LayoutResolver::resolve(params, self.filesystem.as_ref())?;
        Ok((descriptor, layout))
    }
}

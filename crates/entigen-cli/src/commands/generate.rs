//! Implementation of the `entigen generate` command.
//!
//! Responsibility: translate CLI arguments into [`ServiceParameters`], call
//! the core scaffold service, and display the per-file report. No business
//! logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use entigen_adapters::{JsonModelSource, LocalFilesystem, TemplateSetRenderer, discover_model};
use entigen_core::{
    application::ScaffoldService,
    domain::{EntityName, ServiceParameters},
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `entigen generate` command.
///
/// Dispatch sequence:
/// 1. Validate the entity name (fast fail, before touching the filesystem)
/// 2. Merge CLI flags over config-file defaults into `ServiceParameters`
/// 3. Locate the entity model file
/// 4. Early-exit if `--dry-run`
/// 5. Execute scaffolding via `ScaffoldService`
/// 6. Print per-file outcomes and the closing summary
#[instrument(skip_all, fields(entity = %args.entity))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate CLI input before any I/O.
    let entity = EntityName::parse(&args.entity).map_err(|e| CliError::Core(e.into()))?;
    if let Some(ns) = &args.namespace {
        if ns.trim().is_empty() {
            return Err(CliError::InvalidInput {
                message: "--namespace cannot be empty".into(),
            });
        }
    }

    // 2. Build parameters: CLI flags win, then config defaults, then the
    //    builder's built-in defaults.
    let params = build_params(entity, &args, &config)?;

    debug!(
        namespace = params.namespace(),
        src_root = %params.src_root().display(),
        core = params.core_project(),
        api = params.api_project(),
        frontend = params.frontend_project(),
        skip_components = params.skip_components(),
        overwrite = params.overwrite(),
        "Parameters resolved"
    );

    // 3. Locate the entity model.
    let model_path = resolve_model_path(&args, &config, &params);
    debug!(model = %model_path.display(), "Model file resolved");

    // 4/5. Wire adapters into the core service.
    let source = Box::new(JsonModelSource::new(&model_path));
    let renderer = Box::new(TemplateSetRenderer::new());
    let filesystem = Box::new(LocalFilesystem::new());
    let service = ScaffoldService::new(source, renderer, filesystem);

    if args.dry_run {
        return dry_run(&service, &params, &output);
    }

    if output.format() != OutputFormat::Json {
        output.header(&format!("Scaffolding '{}'...", params.entity().pascal()))?;
    }
    info!(entity = %params.entity(), "Generation started");

    let report = service.run(&params).map_err(CliError::Core)?;

    info!(run_id = %report.run_id, "Generation completed");

    // 6. Per-file report + summary.
    match output.format() {
        OutputFormat::Json => {
            let envelope = serde_json::json!({
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "report": report,
            });
            let json = serde_json::to_string_pretty(&envelope).map_err(|e| CliError::IoError {
                message: format!("cannot serialise report: {e}"),
                source: std::io::Error::other(e),
            })?;
            println!("{json}");
        }
        _ => {
            for entry in &report.entries {
                output.outcome(
                    &format!("{} {}", entry.kind, entry.path.display()),
                    &entry.outcome,
                )?;
            }

            output.print("")?;
            if report.has_failures() {
                output.warning(&format!("Done with failures: {}", report.counts()))?;
            } else {
                output.success(&format!("Done: {}", report.counts()))?;
            }

            if !global.quiet && report.counts().skipped > 0 && !params.overwrite() {
                output.info("Existing files were left untouched. Re-run with --overwrite to replace them.")?;
            }
        }
    }

    // Per-file failures are in the report; only fatal errors change the
    // exit code.
    Ok(())
}

/// Render everything without writing, then describe what a real run would do.
fn dry_run(
    service: &ScaffoldService,
    params: &ServiceParameters,
    output: &OutputManager,
) -> CliResult<()> {
    let files = service.plan(params).map_err(CliError::Core)?;

    match output.format() {
        OutputFormat::Json => {
            let entries: Vec<_> = files
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "kind": f.kind,
                        "path": f.path,
                        "mergeable": f.is_mergeable(),
                    })
                })
                .collect();
            let json =
                serde_json::to_string_pretty(&entries).map_err(|e| CliError::IoError {
                    message: format!("cannot serialise plan: {e}"),
                    source: std::io::Error::other(e),
                })?;
            println!("{json}");
        }
        _ => {
            output.header(&format!(
                "Dry run: would generate {} file(s) for '{}'",
                files.len(),
                params.entity().pascal()
            ))?;
            for file in &files {
                let note = if file.is_mergeable() { " (merge)" } else { "" };
                output.print(&format!("  {} {}{note}", file.kind, file.path.display()))?;
            }
        }
    }

    Ok(())
}

// ── Parameter resolution ──────────────────────────────────────────────────────

/// Merge CLI flags over `[defaults]` from the config file.
fn build_params(
    entity: EntityName,
    args: &GenerateArgs,
    config: &AppConfig,
) -> CliResult<ServiceParameters> {
    let defaults = &config.defaults;
    let mut builder = ServiceParameters::builder(entity);

    if let Some(ns) = args.namespace.clone().or_else(|| defaults.namespace.clone()) {
        builder = builder.namespace(ns);
    }
    if let Some(src) = args.src_path.clone().or_else(|| defaults.src_path.clone()) {
        builder = builder.src_root(src);
    }
    if let Some(core) = args
        .core_project
        .clone()
        .or_else(|| defaults.core_project.clone())
    {
        builder = builder.core_project(core);
    }
    if let Some(api) = args
        .web_api_project
        .clone()
        .or_else(|| defaults.web_api_project.clone())
    {
        builder = builder.api_project(api);
    }
    if let Some(frontend) = args
        .angular_project
        .clone()
        .or_else(|| defaults.angular_project.clone())
    {
        builder = builder.frontend_project(frontend);
    }

    builder
        .skip_components(args.skip_components)
        .overwrite(args.overwrite)
        .build()
        .map_err(|e| CliError::Core(e.into()))
}

/// Pick the entity model file: `--model`, config default, discovery walk,
/// then the conventional `<src>/entities.json` (so a missing model surfaces
/// as a schema-load error naming the conventional path).
fn resolve_model_path(
    args: &GenerateArgs,
    config: &AppConfig,
    params: &ServiceParameters,
) -> PathBuf {
    args.model
        .clone()
        .or_else(|| config.defaults.model.clone())
        .or_else(|| discover_model(params.src_root()))
        .unwrap_or_else(|| params.src_root().join(entigen_adapters::MODEL_FILE_NAME))
}

// ── tests ─────────────────────────────────────────────────────────────────────

//! Implementation of the `entigen kinds` command.

use entigen_core::domain::TemplateKind;

use crate::{
    cli::{KindsArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// What one scaffold kind produces, for the listing.
fn describe(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Dto => "Create/Update request DTOs and the response DTO (C#)",
        TemplateKind::ServiceInterface => "Service interface I<Entity>Service (C#)",
        TemplateKind::Controller => "API controller stub with a merge-managed action block (C#)",
        TemplateKind::ComponentSet => {
            "Angular index/create/edit/detail components plus route entries"
        }
    }
}

pub fn execute(_args: KindsArgs, output: OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => {
            let entries: Vec<_> = TemplateKind::ALL
                .into_iter()
                .map(|k| {
                    serde_json::json!({
                        "kind": k,
                        "description": describe(k),
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries).map_err(|e| CliError::IoError {
                message: format!("cannot serialise kinds: {e}"),
                source: std::io::Error::other(e),
            })?;
            println!("{json}");
        }
        _ => {
            output.header("Scaffold kinds (in pipeline order):")?;
            for kind in TemplateKind::ALL {
                output.print(&format!("  {:<18} {}", kind.as_str(), describe(kind)))?;
            }
            output.print("")?;
            output.print("The component-set kind is omitted when --skip-components is set.")?;
        }
    }

    Ok(())
}

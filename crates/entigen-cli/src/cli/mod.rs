//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "entigen",
    bin_name = "entigen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} CRUD scaffolding for entity-driven solutions",
    long_about = "Entigen generates the repetitive CRUD surface for one entity: \
                  request/response DTOs, the service interface, an API controller \
                  stub, and the Angular component set with routing.",
    after_help = "EXAMPLES:\n\
        \x20 entigen generate Invoice\n\
        \x20 entigen generate Invoice --src-path ./src --overwrite\n\
        \x20 entigen generate Customer --skip-components\n\
        \x20 entigen completions bash > /usr/share/bash-completion/completions/entigen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the CRUD scaffold for one entity.
    #[command(
        visible_alias = "g",
        about = "Generate CRUD sources for an entity",
        after_help = "EXAMPLES:\n\
            \x20 entigen generate Invoice\n\
            \x20 entigen g SalesOrder --namespace Shop.Core.Data.Entities\n\
            \x20 entigen generate Invoice --dry-run\n\
            \x20 entigen generate Invoice --overwrite"
    )]
    Generate(GenerateArgs),

    /// List the scaffold kinds a run produces.
    #[command(
        about = "List scaffold kinds",
        after_help = "EXAMPLES:\n\
            \x20 entigen kinds\n\
            \x20 entigen kinds --output-format json"
    )]
    Kinds(KindsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 entigen completions bash > ~/.local/share/bash-completion/completions/entigen\n\
            \x20 entigen completions zsh  > ~/.zfunc/_entigen\n\
            \x20 entigen completions fish > ~/.config/fish/completions/entigen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `entigen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Entity type name as declared in the model, e.g. `Invoice`.
    #[arg(value_name = "ENTITY", help = "Entity name (PascalCase)")]
    pub entity: String,

    /// Namespace the entity lives in.
    #[arg(
        short = 'n',
        long = "namespace",
        value_name = "NAMESPACE",
        help = "Entity namespace (default: <core-project>.Data.Entities)"
    )]
    pub namespace: Option<String>,

    /// Solution source root.
    #[arg(
        short = 's',
        long = "src-path",
        value_name = "DIR",
        help = "Source root containing the project folders (default: .)"
    )]
    pub src_path: Option<PathBuf>,

    /// Backend core project folder name.
    #[arg(
        long = "core-project",
        value_name = "NAME",
        help = "Core project folder under the source root (default: Core)"
    )]
    pub core_project: Option<String>,

    /// Web API project folder name.
    #[arg(
        long = "web-api-project",
        value_name = "NAME",
        help = "Web API project folder under the source root (default: WebApi)"
    )]
    pub web_api_project: Option<String>,

    /// Angular project folder name.
    #[arg(
        long = "angular-project",
        value_name = "NAME",
        help = "Angular project folder under the source root (default: ClientApp)"
    )]
    pub angular_project: Option<String>,

    /// Entity model file.
    #[arg(
        long = "model",
        value_name = "FILE",
        help = "Entity model file (default: <src>/entities.json, discovered by walk)"
    )]
    pub model: Option<PathBuf>,

    /// Skip the Angular component set and route merge.
    #[arg(long = "skip-components", help = "Generate backend artifacts only")]
    pub skip_components: bool,

    /// Replace existing generated files wholesale (destructive).
    #[arg(long = "overwrite", help = "Overwrite existing files")]
    pub overwrite: bool,

    /// Preview what would be generated without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `entigen kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `entigen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from([
            "entigen",
            "generate",
            "Invoice",
            "--src-path",
            "./src",
            "--overwrite",
        ]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.entity, "Invoice");
                assert_eq!(args.src_path.as_deref(), Some(std::path::Path::new("./src")));
                assert!(args.overwrite);
                assert!(!args.skip_components);
            }
            other => panic!("expected Generate, got {other:?}"),
        }
    }

    #[test]
    fn generate_alias_g() {
        let cli = Cli::parse_from(["entigen", "g", "SalesOrder"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn project_flags_are_independent() {
        let cli = Cli::parse_from([
            "entigen",
            "generate",
            "Invoice",
            "--core-project",
            "Shop.Core",
            "--web-api-project",
            "Shop.Api",
            "--angular-project",
            "shop-web",
        ]);
        if let Commands::Generate(args) = cli.command {
            assert_eq!(args.core_project.as_deref(), Some("Shop.Core"));
            assert_eq!(args.web_api_project.as_deref(), Some("Shop.Api"));
            assert_eq!(args.angular_project.as_deref(), Some("shop-web"));
        } else {
            panic!("expected Generate command");
        }
    }

    #[test]
    fn entity_argument_is_required() {
        assert!(Cli::try_parse_from(["entigen", "generate"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["entigen", "--quiet", "--verbose", "kinds"]);
        assert!(result.is_err());
    }
}

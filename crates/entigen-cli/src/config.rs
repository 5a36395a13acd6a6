//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (merged at the call-site, not here)
//! 2. Config file (`--config`, else the platform config dir)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for generation runs.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

/// `[defaults]` section - per-solution conventions, so a repo with
/// non-standard project folder names only sets them once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub namespace: Option<String>,
    pub src_path: Option<PathBuf>,
    pub core_project: Option<String>,
    pub web_api_project: Option<String>,
    pub angular_project: Option<String>,
    pub model: Option<PathBuf>,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to probe the default location). An explicitly named file must exist
    /// and parse; a missing default file silently yields the defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let default = Self::config_path();
                if default.is_file() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config file '{}': {e}", path.display()))?;
        toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("cannot parse config file '{}': {e}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.entigen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "entigen", "entigen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".entigen.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.core_project.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn loads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[defaults]\ncore_project = \"Shop.Core\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.core_project.as_deref(), Some("Shop.Core"));
        assert!(cfg.defaults.web_api_project.is_none());
        assert!(cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/nonexistent/entigen.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}

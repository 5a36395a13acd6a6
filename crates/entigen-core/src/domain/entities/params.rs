//! Resolved configuration for one scaffold invocation.
//!
//! [`ServiceParameters`] is constructed once from CLI input (via the
//! builder), validated, and then owned immutably by the orchestrator for the
//! duration of the run. Nothing downstream mutates it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{entities::entity::EntityName, error::DomainError};

/// Immutable parameters for a single scaffold run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceParameters {
    entity: EntityName,
    namespace: String,
    src_root: PathBuf,
    core_project: String,
    api_project: String,
    frontend_project: String,
    skip_components: bool,
    overwrite: bool,
}

impl ServiceParameters {
    /// Start the builder pattern for fluent construction.
    pub fn builder(entity: EntityName) -> ServiceParametersBuilder {
        ServiceParametersBuilder {
            entity,
            namespace: None,
            src_root: None,
            core_project: None,
            api_project: None,
            frontend_project: None,
            skip_components: false,
            overwrite: false,
        }
    }

    pub fn entity(&self) -> &EntityName {
        &self.entity
    }

    /// Namespace the target entity lives in (also used for generated DTOs).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn src_root(&self) -> &Path {
        &self.src_root
    }

    pub fn core_project(&self) -> &str {
        &self.core_project
    }

    pub fn api_project(&self) -> &str {
        &self.api_project
    }

    pub fn frontend_project(&self) -> &str {
        &self.frontend_project
    }

    /// Omit the Angular component/route scaffold kinds.
    pub fn skip_components(&self) -> bool {
        self.skip_components
    }

    /// Allow wholesale replacement of existing generated files.
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }
}

/// Builder for [`ServiceParameters`].
///
/// Defaults mirror the CLI flag defaults: project names `Core` / `WebApi` /
/// `ClientApp`, source root `.`, namespace `<core-project>.Data.Entities`.
pub struct ServiceParametersBuilder {
    entity: EntityName,
    namespace: Option<String>,
    src_root: Option<PathBuf>,
    core_project: Option<String>,
    api_project: Option<String>,
    frontend_project: Option<String>,
    skip_components: bool,
    overwrite: bool,
}

impl ServiceParametersBuilder {
    pub fn namespace(mut self, ns: impl Into<String>) -> Self {
        self.namespace = Some(ns.into());
        self
    }

    pub fn src_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.src_root = Some(root.into());
        self
    }

    pub fn core_project(mut self, name: impl Into<String>) -> Self {
        self.core_project = Some(name.into());
        self
    }

    pub fn api_project(mut self, name: impl Into<String>) -> Self {
        self.api_project = Some(name.into());
        self
    }

    pub fn frontend_project(mut self, name: impl Into<String>) -> Self {
        self.frontend_project = Some(name.into());
        self
    }

    pub fn skip_components(mut self, skip: bool) -> Self {
        self.skip_components = skip;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Consume builder and construct validated [`ServiceParameters`].
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if a project name is empty or contains a path
    /// separator (project names are folder names directly under the root).
    pub fn build(self) -> Result<ServiceParameters, DomainError> {
        let core_project = self.core_project.unwrap_or_else(|| "Core".into());
        let api_project = self.api_project.unwrap_or_else(|| "WebApi".into());
        let frontend_project = self.frontend_project.unwrap_or_else(|| "ClientApp".into());

        for name in [&core_project, &api_project, &frontend_project] {
            if name.is_empty() {
                return Err(DomainError::InvalidParameters(
                    "project name cannot be empty".into(),
                ));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(DomainError::InvalidParameters(format!(
                    "project name '{name}' cannot contain path separators"
                )));
            }
        }

        let namespace = self
            .namespace
            .unwrap_or_else(|| format!("{core_project}.Data.Entities"));
        if namespace.is_empty() {
            return Err(DomainError::InvalidParameters(
                "namespace cannot be empty".into(),
            ));
        }

        Ok(ServiceParameters {
            entity: self.entity,
            namespace,
            src_root: self.src_root.unwrap_or_else(|| PathBuf::from(".")),
            core_project,
            api_project,
            frontend_project,
            skip_components: self.skip_components,
            overwrite: self.overwrite,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> EntityName {
        EntityName::parse("Invoice").unwrap()
    }

    #[test]
    fn defaults_are_applied() {
        let p = ServiceParameters::builder(entity()).build().unwrap();
        assert_eq!(p.core_project(), "Core");
        assert_eq!(p.api_project(), "WebApi");
        assert_eq!(p.frontend_project(), "ClientApp");
        assert_eq!(p.namespace(), "Core.Data.Entities");
        assert_eq!(p.src_root(), Path::new("."));
        assert!(!p.skip_components());
        assert!(!p.overwrite());
    }

    #[test]
    fn namespace_default_follows_core_project() {
        let p = ServiceParameters::builder(entity())
            .core_project("Shop.Core")
            .build()
            .unwrap();
        assert_eq!(p.namespace(), "Shop.Core.Data.Entities");
    }

    #[test]
    fn explicit_namespace_wins() {
        let p = ServiceParameters::builder(entity())
            .namespace("Custom.Entities")
            .build()
            .unwrap();
        assert_eq!(p.namespace(), "Custom.Entities");
    }

    #[test]
    fn project_name_with_separator_is_rejected() {
        let err = ServiceParameters::builder(entity())
            .api_project("nested/WebApi")
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidParameters(_)));
    }

    #[test]
    fn empty_project_name_is_rejected() {
        assert!(
            ServiceParameters::builder(entity())
                .core_project("")
                .build()
                .is_err()
        );
    }
}

//! Project layout resolution.
//!
//! Verifies that the source root and every named project folder exist, then
//! derives the conventional subpaths. Resolution failures are fatal: nothing
//! downstream can proceed without a valid layout. Directories for generated
//! files are *not* created here - that is deferred to the file writer at
//! write time.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ProjectLayout, ServiceParameters},
    error::EntigenResult,
};

pub struct LayoutResolver;

impl LayoutResolver {
    /// Resolve and verify the layout for one run.
    ///
    /// # Errors
    /// - `PathNotFound` if the source root is missing
    /// - `ProjectNotFound` if a named project folder is absent
    #[instrument(skip_all, fields(root = %params.src_root().display()))]
    pub fn resolve(
        params: &ServiceParameters,
        fs: &dyn Filesystem,
    ) -> EntigenResult<ProjectLayout> {
        let root = params.src_root();
        if !fs.is_dir(root) {
            return Err(ApplicationError::PathNotFound {
                path: root.to_path_buf(),
            }
            .into());
        }

        let layout = ProjectLayout::derive(params);

        let mut required = vec![
            (params.core_project(), layout.core_root()),
            (params.api_project(), layout.api_root()),
        ];
        // The frontend folder only matters when components are generated.
        if !params.skip_components() {
            required.push((params.frontend_project(), layout.frontend_root()));
        }

        for (project, dir) in required {
            if !fs.is_dir(dir) {
                return Err(ApplicationError::ProjectNotFound {
                    project: project.to_string(),
                    root: root.to_path_buf(),
                }
                .into());
            }
            debug!(project, dir = %dir.display(), "project folder verified");
        }

        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityName;
    use std::path::{Path, PathBuf};

    /// Minimal stub: a fixed set of directories "exist".
    struct StubFs(Vec<PathBuf>);

    impl Filesystem for StubFs {
        fn exists(&self, path: &Path) -> bool {
            self.0.iter().any(|p| p == path)
        }
        fn is_dir(&self, path: &Path) -> bool {
            self.exists(path)
        }
        fn create_dir_all(&self, _: &Path) -> EntigenResult<()> {
            Ok(())
        }
        fn read_file(&self, _: &Path) -> EntigenResult<String> {
            unimplemented!("not used by the resolver")
        }
        fn write_file(&self, _: &Path, _: &str) -> EntigenResult<()> {
            unimplemented!("not used by the resolver")
        }
    }

    fn params() -> ServiceParameters {
        ServiceParameters::builder(EntityName::parse("Invoice").unwrap())
            .src_root("/src")
            .build()
            .unwrap()
    }

    #[test]
    fn resolves_when_all_projects_exist() {
        let fs = StubFs(vec![
            PathBuf::from("/src"),
            PathBuf::from("/src/Core"),
            PathBuf::from("/src/WebApi"),
            PathBuf::from("/src/ClientApp"),
        ]);
        let layout = LayoutResolver::resolve(&params(), &fs).unwrap();
        assert_eq!(layout.core_root(), &PathBuf::from("/src/Core"));
    }

    #[test]
    fn missing_root_is_path_not_found() {
        let fs = StubFs(vec![]);
        let err = LayoutResolver::resolve(&params(), &fs).unwrap_err();
        assert!(err.to_string().contains("source root not found"));
    }

    #[test]
    fn skip_components_ignores_missing_frontend() {
        let fs = StubFs(vec![
            PathBuf::from("/src"),
            PathBuf::from("/src/Core"),
            PathBuf::from("/src/WebApi"),
        ]);
        let params = ServiceParameters::builder(EntityName::parse("Invoice").unwrap())
            .src_root("/src")
            .skip_components(true)
            .build()
            .unwrap();
        assert!(LayoutResolver::resolve(&params, &fs).is_ok());
    }

    #[test]
    fn missing_project_is_project_not_found() {
        let fs = StubFs(vec![
            PathBuf::from("/src"),
            PathBuf::from("/src/Core"),
            PathBuf::from("/src/ClientApp"),
        ]);
        let err = LayoutResolver::resolve(&params(), &fs).unwrap_err();
        assert!(err.to_string().contains("'WebApi' not found"));
    }
}

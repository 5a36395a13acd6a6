//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use entigen_core::{application::ports::Filesystem, error::EntigenResult};

/// Production filesystem implementation using `std::fs`.
///
/// Writes are atomic at the file level: content goes to a temporary sibling
/// first and is renamed into place, so an interrupted run never leaves a
/// half-written target.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> EntigenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn read_file(&self, path: &Path) -> EntigenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> EntigenResult<()> {
        let tmp = temp_sibling(path);
        std::fs::write(&tmp, content).map_err(|e| map_io_error(&tmp, e, "write file"))?;
        std::fs::rename(&tmp, path).map_err(|e| {
            // Best effort: do not leave the temp file behind.
            let _ = std::fs::remove_file(&tmp);
            map_io_error(path, e, "replace file")
        })
    }
}

/// Temp path next to the target so the rename stays on one filesystem.
fn temp_sibling(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".entigen-tmp");
    path.with_file_name(name)
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> entigen_core::error::EntigenError {
    use entigen_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let target = dir.path().join("Invoice.cs");

        fs.write_file(&target, "class Invoice {}\n").unwrap();
        assert!(fs.exists(&target));
        assert_eq!(fs.read_file(&target).unwrap(), "class Invoice {}\n");
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        fs.write_file(&dir.path().join("a.cs"), "x").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.cs"]);
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let fs = LocalFilesystem::new();
        assert!(fs.read_file(Path::new("/nonexistent/Invoice.cs")).is_err());
    }

    #[test]
    fn create_dir_all_makes_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("Core/Invoices/Dto/Request");

        fs.create_dir_all(&nested).unwrap();
        assert!(fs.is_dir(&nested));
    }
}

//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use entigen_core::{application::ports::Filesystem, error::EntigenResult};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Pre-create a directory tree (testing helper).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.into().components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Seed a file without going through the port (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.inner
            .write()
            .unwrap()
            .files
            .insert(path, content.into());
    }

    /// Read a file's content directly (testing helper).
    pub fn content(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> EntigenResult<()> {
        let mut inner = self.inner.write().unwrap();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn read_file(&self, path: &Path) -> EntigenResult<String> {
        let inner = self.inner.read().unwrap();
        inner.files.get(path).cloned().ok_or_else(|| {
            entigen_core::application::ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> EntigenResult<()> {
        let mut inner = self.inner.write().unwrap();

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(entigen_core::application::ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/out/a.cs"), "x").is_err());

        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/a.cs"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/out/a.cs")).unwrap(), "x");
    }

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/src/Core/Invoices")).unwrap();
        assert!(fs.is_dir(Path::new("/src")));
        assert!(fs.is_dir(Path::new("/src/Core")));
        assert!(fs.is_dir(Path::new("/src/Core/Invoices")));
    }

    #[test]
    fn files_are_not_directories() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/src/entities.json", "{}");
        assert!(fs.exists(Path::new("/src/entities.json")));
        assert!(!fs.is_dir(Path::new("/src/entities.json")));
    }
}

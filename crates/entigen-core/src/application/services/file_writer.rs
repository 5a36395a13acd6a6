//! File persistence with existing-file policy.
//!
//! The writer never returns an error: every filesystem problem is folded
//! into a per-file [`WriteOutcome::Failed`] so one locked file does not
//! block generation of the rest. Policy for an existing target:
//!
//! - `overwrite` flag set: replace wholesale -> `Overwritten`
//! - mergeable file: replace only the sentinel-bracketed region -> `Merged`;
//!   missing or malformed sentinels -> `Skipped` with a warning
//! - otherwise -> `Skipped`
//!
//! Hand-written logic outside a marked region is never touched.

use tracing::{debug, warn};

use crate::{
    application::ports::Filesystem,
    domain::{MergeFailure, RenderedFile, WriteOutcome, replace_region},
};

pub struct FileWriter;

impl FileWriter {
    /// Persist one rendered file according to the existing-file policy.
    pub fn write(file: &RenderedFile, overwrite: bool, fs: &dyn Filesystem) -> WriteOutcome {
        if !fs.exists(&file.path) {
            return Self::create(file, fs);
        }

        if overwrite {
            return match fs.write_file(&file.path, &file.content) {
                Ok(()) => WriteOutcome::Overwritten,
                Err(e) => WriteOutcome::failed(e.to_string()),
            };
        }

        match &file.merge_block {
            Some(block) => Self::merge(file, block, fs),
            None => {
                debug!(path = %file.path.display(), "target exists, skipping");
                WriteOutcome::skipped("file exists; pass --overwrite to replace")
            }
        }
    }

    /// Target absent: create parent directories, then write. Directory
    /// creation failure leaves no partially-written file behind because the
    /// write never starts.
    fn create(file: &RenderedFile, fs: &dyn Filesystem) -> WriteOutcome {
        if let Some(parent) = file.path.parent() {
            if let Err(e) = fs.create_dir_all(parent) {
                return WriteOutcome::failed(e.to_string());
            }
        }
        match fs.write_file(&file.path, &file.content) {
            Ok(()) => WriteOutcome::Created,
            Err(e) => WriteOutcome::failed(e.to_string()),
        }
    }

    /// Target exists and is mergeable: swap the sentinel region content.
    fn merge(file: &RenderedFile, block: &str, fs: &dyn Filesystem) -> WriteOutcome {
        let existing = match fs.read_file(&file.path) {
            Ok(text) => text,
            Err(e) => return WriteOutcome::failed(e.to_string()),
        };

        match replace_region(&existing, block) {
            Ok(merged) => match fs.write_file(&file.path, &merged) {
                Ok(()) => WriteOutcome::Merged,
                Err(e) => WriteOutcome::failed(e.to_string()),
            },
            Err(MergeFailure::NoRegion) => {
                warn!(
                    path = %file.path.display(),
                    "no merge region sentinels found; file left untouched"
                );
                WriteOutcome::skipped("merge region sentinels not found")
            }
            Err(MergeFailure::Malformed) => {
                warn!(
                    path = %file.path.display(),
                    "merge region sentinels are malformed; file left untouched"
                );
                WriteOutcome::skipped("merge region sentinels malformed")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::{REGION_CLOSE, REGION_OPEN, TemplateKind};
    use crate::error::{EntigenError, EntigenResult};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// In-memory filesystem stub with an optional poisoned path that fails
    /// every write.
    #[derive(Default)]
    struct TestFs {
        files: Mutex<HashMap<PathBuf, String>>,
        deny_write: Option<PathBuf>,
    }

    impl TestFs {
        fn with_file(self, path: &str, content: &str) -> Self {
            self.files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), content.to_string());
            self
        }

        fn content(&self, path: &str) -> Option<String> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }
    }

    impl Filesystem for TestFs {
        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
        fn is_dir(&self, _: &Path) -> bool {
            true
        }
        fn create_dir_all(&self, _: &Path) -> EntigenResult<()> {
            Ok(())
        }
        fn read_file(&self, path: &Path) -> EntigenResult<String> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                EntigenError::Application(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                })
            })
        }
        fn write_file(&self, path: &Path, content: &str) -> EntigenResult<()> {
            if self.deny_write.as_deref() == Some(path) {
                return Err(EntigenError::Application(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "permission denied".into(),
                }));
            }
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }
    }

    fn dto_file(path: &str) -> RenderedFile {
        RenderedFile::new(TemplateKind::Dto, path, "generated\n")
    }

    #[test]
    fn absent_target_is_created() {
        let fs = TestFs::default();
        let outcome = FileWriter::write(&dto_file("/out/a.cs"), false, &fs);
        assert_eq!(outcome, WriteOutcome::Created);
        assert_eq!(fs.content("/out/a.cs").unwrap(), "generated\n");
    }

    #[test]
    fn existing_target_without_overwrite_is_skipped() {
        let fs = TestFs::default().with_file("/out/a.cs", "hand-written\n");
        let outcome = FileWriter::write(&dto_file("/out/a.cs"), false, &fs);
        assert!(matches!(outcome, WriteOutcome::Skipped { .. }));
        assert_eq!(fs.content("/out/a.cs").unwrap(), "hand-written\n");
    }

    #[test]
    fn existing_target_with_overwrite_is_replaced() {
        let fs = TestFs::default().with_file("/out/a.cs", "old\n");
        let outcome = FileWriter::write(&dto_file("/out/a.cs"), true, &fs);
        assert_eq!(outcome, WriteOutcome::Overwritten);
        assert_eq!(fs.content("/out/a.cs").unwrap(), "generated\n");
    }

    #[test]
    fn mergeable_target_with_region_is_merged() {
        let existing =
            format!("// keep me\n{REGION_OPEN}\nold block\n{REGION_CLOSE}\n// and me\n");
        let fs = TestFs::default().with_file("/api/C.cs", &existing);

        let file = RenderedFile::new(TemplateKind::Controller, "/api/C.cs", "full\n")
            .with_merge_block("new block\n");
        let outcome = FileWriter::write(&file, false, &fs);

        assert_eq!(outcome, WriteOutcome::Merged);
        let merged = fs.content("/api/C.cs").unwrap();
        assert!(merged.contains("// keep me"));
        assert!(merged.contains("new block"));
        assert!(!merged.contains("old block"));
    }

    #[test]
    fn deleted_sentinels_skip_and_leave_file_untouched() {
        let fs = TestFs::default().with_file("/api/C.cs", "sentinels were removed\n");
        let file = RenderedFile::new(TemplateKind::Controller, "/api/C.cs", "full\n")
            .with_merge_block("block\n");

        let outcome = FileWriter::write(&file, false, &fs);
        assert!(matches!(outcome, WriteOutcome::Skipped { .. }));
        assert_eq!(fs.content("/api/C.cs").unwrap(), "sentinels were removed\n");
    }

    #[test]
    fn overwrite_wins_over_merge() {
        let existing = format!("{REGION_OPEN}\nold\n{REGION_CLOSE}\n");
        let fs = TestFs::default().with_file("/api/C.cs", &existing);
        let file = RenderedFile::new(TemplateKind::Controller, "/api/C.cs", "full\n")
            .with_merge_block("block\n");

        let outcome = FileWriter::write(&file, true, &fs);
        assert_eq!(outcome, WriteOutcome::Overwritten);
        assert_eq!(fs.content("/api/C.cs").unwrap(), "full\n");
    }

    #[test]
    fn write_error_becomes_failed_outcome() {
        let fs = TestFs {
            deny_write: Some(PathBuf::from("/out/a.cs")),
            ..TestFs::default()
        };
        let outcome = FileWriter::write(&dto_file("/out/a.cs"), false, &fs);
        assert!(outcome.is_failure());
    }
}

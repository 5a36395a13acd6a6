//! Rendered files, write outcomes, and the per-run report.
//!
//! A [`RenderedFile`] is one (kind, target path, content) triple produced by
//! the renderer and consumed by the writer; it lives only within a single
//! invocation. [`RunReport`] aggregates one [`FileReport`] per attempted
//! file, in the order attempted - every attempted file appears exactly once.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::template::TemplateKind;

/// One generated source file, ready to be persisted.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    /// Scaffold kind this file belongs to.
    pub kind: TemplateKind,
    /// Resolved target path (root-joined).
    pub path: PathBuf,
    /// Full file content, used when creating or overwriting.
    pub content: String,
    /// For mergeable kinds: the block to place inside an existing file's
    /// sentinel region. `None` means plain skip when the target exists.
    pub merge_block: Option<String>,
}

impl RenderedFile {
    pub fn new(kind: TemplateKind, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            content: content.into(),
            merge_block: None,
        }
    }

    /// Mark this file mergeable with the given region block.
    pub fn with_merge_block(mut self, block: impl Into<String>) -> Self {
        self.merge_block = Some(block.into());
        self
    }

    pub fn is_mergeable(&self) -> bool {
        self.merge_block.is_some()
    }
}

/// Per-file result of a write attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum WriteOutcome {
    /// Target did not exist; parents created, file written.
    Created,
    /// Target existed and the overwrite flag replaced it wholesale.
    Overwritten,
    /// Target existed and was left untouched.
    Skipped { reason: String },
    /// Only the sentinel-bracketed region was replaced.
    Merged,
    /// Filesystem error for this file only; the run continues.
    Failed { reason: String },
}

impl WriteOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Short label for report lines and summary counts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Overwritten => "overwritten",
            Self::Skipped { .. } => "skipped",
            Self::Merged => "merged",
            Self::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped { reason } => write!(f, "skipped ({reason})"),
            Self::Failed { reason } => write!(f, "failed ({reason})"),
            other => f.write_str(other.label()),
        }
    }
}

/// One attempted file and what happened to it.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub kind: TemplateKind,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: WriteOutcome,
}

/// Aggregated result of a whole scaffold invocation.
///
/// Never persisted beyond process lifetime; the CLI prints it and exits.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Unique id for this invocation (log correlation).
    pub run_id: Uuid,
    /// Entity the run scaffolded, PascalCase.
    pub entity: String,
    /// Per-file outcomes in the order attempted.
    pub entries: Vec<FileReport>,
}

impl RunReport {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            entity: entity.into(),
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, kind: TemplateKind, path: PathBuf, outcome: WriteOutcome) {
        self.entries.push(FileReport {
            kind,
            path,
            outcome,
        });
    }

    /// Counts by outcome kind for the closing summary.
    pub fn counts(&self) -> OutcomeCounts {
        let mut c = OutcomeCounts::default();
        for entry in &self.entries {
            match entry.outcome {
                WriteOutcome::Created => c.created += 1,
                WriteOutcome::Overwritten => c.overwritten += 1,
                WriteOutcome::Skipped { .. } => c.skipped += 1,
                WriteOutcome::Merged => c.merged += 1,
                WriteOutcome::Failed { .. } => c.failed += 1,
            }
        }
        c
    }

    /// `true` if any per-file write failed. Per-file failures do not change
    /// the process exit code; the operator reviews them in the report.
    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|e| e.outcome.is_failure())
    }
}

/// Summary counts for the end-of-run report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub created: usize,
    pub overwritten: usize,
    pub skipped: usize,
    pub merged: usize,
    pub failed: usize,
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} overwritten, {} merged, {} skipped, {} failed",
            self.created, self.overwritten, self.merged, self.skipped, self.failed
        )
    }
}

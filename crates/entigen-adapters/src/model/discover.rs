//! Model file discovery.
//!
//! When `--model` is not given, the model file is expected directly under
//! the source root. Some solutions keep it deeper (next to the data project,
//! under an `obj/` output folder and so on), so a bounded directory walk is
//! used as a fallback before giving up.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::MODEL_FILE_NAME;

/// How deep the fallback walk looks below the source root.
const MAX_WALK_DEPTH: usize = 4;

/// Locate `entities.json` under `src_root`.
///
/// Checks the root itself first, then walks down breadth-enough to find a
/// model kept next to a project. Returns the first match in walk order, or
/// `None` when the solution has no model file at all.
pub fn discover_model(src_root: &Path) -> Option<PathBuf> {
    let direct = src_root.join(MODEL_FILE_NAME);
    if direct.is_file() {
        return Some(direct);
    }

    WalkDir::new(src_root)
        .min_depth(2)
        .max_depth(MAX_WALK_DEPTH)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| {
            entry.file_type().is_file() && entry.file_name() == MODEL_FILE_NAME
        })
        .map(|entry| {
            debug!(path = %entry.path().display(), "model file discovered by walk");
            entry.into_path()
        })
}

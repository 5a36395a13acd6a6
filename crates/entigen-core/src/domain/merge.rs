//! Sentinel-comment merge regions.
//!
//! A merge region is a pair of sentinel comment lines bracketing a generated
//! block inside an otherwise hand-maintained file:
//!
//! ```text
//! // <entigen:generated>
//! ...generated content...
//! // </entigen:generated>
//! ```
//!
//! The writer may replace only the bracketed content, leaving surrounding
//! hand-edited code intact. This is a textual convention, not a structural
//! one: no AST-level merging. Duplicated or malformed sentinels make the
//! region unusable and the file is skipped with a warning instead of
//! guessing a repair.

/// Sentinel line opening a generated region. Works as a comment in both C#
/// and TypeScript output.
pub const REGION_OPEN: &str = "// <entigen:generated>";
/// Sentinel line closing a generated region.
pub const REGION_CLOSE: &str = "// </entigen:generated>";

/// Why an existing file could not be merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeFailure {
    /// Neither sentinel is present.
    NoRegion,
    /// Sentinels exist but are unusable: duplicated markers, a close before
    /// an open, or an open without a close.
    Malformed,
}

/// Replace the content of the single well-formed merge region in `existing`
/// with `block` (the sentinels themselves are preserved).
///
/// Returns the merged text, or the reason the region was rejected. The input
/// is never modified on failure; the caller reports `Skipped` with a warning.
pub fn replace_region(existing: &str, block: &str) -> Result<String, MergeFailure> {
    let lines: Vec<&str> = existing.lines().collect();

    let opens: Vec<usize> = positions(&lines, REGION_OPEN);
    let closes: Vec<usize> = positions(&lines, REGION_CLOSE);

    if opens.is_empty() && closes.is_empty() {
        return Err(MergeFailure::NoRegion);
    }
    // Exactly one of each, in order. Anything else is unrepairable.
    let (&open, &close) = match (opens.as_slice(), closes.as_slice()) {
        ([o], [c]) if o < c => (o, c),
        _ => return Err(MergeFailure::Malformed),
    };

    let mut out = String::with_capacity(existing.len() + block.len());
    for line in &lines[..=open] {
        out.push_str(line);
        out.push('\n');
    }
    for line in block.lines() {
        out.push_str(line);
        out.push('\n');
    }
    for line in &lines[close..] {
        out.push_str(line);
        out.push('\n');
    }

    Ok(out)
}

/// Indices of lines whose trimmed content equals the marker.
fn positions(lines: &[&str], marker: &str) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.trim() == marker)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with_region(inner: &str) -> String {
        format!(
            "// hand-written header\n{REGION_OPEN}\n{inner}\n{REGION_CLOSE}\n// hand-written footer\n"
        )
    }

    #[test]
    fn replaces_only_the_bracketed_content() {
        let existing = file_with_region("old generated line");
        let merged = replace_region(&existing, "new generated line\n").unwrap();

        assert!(merged.contains("// hand-written header"));
        assert!(merged.contains("// hand-written footer"));
        assert!(merged.contains("new generated line"));
        assert!(!merged.contains("old generated line"));
    }

    #[test]
    fn merge_is_idempotent() {
        let existing = file_with_region("old");
        let once = replace_region(&existing, "block\n").unwrap();
        let twice = replace_region(&once, "block\n").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_sentinels_reports_no_region() {
        let err = replace_region("plain file\nno markers here\n", "x").unwrap_err();
        assert_eq!(err, MergeFailure::NoRegion);
    }

    #[test]
    fn duplicated_open_is_malformed() {
        let existing = format!("{REGION_OPEN}\n{REGION_OPEN}\nx\n{REGION_CLOSE}\n");
        assert_eq!(
            replace_region(&existing, "y").unwrap_err(),
            MergeFailure::Malformed
        );
    }

    #[test]
    fn close_before_open_is_malformed() {
        let existing = format!("{REGION_CLOSE}\nx\n{REGION_OPEN}\n");
        assert_eq!(
            replace_region(&existing, "y").unwrap_err(),
            MergeFailure::Malformed
        );
    }

    #[test]
    fn open_without_close_is_malformed() {
        let existing = format!("{REGION_OPEN}\nx\n");
        assert_eq!(
            replace_region(&existing, "y").unwrap_err(),
            MergeFailure::Malformed
        );
    }

    #[test]
    fn indented_sentinels_are_recognised() {
        let existing = format!("class C {{\n    {REGION_OPEN}\n    old\n    {REGION_CLOSE}\n}}\n");
        let merged = replace_region(&existing, "    fresh\n").unwrap();
        assert!(merged.contains("    fresh"));
        assert!(!merged.contains("old"));
    }
}

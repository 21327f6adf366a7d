//! Classification of unified diff lines into additions and deletions.

use crate::diff::model::{ChangeKind, ChangeRecord};

const OLD_FILE_HEADER: &str = "---";
const NEW_FILE_HEADER: &str = "+++";

/// Classify a single diff line.
///
/// File header lines (`---`/`+++` prefixes) are never changes, even when a
/// body line happens to begin with the same characters.
pub fn classify_line(line: &str) -> Option<ChangeRecord> {
    if line.starts_with(NEW_FILE_HEADER) || line.starts_with(OLD_FILE_HEADER) {
        return None;
    }
    if let Some(text) = line.strip_prefix(ChangeKind::Addition.marker()) {
        return Some(ChangeRecord::new(ChangeKind::Addition, text));
    }
    line.strip_prefix(ChangeKind::Deletion.marker())
        .map(|text| ChangeRecord::new(ChangeKind::Deletion, text))
}

/// Extract changed lines from unified diff output, in diff order.
///
/// Additions and deletions stay interleaved as they appear. Context lines,
/// hunk headers, file headers, and anything unrecognised are skipped, so
/// hand-built input never fails.
pub fn extract_changes<S: AsRef<str>>(diff_lines: &[S]) -> Vec<ChangeRecord> {
    diff_lines
        .iter()
        .filter_map(|line| classify_line(line.as_ref()))
        .collect()
}

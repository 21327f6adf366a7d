//! Human-readable summary renderer for extracted changes.

use crate::diff::model::{ChangeGroup, ChangeKind, ChangeRecord, ChangeSummary, SUMMARY_EXAMPLES};

fn group_of(changes: &[ChangeRecord], kind: ChangeKind) -> Option<ChangeGroup> {
    let texts: Vec<&str> = changes
        .iter()
        .filter(|c| c.kind == kind)
        .map(|c| c.text.as_str())
        .collect();
    if texts.is_empty() {
        return None;
    }
    Some(ChangeGroup {
        kind,
        count: texts.len(),
        examples: texts
            .iter()
            .take(SUMMARY_EXAMPLES)
            .map(|t| t.to_string())
            .collect(),
        remaining: texts.len().saturating_sub(SUMMARY_EXAMPLES),
    })
}

/// Group changes by kind, keeping diff order within each group.
pub fn group_changes(changes: &[ChangeRecord]) -> ChangeSummary {
    ChangeSummary {
        additions: group_of(changes, ChangeKind::Addition),
        deletions: group_of(changes, ChangeKind::Deletion),
    }
}

/// Render a grouped summary as text.
pub fn render_summary(summary: &ChangeSummary) -> String {
    let mut out: Vec<String> = Vec::new();
    for group in summary.groups() {
        let noun = if group.count == 1 { "line" } else { "lines" };
        out.push(format!("{} {} {}:", group.kind.verb(), group.count, noun));
        for example in &group.examples {
            out.push(format!("  {} {}", group.kind.marker(), example));
        }
        if group.remaining > 0 {
            out.push(format!("  ...and {} more", group.remaining));
        }
    }
    out.join("\n")
}

/// Summarize changes: per kind, a count header, up to three examples, and a
/// remainder line.
///
/// Returns an empty string when there are no changes; callers should treat
/// that as "no differences".
pub fn summarize(changes: &[ChangeRecord]) -> String {
    render_summary(&group_changes(changes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adds(n: usize) -> Vec<ChangeRecord> {
        (0..n)
            .map(|i| ChangeRecord::new(ChangeKind::Addition, format!("line {}", i)))
            .collect()
    }

    #[test]
    fn test_empty_changes_yield_empty_string() {
        assert_eq!(summarize(&[]), "");
        assert!(group_changes(&[]).is_empty());
    }

    #[test]
    fn test_single_addition() {
        assert_eq!(summarize(&adds(1)), "Added 1 line:\n  + line 0");
    }

    #[test]
    fn test_more_than_three_truncated() {
        let text = summarize(&adds(5));
        assert_eq!(
            text,
            "Added 5 lines:\n  + line 0\n  + line 1\n  + line 2\n  ...and 2 more"
        );
    }

    #[test]
    fn test_exactly_three_has_no_remainder_line() {
        assert!(!summarize(&adds(3)).contains("more"));
    }

    #[test]
    fn test_additions_listed_before_deletions() {
        let changes = vec![
            ChangeRecord::new(ChangeKind::Deletion, "old"),
            ChangeRecord::new(ChangeKind::Addition, "new"),
        ];
        assert_eq!(
            summarize(&changes),
            "Added 1 line:\n  + new\nRemoved 1 line:\n  - old"
        );
    }

    #[test]
    fn test_group_counts() {
        let mut changes = adds(4);
        changes.push(ChangeRecord::new(ChangeKind::Deletion, "gone"));
        let summary = group_changes(&changes);
        let additions = summary.additions.expect("additions group");
        assert_eq!(additions.count, 4);
        assert_eq!(additions.examples.len(), 3);
        assert_eq!(additions.remaining, 1);
        assert_eq!(summary.deletions.map(|d| d.count), Some(1));
    }
}

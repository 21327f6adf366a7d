//! Line diff computation engine.
//!
//! [`compare`] renders both versions with [`crate::serialize`], aligns the
//! line sequences by longest common subsequence, and formats the result as a
//! unified diff. Identical renderings produce an empty diff with no header.

use crate::diff::changes::extract_changes;
use crate::diff::human_summary::summarize;
use crate::diff::model::{ChangeKind, DiffOptions, VersionComparison};
use crate::errors::Result;
use crate::model::Version;
use crate::serialize::serialize;
use crate::{log_compare_start, log_op_end, log_op_error};
use chrono::SecondsFormat;
use std::ops::Range;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpTag {
    Equal,
    Delete,
    Insert,
    Replace,
}

/// A contiguous block of the alignment: `old` and `new` are line ranges into
/// the respective sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Opcode {
    tag: OpTag,
    old: Range<usize>,
    new: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Keep,
    Delete,
    Insert,
}

/// Align two line sequences by LCS and return one step per emitted line.
///
/// Common prefix and suffix are peeled off, then the remainder is aligned
/// with Hirschberg's divide and conquer: O(n·m) time, O(n + m) memory.
fn lcs_steps<S: AsRef<str>>(old: &[S], new: &[S]) -> Vec<Step> {
    let prefix = old
        .iter()
        .zip(new.iter())
        .take_while(|(a, b)| a.as_ref() == b.as_ref())
        .count();
    let suffix = old[prefix..]
        .iter()
        .rev()
        .zip(new[prefix..].iter().rev())
        .take_while(|(a, b)| a.as_ref() == b.as_ref())
        .count();

    let a: Vec<&str> = old[prefix..old.len() - suffix]
        .iter()
        .map(AsRef::as_ref)
        .collect();
    let b: Vec<&str> = new[prefix..new.len() - suffix]
        .iter()
        .map(AsRef::as_ref)
        .collect();

    let mut steps = Vec::with_capacity(old.len() + new.len());
    steps.extend(std::iter::repeat(Step::Keep).take(prefix));
    align(&a, &b, &mut steps);
    steps.extend(std::iter::repeat(Step::Keep).take(suffix));
    steps
}

/// Last row of the LCS length table of `a` against every prefix of `b`,
/// or against every suffix when `reverse` is set.
fn lcs_row(a: &[&str], b: &[&str], reverse: bool) -> Vec<u32> {
    let m = b.len();
    let mut prev = vec![0u32; m + 1];
    let mut cur = vec![0u32; m + 1];
    for i in 0..a.len() {
        let x = if reverse { a[a.len() - 1 - i] } else { a[i] };
        for j in 0..m {
            let y = if reverse { b[m - 1 - j] } else { b[j] };
            cur[j + 1] = if x == y {
                prev[j] + 1
            } else {
                cur[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev
}

fn align(a: &[&str], b: &[&str], steps: &mut Vec<Step>) {
    if a.is_empty() {
        steps.extend(std::iter::repeat(Step::Insert).take(b.len()));
        return;
    }
    if b.is_empty() {
        steps.extend(std::iter::repeat(Step::Delete).take(a.len()));
        return;
    }
    if a.len() == 1 {
        match b.iter().position(|y| *y == a[0]) {
            Some(k) => {
                steps.extend(std::iter::repeat(Step::Insert).take(k));
                steps.push(Step::Keep);
                steps.extend(std::iter::repeat(Step::Insert).take(b.len() - k - 1));
            }
            None => {
                steps.push(Step::Delete);
                steps.extend(std::iter::repeat(Step::Insert).take(b.len()));
            }
        }
        return;
    }

    let mid = a.len() / 2;
    let head = lcs_row(&a[..mid], b, false);
    let tail = lcs_row(&a[mid..], b, true);
    let m = b.len();
    // first split point with the best combined score
    let mut split = 0;
    for k in 1..=m {
        if head[k] + tail[m - k] > head[split] + tail[m - split] {
            split = k;
        }
    }
    align(&a[..mid], &b[..split], steps);
    align(&a[mid..], &b[split..], steps);
}

/// Collapse per-line steps into opcodes. Runs of mixed deletes and inserts
/// become a single `Replace`.
fn opcodes<S: AsRef<str>>(old: &[S], new: &[S]) -> Vec<Opcode> {
    let mut codes: Vec<Opcode> = Vec::new();
    let (mut i, mut j) = (0, 0);
    for step in lcs_steps(old, new) {
        let (di, dj, changed) = match step {
            Step::Keep => (1, 1, false),
            Step::Delete => (1, 0, true),
            Step::Insert => (0, 1, true),
        };
        match codes.last_mut() {
            Some(last) if (last.tag != OpTag::Equal) == changed => {
                last.old.end += di;
                last.new.end += dj;
            }
            _ => codes.push(Opcode {
                tag: if changed { OpTag::Replace } else { OpTag::Equal },
                old: i..i + di,
                new: j..j + dj,
            }),
        }
        i += di;
        j += dj;
    }
    for code in &mut codes {
        if code.tag != OpTag::Equal {
            code.tag = match (code.old.is_empty(), code.new.is_empty()) {
                (false, true) => OpTag::Delete,
                (true, false) => OpTag::Insert,
                _ => OpTag::Replace,
            };
        }
    }
    codes
}

/// Split opcodes into hunks with at most `context` unchanged lines on each
/// side. Returns no hunks when nothing changed.
fn grouped_opcodes(mut codes: Vec<Opcode>, context: usize) -> Vec<Vec<Opcode>> {
    if codes.iter().all(|c| c.tag == OpTag::Equal) {
        return Vec::new();
    }

    if let Some(first) = codes.first_mut() {
        if first.tag == OpTag::Equal {
            first.old.start = first.old.start.max(first.old.end.saturating_sub(context));
            first.new.start = first.new.start.max(first.new.end.saturating_sub(context));
        }
    }
    if let Some(last) = codes.last_mut() {
        if last.tag == OpTag::Equal {
            last.old.end = last.old.end.min(last.old.start + context);
            last.new.end = last.new.end.min(last.new.start + context);
        }
    }

    let mut groups = Vec::new();
    let mut group: Vec<Opcode> = Vec::new();
    for mut code in codes {
        if code.tag == OpTag::Equal && code.old.len() > context * 2 {
            group.push(Opcode {
                tag: OpTag::Equal,
                old: code.old.start..code.old.end.min(code.old.start + context),
                new: code.new.start..code.new.end.min(code.new.start + context),
            });
            groups.push(std::mem::take(&mut group));
            code.old.start = code.old.start.max(code.old.end - context);
            code.new.start = code.new.start.max(code.new.end - context);
        }
        group.push(code);
    }
    if !(group.is_empty() || (group.len() == 1 && group[0].tag == OpTag::Equal)) {
        groups.push(group);
    }
    groups
}

/// Format a line range in unified-diff hunk notation.
fn format_range(range: &Range<usize>) -> String {
    let length = range.len();
    let beginning = range.start + 1;
    match length {
        0 => format!("{},0", beginning - 1),
        1 => beginning.to_string(),
        _ => format!("{},{}", beginning, length),
    }
}

fn header_line(marker: &str, version: &Version) -> String {
    format!(
        "{} {}\t{}",
        marker,
        version.version_id(),
        version
            .timestamp()
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// Build unified diff lines from two rendered sequences.
pub fn unified_diff<S: AsRef<str>>(
    old: &[S],
    new: &[S],
    old_header: &str,
    new_header: &str,
    options: DiffOptions,
) -> Vec<String> {
    let groups = grouped_opcodes(opcodes(old, new), options.context);
    if groups.is_empty() {
        return Vec::new();
    }

    let mut out = vec![old_header.to_string(), new_header.to_string()];
    for group in groups {
        let (first, last) = (&group[0], &group[group.len() - 1]);
        out.push(format!(
            "@@ -{} +{} @@",
            format_range(&(first.old.start..last.old.end)),
            format_range(&(first.new.start..last.new.end))
        ));
        for code in &group {
            if code.tag == OpTag::Equal {
                out.extend(old[code.old.clone()].iter().map(|l| format!(" {}", l.as_ref())));
                continue;
            }
            if matches!(code.tag, OpTag::Replace | OpTag::Delete) {
                out.extend(old[code.old.clone()].iter().map(|l| format!("-{}", l.as_ref())));
            }
            if matches!(code.tag, OpTag::Replace | OpTag::Insert) {
                out.extend(new[code.new.clone()].iter().map(|l| format!("+{}", l.as_ref())));
            }
        }
    }
    out
}

/// Compute the unified diff between two versions with default options.
///
/// # Errors
///
/// Returns `VersionerError::Serialization` if either version's content
/// cannot be rendered.
pub fn compare(old: &Version, new: &Version) -> Result<Vec<String>> {
    compare_with_options(old, new, DiffOptions::default())
}

/// Compute the unified diff between two versions.
///
/// Header lines carry each version's id and timestamp. Output is empty when
/// both versions render to the same lines.
///
/// Alignment time grows with the product of the changed line counts on each
/// side; memory stays linear.
///
/// # Errors
///
/// Returns `VersionerError::Serialization` if either version's content
/// cannot be rendered.
pub fn compare_with_options(
    old: &Version,
    new: &Version,
    options: DiffOptions,
) -> Result<Vec<String>> {
    let started = Instant::now();
    log_compare_start!("compare", old, new);

    let rendered = serialize(old).and_then(|a| serialize(new).map(|b| (a, b)));
    let (old_lines, new_lines) = match rendered {
        Ok(pair) => pair,
        Err(err) => {
            log_op_error!(
                "compare",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            return Err(err);
        }
    };

    let diff = unified_diff(
        &old_lines,
        &new_lines,
        &header_line("---", old),
        &header_line("+++", new),
        options,
    );

    log_op_end!(
        "compare",
        duration_ms = started.elapsed().as_millis() as u64,
        old_lines = old_lines.len() as u64,
        new_lines = new_lines.len() as u64,
        diff_len = diff.len() as u64
    );
    Ok(diff)
}

/// Run the whole pipeline: diff, change extraction, and summary.
///
/// # Errors
///
/// Returns `VersionerError::Serialization` if either version's content
/// cannot be rendered.
pub fn compare_versions(old: &Version, new: &Version) -> Result<VersionComparison> {
    let started = Instant::now();
    log_compare_start!("compare_versions", old, new);

    let diff = match compare(old, new) {
        Ok(diff) => diff,
        Err(err) => {
            log_op_error!(
                "compare_versions",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64,
                old_version_id = old.version_id(),
                new_version_id = new.version_id()
            );
            return Err(err);
        }
    };
    let changes = extract_changes(&diff);
    let summary = summarize(&changes);

    let additions = changes
        .iter()
        .filter(|c| c.kind == ChangeKind::Addition)
        .count();
    log_op_end!(
        "compare_versions",
        duration_ms = started.elapsed().as_millis() as u64,
        old_version_id = old.version_id(),
        new_version_id = new.version_id(),
        additions = additions as u64,
        deletions = (changes.len() - additions) as u64
    );
    Ok(VersionComparison {
        old_id: old.version_id().to_string(),
        new_id: new.version_id().to_string(),
        diff,
        changes,
        summary,
    })
}

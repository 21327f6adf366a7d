//! Diff output types.
//!
//! All report types derive `Serialize` so front ends can emit them as JSON.

use serde::{Deserialize, Serialize};

/// Number of context lines around each hunk unless configured otherwise.
pub const DEFAULT_CONTEXT: usize = 3;

/// Number of example lines shown per change kind in a summary.
pub const SUMMARY_EXAMPLES: usize = 3;

/// Classification of a single changed diff line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Line present only in the new version
    Addition,
    /// Line present only in the old version
    Deletion,
}

impl ChangeKind {
    /// The unified-diff marker for this kind
    pub fn marker(&self) -> char {
        match self {
            ChangeKind::Addition => '+',
            ChangeKind::Deletion => '-',
        }
    }

    /// Verb used in summary headers
    pub fn verb(&self) -> &'static str {
        match self {
            ChangeKind::Addition => "Added",
            ChangeKind::Deletion => "Removed",
        }
    }
}

/// A classified diff line with its marker stripped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub text: String,
}

impl ChangeRecord {
    pub fn new(kind: ChangeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Options for diff computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Unchanged lines kept around each change
    pub context: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT,
        }
    }
}

/// All changes of one kind, trimmed for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeGroup {
    pub kind: ChangeKind,
    /// Total number of changes of this kind
    pub count: usize,
    /// First few change texts, in diff order
    pub examples: Vec<String>,
    /// Changes not shown in `examples`
    pub remaining: usize,
}

/// Changes grouped by kind. A group is `None` when it has no entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ChangeSummary {
    pub additions: Option<ChangeGroup>,
    pub deletions: Option<ChangeGroup>,
}

impl ChangeSummary {
    pub fn is_empty(&self) -> bool {
        self.additions.is_none() && self.deletions.is_none()
    }

    /// Groups in display order: additions, then deletions
    pub fn groups(&self) -> impl Iterator<Item = &ChangeGroup> {
        self.additions.iter().chain(self.deletions.iter())
    }
}

/// One-call result of comparing two versions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionComparison {
    pub old_id: String,
    pub new_id: String,
    /// Unified diff lines; empty when the versions render identically
    pub diff: Vec<String>,
    pub changes: Vec<ChangeRecord>,
    pub summary: String,
}

impl VersionComparison {
    pub fn is_identical(&self) -> bool {
        self.diff.is_empty()
    }
}

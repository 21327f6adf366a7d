//! Version diff pipeline.
//!
//! Compares two versions and reports what changed, as unified diff lines,
//! classified change records, and a short human summary.
//!
//! ## Entry point
//!
//! ```ignore
//! use promptdiff_core::diff::{compare, extract_changes, summarize};
//!
//! let diff = compare(&old, &new)?;
//! let changes = extract_changes(&diff);
//! let summary = summarize(&changes);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical diff lines.
//! - **Empty on no change**: versions that render identically produce no
//!   lines at all, header included.
//! - **Header safety**: `---`/`+++` lines are never classified as changes.

pub mod changes;
pub mod engine;
pub mod human_summary;
pub mod model;

pub use changes::extract_changes;
pub use engine::{compare, compare_versions, compare_with_options};
pub use human_summary::summarize;
pub use model::{ChangeKind, ChangeRecord, ChangeSummary, DiffOptions, VersionComparison};

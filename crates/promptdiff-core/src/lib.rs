//! promptdiff core - version comparison and change summarization
//!
//! This crate provides:
//! - An ordered, tagged content model ([`Content`], [`Value`]) and immutable
//!   [`Version`] snapshots
//! - Deterministic line rendering of content ([`serialize`])
//! - LCS-based unified diffs between versions ([`compare`])
//! - Classification of diff lines into additions and deletions
//!   ([`extract_changes`]) and a short human summary ([`summarize`])
//! - The [`VersionSource`] contract for looking versions up by id
//! - Structured error and logging facilities

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod serialize;
pub mod store;

#[doc(hidden)]
pub use promptdiff_core_types as core_types;

// Re-export commonly used types
pub use diff::{compare, compare_versions, extract_changes, summarize};
pub use diff::{ChangeKind, ChangeRecord, VersionComparison};
pub use errors::{ExError, ExErrorKind, Result, VersionerError};
pub use model::{Content, Value, Version};
pub use serialize::serialize;
pub use store::{InMemoryVersionSource, VersionSource};

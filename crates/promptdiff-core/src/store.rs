//! Version lookup by id.
//!
//! [`VersionSource`] is the seam between the diff pipeline and wherever
//! versions live. The core ships an in-memory source; front ends supply
//! their own (the CLI reads a directory of documents).

use crate::errors::{Result, VersionerError};
use crate::model::Version;
use std::collections::BTreeMap;

/// Supplies versions by id.
pub trait VersionSource {
    /// Look up a version.
    ///
    /// # Errors
    ///
    /// Returns `VersionerError::VersionNotFound` if no version has this id.
    fn get_version(&self, version_id: &str) -> Result<Version>;
}

/// In-memory version source keyed by version id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVersionSource {
    versions: BTreeMap<String, Version>,
}

impl InMemoryVersionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a version, replacing any existing version with the same id
    pub fn insert(&mut self, version: Version) -> Option<Version> {
        self.versions
            .insert(version.version_id().to_string(), version)
    }

    /// Known version ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl FromIterator<Version> for InMemoryVersionSource {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        let mut source = Self::new();
        for version in iter {
            source.insert(version);
        }
        source
    }
}

impl VersionSource for InMemoryVersionSource {
    fn get_version(&self, version_id: &str) -> Result<Version> {
        self.versions
            .get(version_id)
            .cloned()
            .ok_or_else(|| VersionerError::VersionNotFound {
                version_id: version_id.to_string(),
            })
    }
}

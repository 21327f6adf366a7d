//! Loading versions from files

use chrono::{DateTime, Utc};
use promptdiff_core::{Result, Version, VersionSource, VersionerError};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions probed, in order, when resolving a version id in a directory
const EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Read a YAML or JSON document as a version.
///
/// The id defaults to the file stem; the timestamp is the file's
/// modification time, or now if the platform does not report one.
///
/// # Errors
///
/// - `Io` if the file cannot be read
/// - `Serialization` / `InvalidInput` if the document cannot be parsed
pub fn load_version(path: &Path, version_id: Option<&str>) -> Result<Version> {
    let text = fs::read_to_string(path).map_err(|e| VersionerError::Io {
        message: format!("{}: {}", path.display(), e),
    })?;
    let timestamp: DateTime<Utc> = fs::metadata(path)
        .and_then(|m| m.modified())
        .map(DateTime::from)
        .unwrap_or_else(|_| Utc::now());

    let id = match version_id {
        Some(id) => id.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| VersionerError::InvalidInput {
                reason: format!("cannot derive a version id from {}", path.display()),
            })?,
    };

    tracing::debug!(version_id = %id, path = %path.display(), "loading version");
    if is_json(path) {
        Version::from_json_str(id, &text, timestamp)
    } else {
        Version::from_yaml_str(id, &text, timestamp)
    }
}

/// Versions stored as `<dir>/<id>.{yaml,yml,json}`.
#[derive(Debug, Clone)]
pub struct DirVersionSource {
    dir: PathBuf,
}

impl DirVersionSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn resolve(&self, version_id: &str) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", version_id, ext)))
            .find(|p| p.is_file())
    }
}

impl VersionSource for DirVersionSource {
    fn get_version(&self, version_id: &str) -> Result<Version> {
        if version_id.is_empty()
            || version_id.contains(['/', '\\'])
            || version_id == "."
            || version_id == ".."
        {
            return Err(VersionerError::InvalidInput {
                reason: format!("version id `{}` is not a plain file name", version_id),
            });
        }
        let path = self
            .resolve(version_id)
            .ok_or_else(|| VersionerError::VersionNotFound {
                version_id: version_id.to_string(),
            })?;
        load_version(&path, Some(version_id))
    }
}

use crate::errors::Result;
use crate::model::value::Content;
use chrono::{DateTime, Utc};

/// Immutable snapshot of named content.
///
/// `version_id` is an opaque label; nothing interprets it beyond display in
/// diff headers and lookups through a [`crate::store::VersionSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Version {
    version_id: String,
    timestamp: DateTime<Utc>,
    content: Content,
}

impl Version {
    /// Create a version stamped with the current time
    pub fn new(version_id: impl Into<String>, content: Content) -> Self {
        Self::with_timestamp(version_id, content, Utc::now())
    }

    /// Create a version with an explicit timestamp
    pub fn with_timestamp(
        version_id: impl Into<String>,
        content: Content,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            version_id: version_id.into(),
            timestamp,
            content,
        }
    }

    /// Parse a YAML document into a version.
    ///
    /// An empty document yields empty content.
    ///
    /// # Errors
    ///
    /// - `Serialization` if the YAML is malformed or holds tagged values,
    ///   non-string keys, or non-finite floats
    /// - `InvalidInput` if the document root is not a mapping
    pub fn from_yaml_str(
        version_id: impl Into<String>,
        text: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let doc: serde_yaml::Value = serde_yaml::from_str(text)?;
        Ok(Self::with_timestamp(
            version_id,
            Content::try_from(doc)?,
            timestamp,
        ))
    }

    /// Parse a JSON document into a version, keeping object key order.
    ///
    /// # Errors
    ///
    /// - `Serialization` if the JSON is malformed or holds out-of-range integers
    /// - `InvalidInput` if the document root is not an object
    pub fn from_json_str(
        version_id: impl Into<String>,
        text: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let doc: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::with_timestamp(
            version_id,
            Content::try_from(doc)?,
            timestamp,
        ))
    }

    pub fn version_id(&self) -> &str {
        &self.version_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn content(&self) -> &Content {
        &self.content
    }
}

//! Tagged content values.
//!
//! [`Value`] is the closed set of shapes a version's content may hold, and
//! [`Content`] is the insertion-ordered mapping at its root. Every container
//! preserves order, so rendering the same content always yields the same
//! lines.

use crate::errors::{Result, VersionerError};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A single content value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Content),
}

/// Insertion-ordered mapping of string keys to [`Value`]s.
///
/// Re-inserting an existing key replaces its value in place; the key keeps
/// its original position. Equality is order-sensitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Content {
    entries: Vec<(String, Value)>,
}

impl Content {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a key, returning the previous value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder form of [`Content::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Remove a key, shifting later keys up
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Reject values the YAML renderer cannot carry losslessly.
    ///
    /// # Errors
    ///
    /// Returns `VersionerError::Serialization` naming the dotted key path of
    /// the first non-finite float.
    pub fn check_representable(&self) -> Result<()> {
        for (key, value) in &self.entries {
            value.check_representable(key)?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Content {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut content = Content::new();
        for (k, v) in iter {
            content.insert(k, v);
        }
        content
    }
}

impl Value {
    fn check_representable(&self, path: &str) -> Result<()> {
        match self {
            Value::Float(f) if !f.is_finite() => Err(VersionerError::serialization(format!(
                "non-finite float {} at `{}`",
                f, path
            ))),
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .try_for_each(|(i, item)| item.check_representable(&format!("{}[{}]", path, i))),
            Value::Mapping(map) => map
                .iter()
                .try_for_each(|(k, v)| v.check_representable(&format!("{}.{}", path, k))),
            _ => Ok(()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for Content {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Literal conversions
// ---------------------------------------------------------------------------

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Content> for Value {
    fn from(map: Content) -> Self {
        Value::Mapping(map)
    }
}

// ---------------------------------------------------------------------------
// Document conversions
// ---------------------------------------------------------------------------

fn float_value(f: f64) -> Result<Value> {
    if f.is_finite() {
        Ok(Value::Float(f))
    } else {
        Err(VersionerError::serialization(format!(
            "non-finite float {} is not supported",
            f
        )))
    }
}

impl TryFrom<serde_yaml::Value> for Value {
    type Error = VersionerError;

    fn try_from(value: serde_yaml::Value) -> Result<Self> {
        match value {
            serde_yaml::Value::Null => Ok(Value::Null),
            serde_yaml::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if n.is_u64() {
                    Err(VersionerError::serialization(format!(
                        "integer {} does not fit in i64",
                        n
                    )))
                } else {
                    float_value(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_yaml::Value::String(s) => Ok(Value::String(s)),
            serde_yaml::Value::Sequence(items) => items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Value::Sequence),
            serde_yaml::Value::Mapping(map) => {
                Content::try_from(serde_yaml::Value::Mapping(map)).map(Value::Mapping)
            }
            serde_yaml::Value::Tagged(tagged) => Err(VersionerError::serialization(format!(
                "tagged value `{}` is not supported",
                tagged.tag
            ))),
        }
    }
}

impl TryFrom<serde_yaml::Value> for Content {
    type Error = VersionerError;

    /// A null document (empty file) becomes an empty mapping.
    fn try_from(value: serde_yaml::Value) -> Result<Self> {
        match value {
            serde_yaml::Value::Null => Ok(Content::new()),
            serde_yaml::Value::Mapping(map) => {
                let mut content = Content::new();
                for (k, v) in map {
                    let key = match k {
                        serde_yaml::Value::String(s) => s,
                        other => {
                            return Err(VersionerError::serialization(format!(
                                "mapping key must be a string, got {:?}",
                                other
                            )))
                        }
                    };
                    content.insert(key, Value::try_from(v)?);
                }
                Ok(content)
            }
            _ => Err(VersionerError::InvalidInput {
                reason: "document root must be a mapping".to_string(),
            }),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = VersionerError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if n.is_u64() {
                    Err(VersionerError::serialization(format!(
                        "integer {} does not fit in i64",
                        n
                    )))
                } else {
                    float_value(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>>>()
                .map(Value::Sequence),
            serde_json::Value::Object(map) => {
                Content::try_from(serde_json::Value::Object(map)).map(Value::Mapping)
            }
        }
    }
}

impl TryFrom<serde_json::Value> for Content {
    type Error = VersionerError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => {
                let mut content = Content::new();
                for (k, v) in map {
                    content.insert(k, Value::try_from(v)?);
                }
                Ok(content)
            }
            _ => Err(VersionerError::InvalidInput {
                reason: "document root must be an object".to_string(),
            }),
        }
    }
}

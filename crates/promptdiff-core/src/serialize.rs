//! Deterministic line rendering of version content.
//!
//! Content is rendered as block-style YAML in insertion order with Unicode
//! emitted verbatim. The rendering is what the diff engine compares, so it
//! must be a pure function of the content.

use crate::errors::{Result, VersionerError};
use crate::model::{Content, Version};

/// Prefixes that would turn a rendered line into a `---`/`+++` header once a
/// diff marker is prepended.
const HEADER_LIKE: [&str; 2] = ["--", "++"];

/// Render a version's content as an ordered sequence of lines.
///
/// Empty content renders as no lines at all, so an empty side contributes
/// nothing but additions or deletions to a diff.
///
/// # Errors
///
/// Returns `VersionerError::Serialization` if the content holds a value that
/// cannot be rendered losslessly (a non-finite float).
pub fn serialize(version: &Version) -> Result<Vec<String>> {
    serialize_content(version.content())
}

/// Render bare content; see [`serialize`].
///
/// # Errors
///
/// Returns `VersionerError::Serialization` for non-representable values, or
/// for a rendered line that would read as a diff header and cannot be quoted.
pub fn serialize_content(content: &Content) -> Result<Vec<String>> {
    if content.is_empty() {
        return Ok(Vec::new());
    }
    content.check_representable()?;
    let text = serde_yaml::to_string(content)?;
    text.lines().map(guard_line).collect()
}

/// Quote a top-level plain key that begins like a diff header.
///
/// Only unindented mapping keys can start a rendered line with `--` or `++`;
/// nested lines are indented and sequence items start with `- `. A plain key
/// ends at the first `: ` (or a trailing `:`), so everything before it is
/// re-emitted as a single-quoted scalar.
fn guard_line(line: &str) -> Result<String> {
    if !HEADER_LIKE.iter().any(|p| line.starts_with(p)) {
        return Ok(line.to_string());
    }
    let key_end = line
        .find(": ")
        .or_else(|| line.strip_suffix(':').map(str::len))
        .ok_or_else(|| {
            VersionerError::serialization(format!(
                "rendered line `{}` would read as a diff header",
                line
            ))
        })?;
    let (key, rest) = line.split_at(key_end);
    Ok(format!("'{}'{}", key.replace('\'', "''"), rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::VersionerError;
    use crate::model::Value;

    #[test]
    fn test_keys_rendered_in_insertion_order() {
        let content = Content::new()
            .with("zeta", "last letter")
            .with("alpha", "first letter");
        let lines = serialize_content(&content).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("zeta:"));
        assert!(lines[1].starts_with("alpha:"));
    }

    #[test]
    fn test_empty_content_has_no_lines() {
        assert!(serialize_content(&Content::new()).unwrap().is_empty());
    }

    #[test]
    fn test_unicode_emitted_verbatim() {
        let content = Content::new().with("greeting", "héllo 日本語");
        let lines = serialize_content(&content).unwrap();
        assert!(lines[0].contains("héllo 日本語"), "got: {:?}", lines);
    }

    #[test]
    fn test_nested_values_render_on_own_lines() {
        let content = Content::new()
            .with("meta", Content::new().with("author", "sam").with("draft", true))
            .with("tags", vec![Value::from("a"), Value::from("b")]);
        let lines = serialize_content(&content).unwrap();
        assert!(lines.iter().any(|l| l.trim() == "author: sam"));
        assert!(lines.iter().any(|l| l.trim() == "draft: true"));
        assert!(lines.iter().any(|l| l.trim() == "- a"));
        assert!(lines.iter().any(|l| l.trim() == "- b"));
    }

    #[test]
    fn test_header_like_keys_are_quoted() {
        let content = Content::new()
            .with("--verbose", true)
            .with("++x", Content::new().with("y", 1))
            .with("-v", 1);
        let lines = serialize_content(&content).unwrap();
        assert_eq!(lines[0], "'--verbose': true");
        assert_eq!(lines[1], "'++x':");
        assert_eq!(lines[2], "  y: 1");
        assert!(lines.iter().all(|l| !l.starts_with("--") && !l.starts_with("++")));
    }

    #[test]
    fn test_guard_line_escapes_quotes() {
        assert_eq!(guard_line("--it's: 1").unwrap(), "'--it''s': 1");
        assert_eq!(guard_line("title: x").unwrap(), "title: x");
        assert!(guard_line("--").is_err());
    }

    #[test]
    fn test_quoted_key_reads_back_unchanged() {
        let content = Content::new().with("--flag", "on");
        let text = serialize_content(&content).unwrap().join("\n");
        let doc: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(Content::try_from(doc).unwrap(), content);
    }

    #[test]
    fn test_non_finite_float_fails() {
        let content = Content::new().with("score", f64::NAN);
        let err = serialize_content(&content).unwrap_err();
        assert!(matches!(err, VersionerError::Serialization { .. }));
    }
}

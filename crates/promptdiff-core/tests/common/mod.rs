use chrono::{DateTime, TimeZone, Utc};
use promptdiff_core::{Content, Version};

/// Fixed timestamp so diff headers are reproducible
#[allow(dead_code)]
pub fn ts(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap()
}

/// Build a version with a fixed timestamp derived from its position
#[allow(dead_code)]
pub fn version(id: &str, day: u32, content: Content) -> Version {
    Version::with_timestamp(id, content, ts(day))
}

/// The prompt document used across scenario tests
#[allow(dead_code)]
pub fn prompt(version: &str, body: &str) -> Content {
    Content::new()
        .with("title", "Test Prompt")
        .with("version", version)
        .with("content", body)
}

/// Body lines of a diff that carry a change marker
#[allow(dead_code)]
pub fn marked_body_lines<'a>(diff: &'a [String], marker: char) -> Vec<&'a String> {
    diff.iter()
        .filter(|l| l.starts_with(marker) && !l.starts_with("---") && !l.starts_with("+++"))
        .collect()
}

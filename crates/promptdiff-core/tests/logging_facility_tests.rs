#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{prompt, version};
use promptdiff_core::core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ADDITIONS, FIELD_DELETIONS, FIELD_DIFF_LEN,
    FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_NEW_VERSION_ID, FIELD_OLD_VERSION_ID,
};
use promptdiff_core::logging_facility::test_capture::init_test_capture;
use promptdiff_core::{
    compare, compare_versions, log_compare_start, log_op_end, log_op_error, log_op_start,
};
use promptdiff_core::{Content, Version, VersionerError};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = VersionerError::VersionNotFound {
        version_id: "v404".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one error event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_compare_logs_start_and_end_with_ids() {
    let capture = init_test_capture();
    let old = version("log-old-unique-5", 1, prompt("1.0.0", "a"));
    let new = version("log-new-unique-5", 2, prompt("1.0.1", "b"));

    let diff = compare(&old, &new).unwrap();

    let events: Vec<_> = capture
        .events_for_op("compare")
        .into_iter()
        .filter(|e| e.field(FIELD_OLD_VERSION_ID) == Some("log-old-unique-5"))
        .collect();
    assert_eq!(events.len(), 1, "start event carries version ids");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field(FIELD_NEW_VERSION_ID), Some("log-new-unique-5"));

    let expected_len = diff.len().to_string();
    let ended = capture
        .events_for_op("compare")
        .into_iter()
        .any(|e| e.event.as_deref() == Some(EVENT_END) && e.field(FIELD_DIFF_LEN) == Some(expected_len.as_str()));
    assert!(ended, "end event carries the diff length");
}

#[test]
fn test_compare_logs_error_on_serialization_failure() {
    let capture = init_test_capture();
    let old = version("log-bad-unique-6", 1, Content::new().with("x", f64::NAN));
    let new = version("log-ok-unique-6", 2, Content::new());

    assert!(compare(&old, &new).is_err());

    let has_error = capture.events_for_op("compare").iter().any(|e| {
        e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_SERIALIZATION")
    });
    assert!(has_error);
}

#[test]
fn test_compare_versions_logs_change_counts() {
    let capture = init_test_capture();
    let old = version("log-cv-old-unique-7", 1, Content::new());
    let new = version("log-cv-new-unique-7", 2, Content::new().with("a", 1).with("b", 2));

    compare_versions(&old, &new).unwrap();

    let event = capture
        .events_for_op("compare_versions")
        .into_iter()
        .find(|e| {
            e.event.as_deref() == Some(EVENT_END)
                && e.field(FIELD_OLD_VERSION_ID) == Some("log-cv-old-unique-7")
        })
        .expect("compare_versions end event");
    assert_eq!(event.field(FIELD_ADDITIONS), Some("2"));
    assert_eq!(event.field(FIELD_DELETIONS), Some("0"));
}

#[test]
fn test_log_compare_start_macro_carries_both_ids() {
    let capture = init_test_capture();
    let op_name = "test_log_compare_start_unique_4";
    let old = Version::new("macro-old-unique-4", Content::new());
    let new = Version::new("macro-new-unique-4", Content::new());

    log_compare_start!(op_name, &old, &new);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field(FIELD_OLD_VERSION_ID), Some("macro-old-unique-4"));
    assert_eq!(events[0].field(FIELD_NEW_VERSION_ID), Some("macro-new-unique-4"));
}

#[test]
fn test_compare_versions_logs_start() {
    let capture = init_test_capture();
    let old = version("log-cv-old-unique-8", 1, prompt("1.0.0", "a"));
    let new = version("log-cv-new-unique-8", 2, prompt("1.0.0", "a"));

    compare_versions(&old, &new).unwrap();

    let started = capture.events_for_op("compare_versions").into_iter().any(|e| {
        e.event.as_deref() == Some(EVENT_START)
            && e.field(FIELD_OLD_VERSION_ID) == Some("log-cv-old-unique-8")
            && e.field(FIELD_NEW_VERSION_ID) == Some("log-cv-new-unique-8")
    });
    assert!(started);
}

#[test]
fn test_compare_versions_logs_error_on_serialization_failure() {
    let capture = init_test_capture();
    let old = version("log-cv-bad-unique-9", 1, Content::new().with("x", f64::INFINITY));
    let new = version("log-cv-ok-unique-9", 2, Content::new());

    let err = compare_versions(&old, &new).unwrap_err();
    assert!(matches!(err, VersionerError::Serialization { .. }));

    let events = capture.events_for_op("compare_versions");
    let errored = events.iter().any(|e| {
        e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_SERIALIZATION")
            && e.field(FIELD_OLD_VERSION_ID) == Some("log-cv-bad-unique-9")
    });
    assert!(errored);
}

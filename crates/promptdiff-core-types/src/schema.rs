//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between emitters and the
//! test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Version identifiers
pub const FIELD_OLD_VERSION_ID: &str = "old_version_id";
pub const FIELD_NEW_VERSION_ID: &str = "new_version_id";

// Collection sizes
pub const FIELD_OLD_LINES: &str = "old_lines";
pub const FIELD_NEW_LINES: &str = "new_lines";
pub const FIELD_DIFF_LEN: &str = "diff_len";
pub const FIELD_ADDITIONS: &str = "additions";
pub const FIELD_DELETIONS: &str = "deletions";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

//! Canonical logging macros

/// Log the start of an operation
///
/// ```
/// # use promptdiff_core::log_op_start;
/// log_op_start!("compare");
/// log_op_start!("compare", old_version_id = "v1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use promptdiff_core::log_op_end;
/// log_op_end!("compare", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error with its stable kind and code
///
/// ```
/// # use promptdiff_core::{log_op_error, VersionerError};
/// let err = VersionerError::VersionNotFound { version_id: "v9".to_string() };
/// log_op_error!("get_version", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}

/// Log the start of an operation over an old/new version pair
///
/// Expands to [`log_op_start!`] with `old_version_id` and `new_version_id`
/// taken from the two versions.
///
/// ```
/// # use promptdiff_core::{log_compare_start, Content, Version};
/// let old = Version::new("v1", Content::new());
/// let new = Version::new("v2", Content::new());
/// log_compare_start!("compare", &old, &new);
/// ```
#[macro_export]
macro_rules! log_compare_start {
    ($op:expr, $old:expr, $new:expr) => {
        $crate::log_op_start!(
            $op,
            old_version_id = $old.version_id(),
            new_version_id = $new.version_id()
        )
    };
}

//! Tracing utilities for sort normalization, grouping and validation events.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site. Disabled macros still borrow their arguments so values
//! computed only for an event don't trip unused-variable lints.

/// Emit a debug-level event for a sort request step.
///
/// ```ignore
/// trace_sort!("dropped", request.name);
/// trace_sort!("tie_break", stable_key);
/// ```
macro_rules! trace_sort {
    ($event:literal, $field:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(event = $event, field = %$field, "query_utils.sort");
        #[cfg(not(feature = "tracing"))]
        let _ = &$field;
    };
}

/// Emit a trace-level event when a grouped run is emitted.
macro_rules! trace_group {
    ($rows:expr, $fields:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(rows = $rows, fields = $fields, "query_utils.group");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$rows, &$fields);
    };
}

/// Emit a debug-level event when a composite key collides with a leaf value.
macro_rules! trace_path_conflict {
    ($path:expr, $segment:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(path = %$path, segment = %$segment, "query_utils.path_conflict");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$path, &$segment);
    };
}

/// Emit a warn-level event for a rejected write to an immutable column.
macro_rules! trace_immutable {
    ($entity:expr, $column:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(entity = %$entity, column = %$column, "query_utils.immutable_violation");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$entity, &$column);
    };
}

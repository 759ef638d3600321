//! Codec logging macros
//!
//! Thin wrappers over `tracing` that pin every event to the codec's log
//! target so subscribers can filter descriptor handling on its own.
//! `log_trace!` compiles to nothing unless the `trace-codec` feature is on,
//! since it fires on every encode and decode.

/// Debug level logging - lenient decodes that fell back to a sentinel
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        tracing::debug!(target: $crate::constants::LOG_TARGET, $($arg)*);
    }};
}

/// Warning level logging - values rejected by a closed mapping table
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        tracing::warn!(target: $crate::constants::LOG_TARGET, $($arg)*);
    }};
}

/// Trace level logging - per-call encode/decode events
#[cfg(feature = "trace-codec")]
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        tracing::trace!(target: $crate::constants::LOG_TARGET, $($arg)*);
    }};
}

/// Trace level logging - disabled without the `trace-codec` feature
#[cfg(not(feature = "trace-codec"))]
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        if false {
            tracing::trace!(target: $crate::constants::LOG_TARGET, $($arg)*);
        }
    }};
}

#![deny(missing_docs)]
//! Shared logging utilities for the job search workspace.
//!
//! This crate provides the `jobsearch_*` logging macros used across the
//! codebase, a per-thread request context that tags log lines with the search
//! request they belong to, and a minimal test initializer for the global logger.

use std::cell::Cell;

thread_local! {
    /// Token of the search request currently being handled on this thread (0 = none).
    static CURRENT_REQUEST: Cell<u64> = const { Cell::new(0) };
}

/// Tags subsequent log lines on this thread with the given request token.
pub fn set_current_request(token: u64) {
    CURRENT_REQUEST.with(|v| v.set(token));
}

/// Removes the request tag for this thread.
pub fn clear_current_request() {
    CURRENT_REQUEST.with(|v| v.set(0));
}

/// Returns the request token tagged on this thread, if any.
pub fn current_request() -> Option<u64> {
    match CURRENT_REQUEST.with(|v| v.get()) {
        0 => None,
        token => Some(token),
    }
}

/// Prefix inserted by the logging macros. Empty when no request is tagged.
#[doc(hidden)]
pub fn request_prefix() -> String {
    current_request()
        .map(|token| format!("[req {token}] "))
        .unwrap_or_default()
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! jobsearch_trace {
    ($($arg:tt)*) => {{
        log::trace!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! jobsearch_debug {
    ($($arg:tt)*) => {{
        log::debug!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! jobsearch_info {
    ($($arg:tt)*) => {{
        log::info!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! jobsearch_warn {
    ($($arg:tt)*) => {{
        log::warn!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! jobsearch_error {
    ($($arg:tt)*) => {{
        log::error!("{}{}", $crate::request_prefix(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have installed the logger first.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

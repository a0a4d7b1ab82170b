//! Structured terminal output with box-drawing layout.
//!
//! Every human-readable line astrofacts prints goes through the macros in this
//! module so the output keeps one visual shape:
//!
//! ```text
//! ┏ astrofacts v0.1.0 ━━╸
//! ┃
//! ┣ Birth profile
//! ┃   Date: 1986-03-21
//! ┃
//! ┣ Natal facts
//! ┃   Sun sign: Aries
//! ╹
//! ```
//!
//! Output can be switched off at runtime (JSON mode keeps stdout clean for the
//! serialized record), and debug lines are only emitted once debug output has
//! been enabled with [`Log::set_debug`].

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Main logging interface.
///
/// ## Conventions
///
/// - **`log_block_start!`** opens a new conceptual block (`┃` spacer, then `┣ message`).
///   Details belonging to the block follow with `log_indented!`.
/// - **`log_indented!`** prints nested details as `┃   message`.
/// - **`log_pipe!`** inserts a bare `┃` spacer, mainly before `log_warning!`,
///   or `log_info!` when they start a new block.
/// - **`log_version!`** prints the header, **`log_end!`** the closing `╹`.
/// - **`log_info!`, `log_warning!`, `log_debug!`** carry a
///   colored `[LEVEL]` tag instead of plain box drawing.
/// - **`log_error_exit!`** closes the output with `┗[ERROR]` on fatal paths.
pub struct Log;

impl Log {
    /// Enable or disable all output from the logging macros.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Enable or disable `log_debug!` output.
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if debug lines should be printed.
    pub fn is_debug() -> bool {
        Self::is_enabled() && DEBUG_ENABLED.load(Ordering::SeqCst)
    }
}

// Public so the exported macros can reach it.
pub fn write_output(text: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(text.as_bytes());
    let _ = stdout.flush();
}

/// Log an indented detail line.
#[macro_export]
macro_rules! log_indented {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("┃   {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("┃   {expr}\n"));
        }
    }};
}

/// Log a bare pipe for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Log the start of a new block.
#[macro_export]
macro_rules! log_block_start {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("┃\n┣ {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("┃\n┣ {expr}\n"));
        }
    }};
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        if $crate::logger::Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("┏ astrofacts v{version} ━━╸\n"));
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Log a warning with a yellow tag.
#[macro_export]
macro_rules! log_warning {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[33mWARNING\x1b[0m] {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("┣[\x1b[33mWARNING\x1b[0m] {expr}\n"));
        }
    }};
}

/// Log a warning outside the box layout (before any header was printed).
#[macro_export]
macro_rules! log_warning_standalone {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("[\x1b[33mWARNING\x1b[0m] {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("[\x1b[33mWARNING\x1b[0m] {expr}\n"));
        }
    }};
}

/// Log a fatal error and close the output.
///
/// Errors are printed to stderr so they still surface when JSON mode has
/// silenced the decorative logger.
#[macro_export]
macro_rules! log_error_exit {
    ($fmt:literal $($arg:tt)*) => {{
        let message = format!($fmt $($arg)*);
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output(&format!("┃\n┗[\x1b[31mERROR\x1b[0m] {message}\n"));
        } else {
            eprintln!("error: {message}");
        }
    }};
    ($expr:expr) => {{
        let expr = $expr;
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output(&format!("┃\n┗[\x1b[31mERROR\x1b[0m] {expr}\n"));
        } else {
            eprintln!("error: {expr}");
        }
    }};
}

/// Log an informational message with a green tag.
#[macro_export]
macro_rules! log_info {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[32mINFO\x1b[0m] {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::logger::Log::is_enabled() {
            let expr = $expr;
            $crate::logger::write_output(&format!("┣[\x1b[32mINFO\x1b[0m] {expr}\n"));
        }
    }};
}

/// Log a debug line; silent unless debug output is enabled.
#[macro_export]
macro_rules! log_debug {
    ($fmt:literal $($arg:tt)*) => {{
        if $crate::logger::Log::is_debug() {
            let message = format!($fmt $($arg)*);
            $crate::logger::write_output(&format!("┣[\x1b[32mDEBUG\x1b[0m] {message}\n"));
        }
    }};
    ($expr:expr) => {{
        if $crate::logger::Log::is_debug() {
            let expr = $expr;
            $crate::logger::write_output(&format!("┣[\x1b[32mDEBUG\x1b[0m] {expr}\n"));
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_debug_requires_logging_enabled() {
        Log::set_enabled(true);
        Log::set_debug(true);
        assert!(Log::is_debug());

        Log::set_enabled(false);
        assert!(!Log::is_debug());

        Log::set_enabled(true);
        Log::set_debug(false);
        assert!(!Log::is_debug());
    }
}

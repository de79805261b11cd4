#![deny(missing_docs)]
//! Shared logging utilities for the retrace workspace.
//!
//! Every component logs through a [`ScopedLogger`] so each line carries the
//! `[scope]` tag of the page that wrote it, with structured payloads
//! appended as compact JSON.

use log::Level;
use serde_json::Value;

/// A logger bound to a fixed component scope.
///
/// The scope is rendered as a `[scope] ` prefix on every line, matching the
/// tags the extension pages use to tell their output apart in a shared
/// console.
#[derive(Debug, Clone, Copy)]
pub struct ScopedLogger {
    scope: &'static str,
}

/// Logger for the extension's background page.
pub const BACKGROUND: ScopedLogger = ScopedLogger::new("background");

impl ScopedLogger {
    /// Creates a logger tagged with `scope`.
    pub const fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    /// Emits one line at `level`: the tagged message followed by each value
    /// serialized as compact JSON.
    ///
    /// Delivery is fire-and-forget; filtering is left to the global
    /// logger's configured max level.
    pub fn emit(&self, level: Level, message: &str, values: &[Value]) {
        log::log!(level, "{}", render_line(self.scope, message, values));
    }

    /// Emits at debug level.
    pub fn debug(&self, message: &str, values: &[Value]) {
        self.emit(Level::Debug, message, values);
    }

    /// Emits at info level.
    pub fn info(&self, message: &str, values: &[Value]) {
        self.emit(Level::Info, message, values);
    }

    /// Emits at warn level.
    pub fn warn(&self, message: &str, values: &[Value]) {
        self.emit(Level::Warn, message, values);
    }

    /// Emits at error level.
    pub fn error(&self, message: &str, values: &[Value]) {
        self.emit(Level::Error, message, values);
    }
}

fn render_line(scope: &str, message: &str, values: &[Value]) -> String {
    let mut line = format!("[{scope}] {message}");
    for value in values {
        line.push(' ');
        line.push_str(&value.to_string());
    }
    line
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::render_line;
    use serde_json::json;

    #[test]
    fn line_carries_scope_tag_and_json_payloads() {
        let line = render_line(
            "background",
            "visit stored",
            &[json!({"url": "https://example.com"}), json!(3)],
        );
        assert_eq!(
            line,
            "[background] visit stored {\"url\":\"https://example.com\"} 3"
        );
    }

    #[test]
    fn line_without_payloads_is_just_the_tagged_message() {
        assert_eq!(render_line("sidebar", "opened", &[]), "[sidebar] opened");
    }

    #[test]
    fn string_payloads_keep_their_json_quotes() {
        let line = render_line("background", "blacklisted", &[json!("work hours")]);
        assert_eq!(line, "[background] blacklisted \"work hours\"");
    }
}

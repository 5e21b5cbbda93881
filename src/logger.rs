//! Structured console logging for the sunweeks pipeline.
//!
//! Output follows a box-drawing layout: a version header, one decorated line
//! per pipeline stage with indented details underneath, and a closing marker.
//! Logging can be switched off at runtime so tests stay quiet.

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Log level enumeration for categorizing message importance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Warn, // Warning messages (non-fatal issues)
    Crit, // Critical errors that end the run
    Info, // Informational messages (status updates)
}

impl LogLevel {
    /// Prefix printed in front of leveled messages.
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Warn => "[WARN]",
            LogLevel::Crit => "[CRIT]",
            LogLevel::Info => "[INFO]",
        }
    }
}

/// Main logging interface providing structured output formatting.
pub struct Log;

impl Log {
    /// Enable or disable logging globally.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Log a message prefixed with its level.
    ///
    /// Warnings and critical errors go to stderr, everything else to stdout.
    pub fn log(level: LogLevel, message: &str) {
        if !Self::is_enabled() {
            return;
        }

        match level {
            LogLevel::Warn | LogLevel::Crit => eprintln!("{} {}", level.prefix(), message),
            LogLevel::Info => println!("{} {}", level.prefix(), message),
        }
    }

    // ═══ Convenience Methods for Common Log Levels ═══

    pub fn log_warning(message: &str) {
        Self::log(LogLevel::Warn, message);
    }

    pub fn log_info(message: &str) {
        Self::log(LogLevel::Info, message);
    }

    pub fn log_critical(message: &str) {
        Self::log(LogLevel::Crit, message);
    }

    // ═══ Visual Formatting Functions ═══

    /// Log a decorated message with the branching indicator.
    pub fn log_decorated(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┣ {}", message);
    }

    /// Log an indented detail line under the previous decorated message.
    pub fn log_indented(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃   {}", message);
    }

    pub fn log_pipe() {
        if !Self::is_enabled() {
            return;
        }
        println!("┃");
    }

    /// Log a block start message with visual separation.
    ///
    /// Used for each new pipeline stage.
    pub fn log_block_start(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        println!("┃");
        println!("┣ {}", message);
    }

    /// Log the application version header.
    pub fn log_version() {
        if !Self::is_enabled() {
            return;
        }
        println!("┏ sunweeks v{} ━━╸", env!("CARGO_PKG_VERSION"));
        println!("┃");
    }

    /// Log the final termination marker.
    pub fn log_end() {
        if !Self::is_enabled() {
            return;
        }
        println!("╹");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_level_prefixes() {
        assert_eq!(LogLevel::Warn.prefix(), "[WARN]");
        assert_eq!(LogLevel::Crit.prefix(), "[CRIT]");
        assert_eq!(LogLevel::Info.prefix(), "[INFO]");
    }

    #[test]
    #[serial]
    fn test_enable_toggle() {
        let original = Log::is_enabled();

        Log::set_enabled(false);
        assert!(!Log::is_enabled());
        // Must be a no-op while disabled
        Log::log_decorated("hidden");

        Log::set_enabled(true);
        assert!(Log::is_enabled());

        Log::set_enabled(original);
    }
}

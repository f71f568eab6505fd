//! Leveled console logging for the preparation run.
//!
//! Entries go to stderr so stdout stays free for the operator
//! instructions and debug command output. With [`LogFormat::Json`]
//! each entry is printed as one JSON line.

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Console rendering of log entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// A single log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting level for pretty output
    #[serde(default)]
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Render for a terminal.
    pub fn to_pretty(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }
}

/// Global logger
pub static LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// Process-wide logger, configured once by the binary.
pub struct Logger {
    format: OnceCell<LogFormat>,
    quiet: AtomicBool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            format: OnceCell::new(),
            quiet: AtomicBool::new(false),
        }
    }

    /// Set the output format. Only the first call has an effect.
    pub fn set_format(&self, format: LogFormat) {
        let _ = self.format.set(format);
    }

    /// Suppress info and success entries.
    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    /// Whether an entry of this level is printed.
    pub fn enabled(&self, level: LogLevel) -> bool {
        !self.quiet.load(Ordering::Relaxed)
            || matches!(level, LogLevel::Warning | LogLevel::Error)
    }

    pub fn log(&self, entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }
        match self.format.get().copied().unwrap_or_default() {
            LogFormat::Pretty => eprintln!("{}", entry.to_pretty()),
            LogFormat::Json => match serde_json::to_string(&entry) {
                Ok(line) => eprintln!("{}", line),
                Err(_) => eprintln!("{}", entry.to_pretty()),
            },
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure the global logger.
pub fn init(format: LogFormat, quiet: bool) {
    LOGGER.set_format(format);
    LOGGER.set_quiet(quiet);
}

pub fn log_info(msg: impl Into<String>) {
    LOGGER.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    LOGGER.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    LOGGER.log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    LOGGER.log(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.log(LogEntry::info(msg).with_indent(indent));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serialization() {
        let entry = LogEntry::warning("3 rows skipped").with_indent(1);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["level"], "warning");
        assert_eq!(json["message"], "3 rows skipped");
        assert_eq!(json["indent"], 1);
    }

    #[test]
    fn test_pretty_prefix_and_indent() {
        let line = LogEntry::success("done").with_indent(1).to_pretty();
        assert_eq!(line, "      ✓ done");
    }

    #[test]
    fn test_quiet_keeps_warnings() {
        let logger = Logger::new();
        logger.set_quiet(true);
        assert!(!logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Success));
        assert!(logger.enabled(LogLevel::Warning));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    fn test_format_set_once() {
        let logger = Logger::new();
        logger.set_format(LogFormat::Json);
        logger.set_format(LogFormat::Pretty);
        assert_eq!(logger.format.get(), Some(&LogFormat::Json));
    }
}

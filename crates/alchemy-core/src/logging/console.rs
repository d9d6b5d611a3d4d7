//! Console logger implementation

use super::file_logger::LogLevel;
use super::traits::Logger;

/// A logger that writes to stderr, filtered by a minimum level
///
/// Used by non-interactive entry points; the terminal UI cannot share stderr
/// with its own drawing and logs to a file instead.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            prefix: "[Alchemy]".to_string(),
            min_level: LogLevel::Info,
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::new()
        }
    }

    /// Only emit messages at or above `level`
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    fn format(&self, level: LogLevel, message: &str) -> Option<String> {
        (level >= self.min_level).then(|| format!("{} {}: {}", self.prefix, level, message))
    }

    fn emit(&self, level: LogLevel, message: &str) {
        if let Some(line) = self.format(level, message) {
            eprintln!("{}", line);
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_prefix() {
        let logger = ConsoleLogger::with_prefix("[Test]");
        assert_eq!(
            logger.format(LogLevel::Warn, "careful").as_deref(),
            Some("[Test] WARN : careful")
        );
    }

    #[test]
    fn test_console_logger_filters_below_min_level() {
        let logger = ConsoleLogger::new();
        assert!(logger.format(LogLevel::Debug, "hidden").is_none());
        assert!(logger.format(LogLevel::Info, "shown").is_some());

        let verbose = ConsoleLogger::new().with_min_level(LogLevel::Trace);
        assert!(verbose.format(LogLevel::Debug, "shown").is_some());
    }
}

//! File-based logger
//!
//! While the terminal UI is running it owns stdout and stderr, so every
//! component logs into a single append-only file instead. The sink is
//! process-wide; `FileLogger` values are cheap handles tagged with a module name.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

use super::traits::Logger;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse a level name, case-insensitive
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO "),
            LogLevel::Warn => write!(f, "WARN "),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

struct FileSink {
    file: Option<File>,
    min_level: LogLevel,
    enabled: bool,
}

impl FileSink {
    fn new() -> Self {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file_path())
            .ok();

        // ALCHEMY_DEBUG=0 silences the file entirely
        let enabled = std::env::var("ALCHEMY_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);
        let min_level = std::env::var("ALCHEMY_LOG_LEVEL")
            .ok()
            .and_then(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Info);

        Self { file, min_level, enabled }
    }

    fn write(&mut self, level: LogLevel, module: &str, message: &str) {
        if !self.enabled || level < self.min_level {
            return;
        }

        if let Some(ref mut file) = self.file {
            let timestamp = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| {
                    let secs = d.as_secs();
                    let millis = d.subsec_millis();
                    let hours = (secs % 86400) / 3600;
                    let mins = (secs % 3600) / 60;
                    let secs = secs % 60;
                    format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
                })
                .unwrap_or_else(|_| "??:??:??.???".to_string());

            let _ = writeln!(file, "[{}] [{}] [{}] {}", timestamp, level, module, message);
            let _ = file.flush();
        }
    }
}

static SINK: OnceLock<Mutex<FileSink>> = OnceLock::new();

fn sink() -> &'static Mutex<FileSink> {
    SINK.get_or_init(|| Mutex::new(FileSink::new()))
}

/// Write one line to the shared log file
pub fn log(level: LogLevel, module: &str, message: &str) {
    if let Ok(mut sink) = sink().lock() {
        sink.write(level, module, message);
    }
}

/// Lower or raise the file threshold at runtime (e.g. from a CLI flag)
pub fn set_min_level(level: LogLevel) {
    if let Ok(mut sink) = sink().lock() {
        sink.min_level = level;
    }
}

/// Path of the shared log file
pub fn log_file_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("alchemy-debug.log");
    path
}

/// Truncate the log file and reopen the handle
pub fn clear_log() {
    let path = log_file_path();
    if let Ok(file) = File::create(&path) {
        drop(file);
    }
    if let Ok(mut sink) = sink().lock() {
        sink.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok();
    }
}

/// `Logger` handle that writes to the shared log file
#[derive(Debug, Clone)]
pub struct FileLogger {
    module: String,
}

impl FileLogger {
    pub fn new(module: impl Into<String>) -> Self {
        Self { module: module.into() }
    }
}

impl Logger for FileLogger {
    fn debug(&self, message: &str) {
        log(LogLevel::Debug, &self.module, message);
    }

    fn info(&self, message: &str) {
        log(LogLevel::Info, &self.module, message);
    }

    fn warn(&self, message: &str) {
        log(LogLevel::Warn, &self.module, message);
    }

    fn error(&self, message: &str) {
        log(LogLevel::Error, &self.module, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Debug > LogLevel::Trace);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn test_file_logger_does_not_panic() {
        let logger = FileLogger::new("test");
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }
}

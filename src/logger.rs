//! Custom logging module.
//!
//! This module provides a custom logger implementation that captures log
//! entries into a bounded buffer shared with the application state for
//! display in the log panel. Nothing is written to the terminal directly
//! since it is owned by the user interface.

use crate::error::AppError;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept in the buffer.
///
pub const MAX_LOG_ENTRIES: usize = 500;

/// Log entries shared between the logger and the state.
///
pub type LogBuffer = Arc<Mutex<VecDeque<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Custom logger that captures logs to the shared buffer
///
pub struct CustomLogger {
    level: LevelFilter,
    buffer: LogBuffer,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            buffer: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES))),
        }
    }

    /// Return a handle to the buffer the logger writes to.
    ///
    pub fn buffer(&self) -> LogBuffer {
        Arc::clone(&self.buffer)
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Dependencies only get through with warnings and errors
        metadata.level() <= self.level
            && (metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
                || metadata.level() <= Level::Warn)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut entries) = self.buffer.lock() {
            if entries.len() >= MAX_LOG_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(format_log(record));
        }
    }

    fn flush(&self) {}
}

/// Install the custom logger as the global logger and return its buffer.
///
pub fn init(level: LevelFilter) -> Result<LogBuffer, AppError> {
    let logger = CustomLogger::new(level);
    let buffer = logger.buffer();
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_at(logger: &CustomLogger, level: Level, target: &str, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target(target)
                .build(),
        );
    }

    #[test]
    fn format_log_includes_level_and_message() {
        let formatted = format_log(
            &Record::builder()
                .args(format_args!("Loaded {} stories.", 2))
                .level(Level::Info)
                .build(),
        );
        assert!(formatted.ends_with("INFO Loaded 2 stories."));
    }

    #[test]
    fn log_captures_own_records() {
        let logger = CustomLogger::new(LevelFilter::Debug);
        log_at(&logger, Level::Debug, "hacker_stories::hn", "hello");
        let entries = logger.buffer();
        let entries = entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("DEBUG hello"));
    }

    #[test]
    fn log_respects_level() {
        let logger = CustomLogger::new(LevelFilter::Info);
        log_at(&logger, Level::Debug, "hacker_stories::hn", "hidden");
        assert!(logger.buffer().lock().unwrap().is_empty());
    }

    #[test]
    fn log_filters_dependency_noise() {
        let logger = CustomLogger::new(LevelFilter::Trace);
        log_at(&logger, Level::Debug, "reqwest::connect", "noise");
        log_at(&logger, Level::Warn, "reqwest::connect", "warning");
        let buffer = logger.buffer();
        let entries = buffer.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("warning"));
    }

    #[test]
    fn log_buffer_is_bounded() {
        let logger = CustomLogger::new(LevelFilter::Info);
        for i in 0..MAX_LOG_ENTRIES + 5 {
            log_at(&logger, Level::Info, "hacker_stories", &i.to_string());
        }
        let buffer = logger.buffer();
        let entries = buffer.lock().unwrap();
        assert_eq!(entries.len(), MAX_LOG_ENTRIES);
        assert!(entries[0].ends_with(" 5"));
    }
}

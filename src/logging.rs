//! Structured logging for the performance log extractor
//!
//! Provides leveled, structured logging with console, JSON, and compact
//! output formats, plus a scan-lifecycle logger used in debug mode.
//!
//! Standard output is reserved for extracted latency lines; every log entry
//! is written to standard error regardless of level.

use crate::error::{AppError, Result};
use crate::models::{Config, LatencyRecord, ScanSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace level - most detailed
    Trace = 0,
    /// Debug level - detailed information for debugging
    Debug = 1,
    /// Info level - general application information
    Info = 2,
    /// Warning level - potentially harmful situations
    Warn = 3,
    /// Error level - error events but application can continue
    Error = 4,
    /// Fatal level - severe error events that cause application termination
    Fatal = 5,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Get ANSI color code for console output
    pub fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Trace => "\x1b[37m",    // White
            LogLevel::Debug => "\x1b[36m",    // Cyan
            LogLevel::Info => "\x1b[32m",     // Green
            LogLevel::Warn => "\x1b[33m",     // Yellow
            LogLevel::Error => "\x1b[31m",    // Red
            LogLevel::Fatal => "\x1b[35m",    // Magenta
        }
    }

    /// Reset ANSI color code
    pub fn reset_code() -> &'static str {
        "\x1b[0m"
    }
}

impl std::str::FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// Log entry structure for structured logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp when log entry was created
    pub timestamp: DateTime<Utc>,
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Logger name/component
    pub logger: String,
    /// Additional structured fields
    pub fields: HashMap<String, serde_json::Value>,
    /// Thread ID if available
    pub thread_id: Option<String>,
}

/// Logger implementation with multiple output formats
pub struct Logger {
    /// Minimum log level to output
    min_level: LogLevel,
    /// Whether to use colored output
    use_color: bool,
    /// Output format
    format: LogFormat,
    /// Logger name
    name: String,
    /// Shared context storage
    context: Arc<RwLock<LogContext>>,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogFormat {
    /// Human-readable console format
    Console,
    /// JSON format for structured logging
    Json,
    /// Compact single-line format
    Compact,
}

/// Shared logging context for session tracking
#[derive(Debug, Default)]
struct LogContext {
    /// Global correlation ID for the session
    session_id: Option<String>,
    /// Additional context fields
    context_fields: HashMap<String, serde_json::Value>,
}

impl Logger {
    /// Create a new logger
    pub fn new(name: String) -> Self {
        Self {
            min_level: LogLevel::Info,
            use_color: true,
            format: LogFormat::Console,
            name,
            context: Arc::new(RwLock::new(LogContext::default())),
        }
    }

    /// Create a logger with specific configuration
    pub fn with_config(name: String, config: &Config) -> Self {
        let min_level = if config.debug {
            LogLevel::Debug
        } else if config.verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };

        Self {
            min_level,
            use_color: config.enable_color,
            format: if config.debug { LogFormat::Json } else { LogFormat::Console },
            name,
            context: Arc::new(RwLock::new(LogContext::default())),
        }
    }

    /// Set minimum log level
    pub fn set_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Set output format
    pub fn set_format(&mut self, format: LogFormat) {
        self.format = format;
    }

    /// Enable or disable colored output
    pub fn set_color(&mut self, use_color: bool) {
        self.use_color = use_color;
    }

    /// Set session correlation ID
    pub fn set_session_id(&self, session_id: String) {
        if let Ok(mut context) = self.context.write() {
            context.session_id = Some(session_id);
        }
    }

    /// Add context field for all subsequent log entries
    pub fn add_context_field<T: Serialize>(&self, key: String, value: T) {
        if let Ok(json_value) = serde_json::to_value(value) {
            if let Ok(mut context) = self.context.write() {
                context.context_fields.insert(key, json_value);
            }
        }
    }

    /// Create a log entry builder
    pub fn log(&self, level: LogLevel, message: &str) -> LogEntryBuilder {
        LogEntryBuilder::new(self, level, message.to_string())
    }

    /// Convenience methods for different log levels
    pub fn trace(&self, message: &str) -> LogEntryBuilder {
        self.log(LogLevel::Trace, message)
    }

    pub fn debug(&self, message: &str) -> LogEntryBuilder {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&self, message: &str) -> LogEntryBuilder {
        self.log(LogLevel::Info, message)
    }

    pub fn warn(&self, message: &str) -> LogEntryBuilder {
        self.log(LogLevel::Warn, message)
    }

    pub fn error(&self, message: &str) -> LogEntryBuilder {
        self.log(LogLevel::Error, message)
    }

    pub fn fatal(&self, message: &str) -> LogEntryBuilder {
        self.log(LogLevel::Fatal, message)
    }

    /// Check if a log level would be output
    pub fn would_log(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Write log entry to output
    fn write_entry(&self, mut entry: LogEntry) {
        // Don't output if below minimum level
        if entry.level < self.min_level {
            return;
        }

        // Add context fields
        if let Ok(context) = self.context.read() {
            if let Some(session_id) = &context.session_id {
                entry.fields.insert("session_id".to_string(), serde_json::Value::String(session_id.clone()));
            }

            for (key, value) in &context.context_fields {
                entry.fields.insert(key.clone(), value.clone());
            }
        }

        // Format and write the entry
        let output = match self.format {
            LogFormat::Console => self.format_console(&entry),
            LogFormat::Json => self.format_json(&entry),
            LogFormat::Compact => self.format_compact(&entry),
        };

        // Extractor output owns stdout; every log entry goes to stderr
        let _ = writeln!(io::stderr(), "{}", output);
    }

    /// Format log entry for console output
    fn format_console(&self, entry: &LogEntry) -> String {
        let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f");
        let level_str = entry.level.as_str();

        let formatted_level = if self.use_color {
            format!("{}{:>5}{}", entry.level.color_code(), level_str, LogLevel::reset_code())
        } else {
            format!("{:>5}", level_str)
        };

        let mut output = format!("{} {} [{}] {}",
            timestamp,
            formatted_level,
            entry.logger,
            entry.message
        );

        // Add fields if any
        if !entry.fields.is_empty() {
            let fields_str: Vec<String> = entry.fields.iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            output.push_str(&format!(" {{{}}}", fields_str.join(", ")));
        }

        output
    }

    /// Format log entry as JSON
    fn format_json(&self, entry: &LogEntry) -> String {
        match serde_json::to_string(entry) {
            Ok(json) => json,
            Err(_) => format!("{{\"error\": \"Failed to serialize log entry\", \"message\": \"{}\"}}", entry.message),
        }
    }

    /// Format log entry in compact format
    fn format_compact(&self, entry: &LogEntry) -> String {
        let timestamp = entry.timestamp.format("%H:%M:%S");
        format!("{} {} {}: {}",
            timestamp,
            entry.level.as_str().chars().next().unwrap_or('?'),
            entry.logger,
            entry.message
        )
    }
}

/// Builder pattern for creating log entries
pub struct LogEntryBuilder<'a> {
    logger: &'a Logger,
    entry: LogEntry,
}

impl<'a> LogEntryBuilder<'a> {
    fn new(logger: &'a Logger, level: LogLevel, message: String) -> Self {
        Self {
            logger,
            entry: LogEntry {
                timestamp: Utc::now(),
                level,
                message,
                logger: logger.name.clone(),
                fields: HashMap::new(),
                thread_id: std::thread::current().name().map(String::from),
            },
        }
    }

    /// Add a structured field
    pub fn field<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.entry.fields.insert(key.to_string(), json_value);
        }
        self
    }

    /// Add error information
    pub fn error_info(self, error: &AppError) -> Self {
        self.field("error_category", error.category())
            .field("error_recoverable", error.is_recoverable())
            .field("error_exit_code", error.exit_code())
    }

    /// Finalize and write the log entry
    pub fn log(self) {
        self.logger.write_entry(self.entry);
    }
}

/// Specialized logger for the scan lifecycle
pub struct ScanLogger {
    logger: Logger,
}

impl ScanLogger {
    /// Create a new scan logger
    pub fn new(config: &Config) -> Self {
        Self {
            logger: Logger::with_config("SCAN".to_string(), config),
        }
    }

    /// Log the start of a file scan
    pub fn log_scan_started(&self, path: &str) {
        self.logger.debug(&format!("Scanning '{}'", path))
            .field("file", path)
            .field("operation_type", "start")
            .log();
    }

    /// Log one extracted record
    pub fn log_record(&self, record: &LatencyRecord) {
        self.logger.debug(&format!("line {}: {}us -> {}ms", record.line_number, record.microseconds, record.format_millis()))
            .field("line", record.line_number)
            .field("microseconds", record.microseconds)
            .field("milliseconds", record.millis())
            .log();
    }

    /// Log scan completion with summary counters
    pub fn log_scan_complete(&self, path: &str, summary: &ScanSummary) {
        self.logger.info(&format!("Scan of '{}' complete: {} lines, {} matches", path, summary.lines_scanned, summary.lines_matched))
            .field("file", path)
            .field("lines_scanned", summary.lines_scanned)
            .field("lines_matched", summary.lines_matched)
            .field("match_rate", summary.match_rate())
            .field("operation_type", "end")
            .log();
    }

    /// Log a failed scan with error context
    pub fn log_scan_failed(&self, path: &str, error: &AppError) {
        self.logger.error(&format!("Scan of '{}' failed: {}", path, error))
            .field("file", path)
            .error_info(error)
            .log();
    }
}

/// Global logger factory and management
pub struct LoggerFactory {
    config: Config,
    session_id: String,
}

impl LoggerFactory {
    /// Create a new logger factory
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create a logger with a specific name
    pub fn create_logger(&self, name: &str) -> Logger {
        let logger = Logger::with_config(name.to_string(), &self.config);
        logger.set_session_id(self.session_id.clone());
        logger
    }

    /// Create a scan logger
    pub fn create_scan_logger(&self) -> ScanLogger {
        let scan_logger = ScanLogger::new(&self.config);
        scan_logger.logger.set_session_id(self.session_id.clone());
        scan_logger
    }

    /// Get session ID
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_log_level_strings() {
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Info.as_str(), "INFO");
        assert_eq!(LogLevel::Warn.as_str(), "WARN");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
        assert_eq!(LogLevel::Fatal.as_str(), "FATAL");
    }

    #[test]
    fn test_logger_creation() {
        let logger = Logger::new("TEST".to_string());
        assert_eq!(logger.name, "TEST");
        assert_eq!(logger.min_level, LogLevel::Info);
        assert!(logger.use_color);
    }

    #[test]
    fn test_logger_with_config() {
        let config = Config {
            debug: true,
            verbose: true,
            enable_color: false,
            ..Default::default()
        };

        let logger = Logger::with_config("TEST".to_string(), &config);
        assert_eq!(logger.min_level, LogLevel::Debug);
        assert!(!logger.use_color);
        assert_eq!(logger.format, LogFormat::Json);
    }

    #[test]
    fn test_quiet_config_logs_warnings_only() {
        let config = Config::default();
        let logger = Logger::with_config("TEST".to_string(), &config);
        assert!(!logger.would_log(LogLevel::Debug));
        assert!(!logger.would_log(LogLevel::Info));
        assert!(logger.would_log(LogLevel::Warn));
    }

    #[test]
    fn test_session_id_management() {
        let logger = Logger::new("TEST".to_string());
        logger.set_session_id("test-session".to_string());

        let context = logger.context.read().unwrap();
        assert_eq!(context.session_id.as_ref().unwrap(), "test-session");
    }

    #[test]
    fn test_context_fields() {
        let logger = Logger::new("TEST".to_string());
        logger.add_context_field("test_key".to_string(), "test_value");

        let context = logger.context.read().unwrap();
        assert!(context.context_fields.contains_key("test_key"));
    }

    #[test]
    fn test_would_log() {
        let mut logger = Logger::new("TEST".to_string());
        logger.set_level(LogLevel::Warn);

        assert!(!logger.would_log(LogLevel::Debug));
        assert!(!logger.would_log(LogLevel::Info));
        assert!(logger.would_log(LogLevel::Warn));
        assert!(logger.would_log(LogLevel::Error));
        assert!(logger.would_log(LogLevel::Fatal));
    }

    #[test]
    fn test_log_entry_builder() {
        let logger = Logger::new("TEST".to_string());

        // Builder pattern works without panicking
        logger.info("test message")
            .field("test_field", "test_value")
            .log();
    }

    #[test]
    fn test_logger_reconfiguration() {
        let mut logger = Logger::new("TEST".to_string());
        logger.set_format(LogFormat::Compact);
        logger.set_color(false);
        logger.set_level(LogLevel::Trace);

        assert!(logger.would_log(LogLevel::Trace));

        // All level builders produce entries without panicking
        logger.trace("trace message").log();
        logger.debug("debug message").log();
        logger.warn("warn message").log();
        logger.error("error message").log();
        logger.fatal("fatal message").log();
    }

    #[test]
    fn test_scan_logger_creation() {
        let config = Config::default();
        let scan_logger = ScanLogger::new(&config);
        assert_eq!(scan_logger.logger.name, "SCAN");
    }

    #[test]
    fn test_logger_factory() {
        let config = Config::default();
        let factory = LoggerFactory::new(config);

        let logger = factory.create_logger("TEST");
        assert_eq!(logger.name, "TEST");

        let session_id = factory.session_id();
        assert!(!session_id.is_empty());
    }

    #[test]
    fn test_log_formats() {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            message: "Test message".to_string(),
            logger: "TEST".to_string(),
            fields: {
                let mut map = HashMap::new();
                map.insert("key".to_string(), serde_json::Value::String("value".to_string()));
                map
            },
            thread_id: None,
        };

        let logger = Logger::new("TEST".to_string());

        // Test console format
        let console_output = logger.format_console(&entry);
        assert!(console_output.contains("INFO"));
        assert!(console_output.contains("Test message"));

        // Test JSON format
        let json_output = logger.format_json(&entry);
        assert!(json_output.starts_with('{'));
        assert!(json_output.ends_with('}'));

        // Test compact format
        let compact_output = logger.format_compact(&entry);
        assert!(compact_output.contains('I')); // First character of INFO
        assert!(compact_output.contains("Test message"));
    }

    #[test]
    fn test_scan_lifecycle_logging() {
        let config = Config {
            debug: true,
            ..Default::default()
        };
        let scan_logger = ScanLogger::new(&config);

        scan_logger.log_scan_started("perf.log");
        scan_logger.log_record(&LatencyRecord::new(1, 1500));

        let mut summary = ScanSummary::new();
        summary.record_line();
        summary.record_match();
        scan_logger.log_scan_complete("perf.log", &summary);

        let error = AppError::parse("line 2: invalid latency token 'abc'");
        scan_logger.log_scan_failed("perf.log", &error);
    }

    #[test]
    fn test_log_entry_serialization() {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            message: "Test".to_string(),
            logger: "TEST".to_string(),
            fields: HashMap::new(),
            thread_id: None,
        };

        // Log entry can be serialized/deserialized
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: LogEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.level, LogLevel::Info);
        assert_eq!(deserialized.message, "Test");
        assert_eq!(deserialized.logger, "TEST");
    }
}

//! Performance Log Extractor
//!
//! A command-line tool that scans performance-log files for average-latency
//! lines, converts the embedded microsecond values to milliseconds, and
//! prints one fixed-point value per matching line.

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod logging;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use error::{AppError, ErrorReporter, Result};
pub use extractor::LatencyExtractor;
pub use models::{Config, LatencyRecord, ScanSummary};
pub use output::{ColoredFormatter, OutputCoordinator, OutputFormatter, OutputFormatterFactory, PlainFormatter};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    /// Substring that selects lines of interest
    pub const DEFAULT_MARKER: &str = "Avg";

    /// Unit suffix that terminates the latency token in a matching line
    pub const DEFAULT_UNIT_SUFFIX: &str = "us";

    /// Sentinel path used when no file is supplied; opened like any other
    /// path and expected to fail at open time
    pub const DEFAULT_FILE_PATH: &str = "none";

    pub const DEFAULT_ENABLE_COLOR: bool = true;

    /// Divisor for the microsecond to millisecond conversion
    pub const MICROS_PER_MILLI: f64 = 1000.0;
}

//! Output formatting and display system
//!
//! Provides the formatting trait with plain and colored implementations,
//! a factory keyed on color preference, and a coordinator that routes
//! record lines to standard output and diagnostics to standard error.

mod colored;
mod formatter;

pub use colored::{ColorScheme, ColoredFormatter};
pub use formatter::{FormattingOptions, OutputFormatter, PlainFormatter};

use crate::{
    error::Result,
    models::{LatencyRecord, ScanSummary},
};
use std::io::Write;

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool, verbose: bool) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn OutputFormatter> {
        Self::create_formatter(false, false)
    }
}

/// Main output coordinator that handles all result display
///
/// Record lines go to the writer handed to `emit_record` (stdout in the
/// binary); summaries and warnings go to standard error so the record
/// stream stays machine-readable.
pub struct OutputCoordinator {
    formatter: Box<dyn OutputFormatter>,
}

impl OutputCoordinator {
    /// Create a new output coordinator with the specified formatter
    pub fn new(formatter: Box<dyn OutputFormatter>) -> Self {
        Self { formatter }
    }

    /// Write one record line to the given writer
    pub fn emit_record<W: Write>(&self, out: &mut W, record: &LatencyRecord) -> Result<()> {
        let line = self.formatter.format_record(record)?;
        writeln!(out, "{}", line)?;
        Ok(())
    }

    /// Write the scan summary to standard error
    pub fn emit_summary(&self, summary: &ScanSummary) -> Result<()> {
        let output = self.formatter.format_summary(summary)?;
        eprint!("{}", output);
        Ok(())
    }
}

//! Core formatting traits and implementations
//!
//! This module defines the output formatting interface and provides the
//! plain text implementation. Record lines are the program's data contract
//! and are rendered identically by every formatter; only diagnostics
//! (warnings, summaries, errors) differ between implementations.

use crate::{
    error::Result,
    models::{LatencyRecord, ScanSummary},
};

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format one extracted latency record as its output line
    ///
    /// Always the bare millisecond value with two fractional digits; no
    /// labels, units, or color.
    fn format_record(&self, record: &LatencyRecord) -> Result<String>;

    /// Format the scan summary shown in verbose mode
    fn format_summary(&self, summary: &ScanSummary) -> Result<String>;

    /// Format error messages
    fn format_error(&self, error: &str) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;

    /// Format success messages
    fn format_success(&self, message: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output for diagnostics
    pub enable_color: bool,
    /// Enable verbose mode with detailed information
    pub verbose_mode: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
        }
    }
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_record(&self, record: &LatencyRecord) -> Result<String> {
        Ok(record.format_millis())
    }

    fn format_summary(&self, summary: &ScanSummary) -> Result<String> {
        let mut output = String::new();
        output.push_str("Scan summary:\n");
        output.push_str(&format!("  Lines scanned: {}\n", summary.lines_scanned));
        output.push_str(&format!("  Lines matched: {}\n", summary.lines_matched));
        if self.options.verbose_mode {
            output.push_str(&format!("  Match rate: {:.1}%\n", summary.match_rate()));
        }
        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("Error: {}", error))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("Warning: {}", warning))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(format!("Success: {}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> PlainFormatter {
        PlainFormatter::new(FormattingOptions {
            enable_color: false,
            verbose_mode: false,
        })
    }

    #[test]
    fn test_record_line_is_bare_decimal() {
        let formatter = plain();
        let line = formatter.format_record(&LatencyRecord::new(1, 1500)).unwrap();
        assert_eq!(line, "1.50");

        let line = formatter.format_record(&LatencyRecord::new(9, 999)).unwrap();
        assert_eq!(line, "1.00");
    }

    #[test]
    fn test_summary_counters_present() {
        let mut summary = ScanSummary::new();
        summary.record_line();
        summary.record_line();
        summary.record_match();

        let formatter = plain();
        let output = formatter.format_summary(&summary).unwrap();
        assert!(output.contains("Lines scanned: 2"));
        assert!(output.contains("Lines matched: 1"));
        assert!(!output.contains("Match rate"));
    }

    #[test]
    fn test_verbose_summary_includes_match_rate() {
        let formatter = PlainFormatter::new(FormattingOptions {
            enable_color: false,
            verbose_mode: true,
        });

        let mut summary = ScanSummary::new();
        summary.record_line();
        summary.record_match();

        let output = formatter.format_summary(&summary).unwrap();
        assert!(output.contains("Match rate: 100.0%"));
    }

    #[test]
    fn test_message_formatting() {
        let formatter = plain();
        assert_eq!(formatter.format_error("boom").unwrap(), "Error: boom");
        assert_eq!(formatter.format_warning("careful").unwrap(), "Warning: careful");
        assert_eq!(formatter.format_success("done").unwrap(), "Success: done");
    }
}

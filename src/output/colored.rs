//! Colored output formatting
//!
//! Applies terminal colors to diagnostics. Record lines are exempt: they
//! are the machine-readable contract of the program and stay identical to
//! the plain formatter's output.

use crate::{
    error::Result,
    models::{LatencyRecord, ScanSummary},
    output::formatter::{FormattingOptions, OutputFormatter},
};
use colored::Colorize;

/// Color scheme for diagnostic output
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub error: colored::Color,
    pub warning: colored::Color,
    pub success: colored::Color,
    pub heading: colored::Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            error: colored::Color::Red,
            warning: colored::Color::Yellow,
            success: colored::Color::Green,
            heading: colored::Color::Cyan,
        }
    }
}

/// Formatter that colors diagnostics for interactive terminals
pub struct ColoredFormatter {
    options: FormattingOptions,
    scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self {
            options,
            scheme: ColorScheme::default(),
        }
    }

    /// Create a colored formatter with a custom scheme
    pub fn with_scheme(options: FormattingOptions, scheme: ColorScheme) -> Self {
        Self { options, scheme }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_record(&self, record: &LatencyRecord) -> Result<String> {
        // Never colorized
        Ok(record.format_millis())
    }

    fn format_summary(&self, summary: &ScanSummary) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Scan summary:".color(self.scheme.heading).bold()));
        output.push_str(&format!("  Lines scanned: {}\n", summary.lines_scanned));
        output.push_str(&format!("  Lines matched: {}\n", summary.lines_matched));
        if self.options.verbose_mode {
            output.push_str(&format!("  Match rate: {:.1}%\n", summary.match_rate()));
        }
        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("{} {}", "Error:".color(self.scheme.error).bold(), error.color(self.scheme.error)))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("{} {}", "Warning:".color(self.scheme.warning).bold(), warning.color(self.scheme.warning)))
    }

    fn format_success(&self, message: &str) -> Result<String> {
        Ok(format!("{} {}", "Success:".color(self.scheme.success).bold(), message.color(self.scheme.success)))
    }
}

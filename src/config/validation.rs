//! Non-fatal configuration checks
//!
//! `Config::validate` rejects configurations the program cannot run with;
//! the checks here only produce warnings. The log file path is deliberately
//! not probed against the filesystem: open-time failures are the
//! extractor's to report.

use crate::{error::Result, models::Config};

/// A non-fatal configuration warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// What is questionable about the configuration
    pub message: String,
    /// Optional hint for resolving the warning
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    /// Create a new warning
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attach a suggestion to the warning
    pub fn with_suggestion<S: Into<String>>(mut self, suggestion: S) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Format the warning for console display
    pub fn format(&self, use_color: bool) -> String {
        let text = match &self.suggestion {
            Some(suggestion) => format!("{} ({})", self.message, suggestion),
            None => self.message.clone(),
        };

        if use_color {
            use colored::Colorize;
            format!("{} {}", "warning:".yellow().bold(), text)
        } else {
            format!("warning: {}", text)
        }
    }
}

/// Check a validated configuration for questionable settings
pub fn validate_config(config: &Config) -> Result<Vec<ConfigWarning>> {
    let mut warnings = Vec::new();

    if config.uses_sentinel_path() {
        warnings.push(
            ConfigWarning::new("no log file provided; the default path 'none' will be opened")
                .with_suggestion("pass --file <PATH> or set PERF_LOG_FILE"),
        );
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_path_warns() {
        let config = Config::default();
        let warnings = validate_config(&config).unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("no log file provided"));
        assert!(warnings[0].suggestion.as_ref().unwrap().contains("--file"));
    }

    #[test]
    fn test_explicit_path_is_clean() {
        let mut config = Config::default();
        config.file_path = "perf.log".to_string();
        let warnings = validate_config(&config).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_warning_formatting() {
        let warning = ConfigWarning::new("something odd").with_suggestion("try this");

        let plain = warning.format(false);
        assert!(plain.starts_with("warning:"));
        assert!(plain.contains("something odd"));
        assert!(plain.contains("try this"));

        let colored = warning.format(true);
        assert!(colored.contains("something odd"));
    }
}

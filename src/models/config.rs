//! Configuration data model and validation

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the performance-log file to read
    #[serde(default = "default_file_path")]
    pub file_path: String,

    /// Enable colored terminal output for diagnostics
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        // The path is not checked against the filesystem here; open-time
        // failures are surfaced by the extractor as file access errors.
        if self.file_path.is_empty() {
            return Err(AppError::config("Log file path cannot be empty"));
        }

        Ok(())
    }

    /// Check whether the file path is still the "no file provided" sentinel
    pub fn uses_sentinel_path(&self) -> bool {
        self.file_path == crate::defaults::DEFAULT_FILE_PATH
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(file_path) = std::env::var("PERF_LOG_FILE") {
            let file_path = file_path.trim().to_string();
            if !file_path.is_empty() {
                self.file_path = file_path;
            }
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_file_path() -> String {
    crate::defaults::DEFAULT_FILE_PATH.to_string()
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}

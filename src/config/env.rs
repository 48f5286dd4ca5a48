//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        // Try to load .env from current directory
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                eprintln!("Loaded configuration from .env file");
            }
        } else if debug {
            eprintln!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# Performance Log Extractor Configuration
#
# This file contains environment variables that can be used to configure
# the performance log extractor. Values specified here will be used as
# defaults, but can be overridden by command-line arguments.

# Performance-log file to read
# PERF_LOG_FILE=results/perf_run.log

# Enable colored diagnostics (true/false)
# ENABLE_COLOR=true
"#.to_string()
    }

    /// Save example .env file to disk
    pub fn save_example_env_file(path: &Path) -> Result<()> {
        use std::fs;

        let content = Self::create_example_env_content();
        fs::write(path, content)
            .map_err(|e| AppError::config(format!("Failed to write example .env file: {}", e)))?;

        Ok(())
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            "PERF_LOG_FILE" => {
                if value.trim().is_empty() {
                    return Err(AppError::config("PERF_LOG_FILE cannot be empty"));
                }
            }
            "ENABLE_COLOR" => {
                value.parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", value, e)))?;
            }
            _ => {
                // Unknown variables are ignored rather than rejected
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_env_content_documents_variables() {
        let content = EnvManager::create_example_env_content();
        assert!(content.contains("PERF_LOG_FILE"));
        assert!(content.contains("ENABLE_COLOR"));
    }

    #[test]
    fn test_save_example_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.example");

        EnvManager::save_example_env_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("PERF_LOG_FILE"));
    }

    #[test]
    fn test_validate_env_var() {
        assert!(EnvManager::validate_env_var("PERF_LOG_FILE", "perf.log").is_ok());
        assert!(EnvManager::validate_env_var("PERF_LOG_FILE", "   ").is_err());

        assert!(EnvManager::validate_env_var("ENABLE_COLOR", "true").is_ok());
        assert!(EnvManager::validate_env_var("ENABLE_COLOR", "false").is_ok());
        assert!(EnvManager::validate_env_var("ENABLE_COLOR", "yes").is_err());

        // Unknown keys pass through
        assert!(EnvManager::validate_env_var("UNRELATED", "anything").is_ok());
    }
}

//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    config::env::EnvManager,
    error::Result,
    models::Config,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        // Start with default configuration
        let mut config = Config::default();

        // Load from environment file if it exists
        self.load_env_file()?;

        // Merge environment variables into config
        config.merge_from_env()?;

        // Override with CLI arguments
        self.apply_cli_overrides(&mut config);

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Load .env file if it exists
    fn load_env_file(&self) -> Result<()> {
        EnvManager::load_env_file(self.cli.debug)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        // Override file path if specified
        if self.cli.file != crate::defaults::DEFAULT_FILE_PATH {
            config.file_path = self.cli.file.clone();
        }

        // Color flags win over environment and auto-detection
        if self.cli.color {
            config.enable_color = true;
        }
        if self.cli.no_color {
            config.enable_color = false;
        }

        // Set verbose and debug flags (these are CLI-only)
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        if config.debug {
            eprintln!("Applied CLI overrides to configuration");
            eprintln!("Final config: file_path={}, enable_color={}",
                    config.file_path, config.enable_color);
        }
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    let parser = ConfigParser::new(cli);
    parser.parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Log file: {}", config.file_path));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global; serialise the tests that touch them
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_parser_defaults() {
        // Default configuration values are correctly set without environment interference
        let config = Config::default();

        assert_eq!(config.file_path, crate::defaults::DEFAULT_FILE_PATH);
        assert_eq!(config.enable_color, crate::defaults::DEFAULT_ENABLE_COLOR);
        assert!(!config.verbose);
        assert!(!config.debug);

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::remove_var("PERF_LOG_FILE");
        env::remove_var("ENABLE_COLOR");

        let cli = Cli::parse_from(["test", "--file", "custom.log", "--no-color", "--verbose"]);
        let config = load_config(cli).unwrap();

        assert_eq!(config.file_path, "custom.log");
        assert!(!config.enable_color);
        assert!(config.verbose);
        assert!(!config.debug);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PERF_LOG_FILE", "from_env.log");
        env::remove_var("ENABLE_COLOR");

        let cli = Cli::parse_from(["test"]);
        let config = load_config(cli).unwrap();
        assert_eq!(config.file_path, "from_env.log");

        env::remove_var("PERF_LOG_FILE");
    }

    #[test]
    fn test_cli_wins_over_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PERF_LOG_FILE", "from_env.log");

        let cli = Cli::parse_from(["test", "--file", "from_cli.log"]);
        let config = load_config(cli).unwrap();
        assert_eq!(config.file_path, "from_cli.log");

        env::remove_var("PERF_LOG_FILE");
    }

    #[test]
    fn test_invalid_enable_color_env_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("ENABLE_COLOR", "maybe");

        let cli = Cli::parse_from(["test"]);
        let result = load_config(cli);
        assert!(result.is_err());

        env::remove_var("ENABLE_COLOR");
    }

    #[test]
    fn test_display_config_summary() {
        let config = Config {
            file_path: "perf.log".to_string(),
            enable_color: false,
            verbose: true,
            debug: false,
        };

        let summary = display_config_summary(&config);
        assert!(summary.contains("Log file: perf.log"));
        assert!(summary.contains("Color Output: false"));
        assert!(summary.contains("Verbose: true"));
    }
}

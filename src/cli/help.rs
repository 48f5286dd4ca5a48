//! Command-line help system with examples and detailed guidance
//!
//! This module provides detailed help text, usage examples, and contextual
//! guidance for the performance log extractor.

use crate::config::env::EnvManager;
use colored::*;

/// Help system for the CLI application
pub struct HelpSystem {
    platform: String,
}

impl HelpSystem {
    /// Create a new help system
    pub fn new() -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
        }
    }

    /// Display the main help message with all available options
    pub fn display_main_help(&self, use_colors: bool) -> String {
        let mut help = String::new();

        // Header
        help.push_str(&self.format_header(use_colors));
        help.push('\n');

        // Usage section
        help.push_str(&self.format_usage_section(use_colors));
        help.push('\n');

        // Options section
        help.push_str(&self.format_options_section(use_colors));
        help.push('\n');

        // Examples section
        help.push_str(&self.format_examples_section(use_colors));
        help.push('\n');

        // Environment variables section
        help.push_str(&self.format_environment_help(use_colors));
        help.push('\n');

        // Footer with additional resources
        help.push_str(&self.format_footer(use_colors));

        help
    }

    /// Display quick help for specific topics
    pub fn display_topic_help(&self, topic: &str, use_colors: bool) -> Option<String> {
        match topic.to_lowercase().as_str() {
            "config" | "configuration" => Some(self.format_configuration_help(use_colors)),
            "env" | "environment" => Some(self.format_environment_help(use_colors)),
            "format" | "input" => Some(self.format_input_format_help(use_colors)),
            "output" | "formatting" => Some(self.format_output_help(use_colors)),
            "examples" => Some(self.format_examples_section(use_colors)),
            _ => None,
        }
    }

    /// Format the main header
    fn format_header(&self, use_colors: bool) -> String {
        let title = "Performance Log Extractor";
        let subtitle = "Reports average-latency samples from performance logs in milliseconds";
        let version = env!("CARGO_PKG_VERSION");

        if use_colors {
            format!(
                "{}\n{}\nVersion: {} | Platform: {}\n",
                title.bright_cyan().bold(),
                subtitle.bright_blue(),
                version.green(),
                self.platform.yellow()
            )
        } else {
            format!(
                "{}\n{}\nVersion: {} | Platform: {}\n",
                title, subtitle, version, self.platform
            )
        }
    }

    /// Format the usage section
    fn format_usage_section(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "USAGE:".bright_green().bold().to_string()
        } else {
            "USAGE:".to_string()
        };

        format!(
            "{}\n    plx --file <PATH> [OPTIONS]\n",
            header
        )
    }

    /// Format the options section
    fn format_options_section(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "OPTIONS:".bright_green().bold().to_string()
        } else {
            "OPTIONS:".to_string()
        };

        let mut section = format!("{}\n", header);
        section.push_str("    -f, --file <PATH>        Performance-log file to read (default: none)\n");
        section.push_str("        --color              Force colored diagnostics\n");
        section.push_str("        --no-color           Disable colored diagnostics\n");
        section.push_str("        --verbose            Print a scan summary on stderr\n");
        section.push_str("        --debug              Structured scan logging on stderr\n");
        section.push_str("        --help-topic <TOPIC> Show help for a topic\n");
        section.push_str("    -h, --help               Print help\n");
        section.push_str("    -V, --version            Print version\n");
        section
    }

    /// Format the examples section
    fn format_examples_section(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "EXAMPLES:".bright_green().bold().to_string()
        } else {
            "EXAMPLES:".to_string()
        };

        let mut section = format!("{}\n", header);
        section.push_str("    # Extract average latencies from a benchmark run\n");
        section.push_str("    plx --file results/perf_run.log\n\n");
        section.push_str("    # Same, with a scan summary on stderr\n");
        section.push_str("    plx --file results/perf_run.log --verbose\n\n");
        section.push_str("    # Pipe the millisecond values into further tooling\n");
        section.push_str("    plx --file perf.log | sort -n | tail -1\n");
        section
    }

    /// Format the environment variables help
    fn format_environment_help(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "ENVIRONMENT:".bright_green().bold().to_string()
        } else {
            "ENVIRONMENT:".to_string()
        };

        let mut section = format!("{}\n", header);
        section.push_str("    PERF_LOG_FILE     Default log file path (overridden by --file)\n");
        section.push_str("    ENABLE_COLOR      Enable colored diagnostics (true/false)\n\n");
        section.push_str("    Variables may also be placed in a .env file in the working directory.\n");
        section
    }

    /// Format the configuration reference help
    fn format_configuration_help(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "CONFIGURATION REFERENCE".bright_cyan().bold().to_string()
        } else {
            "CONFIGURATION REFERENCE".to_string()
        };

        let mut section = format!("{}\n\n", header);
        section.push_str("Configuration is resolved in order: built-in defaults, then a .env\n");
        section.push_str("file in the working directory, then environment variables, then\n");
        section.push_str("command-line flags. Later sources override earlier ones.\n\n");
        section.push_str("When no file path is supplied anywhere, the sentinel path 'none' is\n");
        section.push_str("opened like any other path and the run fails at open time.\n\n");
        section.push_str("Example .env file:\n\n");
        section.push_str(&EnvManager::create_example_env_content());
        section
    }

    /// Format the input format help
    fn format_input_format_help(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "INPUT FORMAT".bright_cyan().bold().to_string()
        } else {
            "INPUT FORMAT".to_string()
        };

        let mut section = format!("{}\n\n", header);
        section.push_str("Lines of interest contain the substring 'Avg' and end in a\n");
        section.push_str("colon-delimited field of the shape '<integer>us', for example:\n\n");
        section.push_str("    Request Avg Latency:1500us\n\n");
        section.push_str("The value after the last colon and before the first 'us' is read as\n");
        section.push_str("a base-10 integer number of microseconds. Lines without 'Avg' are\n");
        section.push_str("skipped. The first matching line that does not parse aborts the run.\n");
        section
    }

    /// Format the output help
    fn format_output_help(&self, use_colors: bool) -> String {
        let header = if use_colors {
            "OUTPUT".bright_cyan().bold().to_string()
        } else {
            "OUTPUT".to_string()
        };

        let mut section = format!("{}\n\n", header);
        section.push_str("One line per matching input line, in input order: the latency in\n");
        section.push_str("milliseconds with exactly two fractional digits (1500us -> 1.50).\n");
        section.push_str("No headers, labels, units, or colors on standard output.\n\n");
        section.push_str("Diagnostics (warnings, --verbose summaries, --debug logs, errors)\n");
        section.push_str("are written to standard error.\n");
        section
    }

    /// Format the footer
    fn format_footer(&self, use_colors: bool) -> String {
        let text = "Use --help-topic <TOPIC> for details: config, env, format, output, examples";
        if use_colors {
            format!("{}\n", text.bright_black())
        } else {
            format!("{}\n", text)
        }
    }
}

impl Default for HelpSystem {
    fn default() -> Self {
        Self::new()
    }
}

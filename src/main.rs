//! Performance Log Extractor - Main CLI Application
//!
//! Scans a performance-log file for average-latency lines and prints the
//! embedded microsecond values as milliseconds, one per line.

use clap::Parser;
use perflog_extractor::{
    cli::Cli,
    config::{display_config_summary, load_config, validate_config},
    error::{AppError, ErrorReporter, Result},
    extractor::LatencyExtractor,
    logging::LoggerFactory,
    output::{OutputCoordinator, OutputFormatterFactory},
    PKG_NAME, VERSION,
};
use std::io::{self, Write};
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("Please report this issue at: https://github.com/MaurUppi/perflog-extractor/issues");
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();
    let use_color = cli.use_colors();
    let verbose = cli.verbose;

    // Handle the actual application logic
    if let Err(e) = run_application(cli) {
        let reporter = ErrorReporter::new(use_color, verbose);
        reporter.report_error(&e);

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    // Topic help short-circuits the scan
    if cli.should_show_topic_help() {
        println!("{}", cli.display_help());
        return Ok(());
    }

    // Validate CLI arguments for conflicts
    if let Err(message) = cli.validate() {
        return Err(AppError::validation(message));
    }

    // Load and validate configuration
    let config = load_config(cli)?;

    if config.debug {
        eprintln!("{} v{}", PKG_NAME, VERSION);
        eprintln!("Configuration loaded successfully:");
        eprintln!("{}", display_config_summary(&config));
    }

    // Surface non-fatal configuration warnings
    let warnings = validate_config(&config)?;
    for warning in &warnings {
        eprintln!("{}", warning.format(config.enable_color));
    }

    // Scan lifecycle logging is active in debug mode only
    let scan_logger = if config.debug {
        Some(LoggerFactory::new(config.clone()).create_scan_logger())
    } else {
        None
    };

    let formatter = OutputFormatterFactory::create_formatter(config.enable_color, config.verbose);
    let coordinator = OutputCoordinator::new(formatter);
    let extractor = LatencyExtractor::new();

    if let Some(logger) = &scan_logger {
        logger.log_scan_started(&config.file_path);
    }

    // Stdout carries only the extracted record lines
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = extractor.scan_file(&config.file_path, |record| {
        if let Some(logger) = &scan_logger {
            logger.log_record(record);
        }
        coordinator.emit_record(&mut out, record)
    });

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            if let Some(logger) = &scan_logger {
                logger.log_scan_failed(&config.file_path, &e);
            }
            return Err(e);
        }
    };

    out.flush()?;

    if let Some(logger) = &scan_logger {
        logger.log_scan_complete(&config.file_path, &summary);
    }

    if config.verbose {
        coordinator.emit_summary(&summary)?;
    }

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config { .. } | AppError::Validation { .. } => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - Check the command line flags for conflicts");
            eprintln!("  - Use --help-topic config for the configuration reference");
        },
        AppError::FileAccess { .. } => {
            eprintln!();
            eprintln!("File troubleshooting:");
            eprintln!("  - Verify the path exists and points to a regular file");
            eprintln!("  - Check read permissions on the file");
            eprintln!("  - Pass the log file with --file <PATH> or set PERF_LOG_FILE");
        },
        AppError::Parse { .. } => {
            eprintln!();
            eprintln!("Input troubleshooting:");
            eprintln!("  - Matching lines must end in '<label>:<integer>us'");
            eprintln!("  - Use --help-topic format for the expected input format");
        },
        _ => {}
    }
}

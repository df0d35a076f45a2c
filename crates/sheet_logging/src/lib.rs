#![deny(missing_docs)]
//! Shared logging utilities for the sheet export workspace.
//!
//! The server binary initializes the global logger once through
//! [`initialize`]; test binaries use [`initialize_for_tests`], which safely
//! no-ops when another logger has already been installed.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
pub enum LogDestination {
    /// Write to the given log file.
    File(&'static str),
    /// Write to terminal (stdout).
    Terminal,
    /// Write to both the given file and the terminal.
    Both(&'static str),
}

/// Initialize the global logger with the specified destination.
///
/// File destinations fall back to terminal-only logging when the log file
/// cannot be created; a warning is printed to stderr in that case.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File(path) => match create_file_logger(level, config, path) {
            Some(file_logger) => vec![file_logger],
            None => vec![term_logger(level, build_config())],
        },
        LogDestination::Terminal => {
            vec![term_logger(level, config)]
        }
        LogDestination::Both(path) => {
            let mut loggers = vec![term_logger(level, config)];
            if let Some(file_logger) = create_file_logger(level, build_config(), path) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![term_logger(level, Config::default())]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn term_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    path: &str,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(Path::new(path)) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {path:?}: {err}");
            None
        }
    }
}

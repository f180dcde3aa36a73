//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DRIVER_PATH, DEFAULT_DRIVER_PORT, DEFAULT_LARGEST, DEFAULT_OUTPUT_PATH,
    DEFAULT_SERVE_PORT, DEFAULT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration, parsed from the command line.
///
/// Can also be built programmatically:
///
/// ```no_run
/// use hats_domains::Config;
///
/// let config = Config {
///     largest: 10,
///     include_special: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hats_domains",
    about = "Report on who owns the {n}hats.com domains"
)]
pub struct Config {
    /// Serve the report over HTTP rather than writing a file
    #[arg(long)]
    pub serve: bool,

    /// Output filename (ignored with --serve)
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub path: PathBuf,

    /// Port to serve on (the server listens on 127.0.0.1 only)
    #[arg(long, default_value_t = DEFAULT_SERVE_PORT)]
    pub port: u16,

    /// Verbose logging for the browser driver
    #[arg(long)]
    pub debug: bool,

    /// Largest n for {n}hats.com
    #[arg(long, default_value_t = DEFAULT_LARGEST)]
    pub largest: u32,

    /// Also check 0hats.com and 1hat.com
    #[arg(long)]
    pub include_special: bool,

    /// WebDriver binary to launch
    #[arg(long, default_value = DEFAULT_DRIVER_PATH)]
    pub driver_path: PathBuf,

    /// Port the WebDriver binary listens on
    #[arg(long, default_value_t = DEFAULT_DRIVER_PORT)]
    pub driver_port: u16,

    /// Timeout for each network or browser operation, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serve: false,
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            port: DEFAULT_SERVE_PORT,
            debug: false,
            largest: DEFAULT_LARGEST,
            include_special: false,
            driver_path: PathBuf::from(DEFAULT_DRIVER_PATH),
            driver_port: DEFAULT_DRIVER_PORT,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Rejects flag combinations that cannot work together.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout_seconds == 0 {
            anyhow::bail!("--timeout-seconds must be greater than zero");
        }
        if self.serve && self.port == self.driver_port {
            anyhow::bail!(
                "--port and --driver-port are both {}; the report server and the driver need separate ports",
                self.port
            );
        }
        Ok(())
    }
}

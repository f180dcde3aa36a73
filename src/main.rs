//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `hats_domains` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use hats_domains::initialization::init_logger_with;
use hats_domains::{run_report, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format, config.debug)
        .context("Failed to initialize logger")?;

    match run_report(config).await {
        Ok(report) => {
            println!(
                "✅ Checked {} domain{} ({} available, {} failed) in {:.1}s",
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.available,
                report.failed,
                report.elapsed_seconds
            );
            if let Some(path) = report.output {
                println!("Report saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("hats_domains error: {:#}", e);
            process::exit(1);
        }
    }
}

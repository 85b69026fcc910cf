//! # brave-search
//!
//! Command-line entry point: parse arguments, run one search, print the
//! results.
//!
//! ## Usage
//!
//! ```sh
//! brave-search "rust async runtime" --limit 5
//! brave-search "rust async runtime" --csv > results.csv
//! ```
//!
//! ## Exit status
//!
//! - `0`: console output written
//! - `1`: CSV output written (see [`OutputMode::exit_status`])
//! - `1`: network, HTTP status, extraction, or output failure
//! - `2`: invalid or missing arguments (reported by clap)

use brave_search::cli::Cli;
use brave_search::{OutputMode, SearchConfig, outputs};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // --- Tracing init ---
    // stdout carries only results, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(query = %args.query, limit = args.limit, csv = args.csv, "Parsed CLI arguments");

    match run(&args).await {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            error!(error = %e, "Search failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Search, render to stdout, and return the exit status for the output mode.
async fn run(args: &Cli) -> brave_search::Result<u8> {
    let start_time = std::time::Instant::now();
    let config = SearchConfig::from_cli(args);
    let mode = OutputMode::from_csv_flag(args.csv);

    let results = brave_search::search(&args.query, &config).await?;
    info!(count = results.len(), ?mode, "Rendering results");

    let stdout = io::stdout();
    outputs::render(&results, mode, &mut stdout.lock())?;

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(mode.exit_status())
}

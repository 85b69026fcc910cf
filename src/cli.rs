//! Command-line interface definitions for brave_search.
//!
//! The whole configuration surface is one positional query and two options.

use clap::Parser;

/// Search brave.com from the CLI
///
/// # Examples
///
/// ```sh
/// # Styled console output, ten results
/// brave-search "rust async runtime"
///
/// # Five results as CSV
/// brave-search "rust async runtime" --limit 5 --csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about, arg_required_else_help = true)]
pub struct Cli {
    /// search query
    pub query: String,

    /// number of search results
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// output results as csv
    #[arg(long)]
    pub csv: bool,
}

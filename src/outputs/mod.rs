//! Rendering of extracted results.
//!
//! # Submodules
//!
//! - [`console`]: Styled, human-readable blocks separated by rule lines
//! - [`csv`]: `link,title,description` rows with no quoting
//!
//! Both writers take any [`std::io::Write`], so the binary hands them a
//! locked stdout and tests hand them a `Vec<u8>`.

pub mod console;
pub mod csv;

use crate::error::SearchError;
use crate::models::SearchResult;
use std::io::Write;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Styled blocks for a terminal.
    Console,
    /// Comma-delimited rows.
    Csv,
}

impl OutputMode {
    /// Select the mode from the `--csv` flag.
    pub fn from_csv_flag(csv: bool) -> Self {
        if csv { Self::Csv } else { Self::Console }
    }

    /// Process exit status after output was written successfully.
    ///
    /// CSV mode exits with status 1 even after a successful write; callers
    /// piping CSV should not treat that status as a failure.
    pub fn exit_status(self) -> u8 {
        match self {
            Self::Console => 0,
            Self::Csv => 1,
        }
    }
}

/// Write `results` to `out` in the given mode, in input order.
pub fn render<W: Write>(
    results: &[SearchResult],
    mode: OutputMode,
    out: &mut W,
) -> Result<(), SearchError> {
    match mode {
        OutputMode::Console => console::write_results(results, out)?,
        OutputMode::Csv => csv::write_results(results, out)?,
    }
    out.flush()?;
    Ok(())
}

//! CSV output.
//!
//! Fields are joined with `,` as-is and never quoted. A comma inside a title
//! or description shifts the columns of that row.

use crate::models::SearchResult;
use std::io::{self, Write};

/// Header row.
pub const HEADER: &str = "link,title,description";

/// Write the header followed by one `href,title,desc` row per result.
pub fn write_results<W: Write>(results: &[SearchResult], out: &mut W) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for result in results {
        writeln!(out, "{}", row(result))?;
    }
    Ok(())
}

fn row(result: &SearchResult) -> String {
    [
        result.href.as_str(),
        result.title.as_str(),
        result.desc.as_str(),
    ]
    .join(",")
}

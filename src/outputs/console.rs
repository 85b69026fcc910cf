//! Styled console output.
//!
//! Each result becomes a block:
//!
//! ```text
//! 1 Rust Programming Language        <- bright blue title
//! https://www.rust-lang.org/         <- gray link
//! A language empowering everyone
//! 3 days ago                         <- light gray, only when present
//! ────────────────────────────────────────
//! ```
//!
//! Colour is dropped automatically when stdout is not a terminal or when
//! `NO_COLOR` is set (handled by `colored`).

use crate::models::SearchResult;
use colored::{Color, ColoredString, Colorize};
use std::io::{self, Write};

const TITLE_COLOR: Color = Color::BrightBlue;
const LINK_COLOR: Color = Color::BrightBlack;
const TIME_COLOR: Color = Color::White;

/// Width of the divider drawn after every block.
pub const RULE_WIDTH: usize = 80;
const RULE_CHAR: char = '─';

/// Apply `color` to `text`.
fn styled(text: &str, color: Color) -> ColoredString {
    text.color(color)
}

/// Write one block per result, numbered from 1, each followed by a rule.
pub fn write_results<W: Write>(results: &[SearchResult], out: &mut W) -> io::Result<()> {
    let rule = RULE_CHAR.to_string().repeat(RULE_WIDTH);
    for (position, result) in results.iter().enumerate() {
        writeln!(out, "{} {}", position + 1, styled(&result.title, TITLE_COLOR))?;
        writeln!(out, "{}", styled(&result.href, LINK_COLOR))?;
        writeln!(out, "{}", result.desc)?;
        if !result.time.is_empty() {
            writeln!(out, "{}", styled(&result.time, TIME_COLOR))?;
        }
        writeln!(out, "{}", styled(&rule, LINK_COLOR))?;
    }
    Ok(())
}

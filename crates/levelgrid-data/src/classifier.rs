//! Line classification heuristic.
//!
//! Separates level rows from titles, author credits and blank separators by
//! looking at the distinct characters a line uses, not at their order or
//! frequency. It is a heuristic: a short title whose few letters happen to be
//! tile codes can still read as a grid row.

use std::collections::HashSet;

use levelgrid_core::models::{is_grid_symbol, LineKind};
use once_cell::sync::Lazy;
use regex::Regex;

static TITLE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]+.+$").expect("regex is valid"));

/// Classify a normalized (non-header) line.
pub fn classify_line(line: &str) -> LineKind {
    let stripped = line.trim();
    if stripped.is_empty() {
        return LineKind::Other;
    }
    if TITLE_LINE.is_match(stripped) {
        return LineKind::Title;
    }
    if has_grid_alphabet(stripped) {
        LineKind::Grid
    } else {
        LineKind::Other
    }
}

/// Returns `true` when the stripped line opens with uppercase letters and has
/// at least one character after the first.
pub fn is_title_or_author(line: &str) -> bool {
    classify_line(line) == LineKind::Title
}

/// Returns `true` when `line` is a row of a level layout.
pub fn is_grid_line(line: &str) -> bool {
    classify_line(line).is_grid()
}

/// At least half of the distinct lowercased characters must be tile codes.
fn has_grid_alphabet(stripped: &str) -> bool {
    let distinct: HashSet<char> = stripped.to_lowercase().chars().collect();
    let symbols = distinct.iter().filter(|&&c| is_grid_symbol(c)).count();

    if symbols == 0 {
        return false;
    }
    // symbols < distinct / 2, kept in integers; exactly half passes.
    symbols * 2 >= distinct.len()
}

//! Level file loading and per-line normalization.
//!
//! Files are read whole, split on any line terminator, and each line loses
//! the line-number prefix that level dumps carry (`12:wwwsss`).

use std::path::Path;

use levelgrid_core::error::{LevelGridError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static LINE_NUMBER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+.").expect("regex is valid"));

// ── Public API ────────────────────────────────────────────────────────────────

/// Read a level file into memory and split it into lines.
///
/// The file handle is dropped before this returns. Fails when the file cannot
/// be read or is not UTF-8.
pub fn read_level_file(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|source| LevelGridError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|_| LevelGridError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    let lines: Vec<String> = split_lines(&text).into_iter().map(str::to_string).collect();
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split `text` into lines, accepting `\n`, `\r\n` and a lone `\r` as
/// terminators. A terminator at the very end does not produce an empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Whether the 1-based `line_no` falls inside the fixed file header.
pub fn is_header_line(line_no: usize, header_lines: usize) -> bool {
    line_no <= header_lines
}

/// Strip a leading line-number prefix and trailing terminators from `raw`.
///
/// The prefix is optional whitespace, one or more digits and exactly one
/// further character (usually `:` or `.`). Lines without such a prefix only
/// lose their terminators.
pub fn normalize_line(raw: &str) -> String {
    let stripped = LINE_NUMBER_PREFIX.replace(raw, "");
    stripped.trim_end_matches(['\n', '\r']).to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

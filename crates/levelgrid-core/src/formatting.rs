//! Human-readable rendering of [`LevelStats`].

use serde::Serialize;

use crate::error::Result;
use crate::models::{LevelStats, Tile};

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 40;
const TITLE_COLUMN_WIDTH: usize = 32;

/// Format an integer count with thousands separators.
///
/// # Examples
///
/// ```
/// use levelgrid_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
pub fn format_count(value: usize) -> String {
    group_thousands(value)
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `…`.
///
/// # Examples
///
/// ```
/// use levelgrid_core::formatting::truncate;
///
/// assert_eq!(truncate("THE END", 10), "THE END");
/// assert_eq!(truncate("A VERY LONG TITLE", 8), "A VERY …");
/// ```
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}

/// Render the summary block for one analysed file.
pub fn format_report(source: &str, stats: &LevelStats) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let (width, height) = stats.grid_dimensions();

    let mut out = format!("{banner}\nGRID DIMENSION ANALYSIS: {source}\n{banner}\n\n");
    out.push_str("RESULTS:\n");
    out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));
    out.push_str(&format!(
        "Total levels found: {}\n\n",
        format_count(stats.total_levels)
    ));
    out.push_str("GRID DIMENSIONS:\n");
    out.push_str(&format!("  Maximum width:  {} characters\n", format_count(width)));
    out.push_str(&format!("  Maximum height: {} lines\n", format_count(height)));
    out.push_str(&format!(
        "  Original width (with teleporter codes): {} characters\n\n",
        format_count(stats.max_width_original)
    ));
    out.push_str(&format!("FINAL GAME GRID DIMENSIONS: {} x {}\n", width, height));
    out.push_str(&format!("{}\n", "-".repeat(BANNER_WIDTH)));
    out
}

/// Render one row per level. Returns an empty string when there are none.
pub fn format_level_table(stats: &LevelStats) -> String {
    if stats.levels.is_empty() {
        return String::new();
    }

    let mut out = format!(
        "{:>5}  {:>6}  {:>6}  {:>5}  {:>7}  {}\n",
        "LEVEL", "LINE", "HEIGHT", "WIDTH", "CLEANED", "TITLE"
    );
    for level in &stats.levels {
        let title = match (&level.title, &level.author) {
            (Some(t), Some(a)) => format!("{t} / {a}"),
            (Some(t), None) => t.clone(),
            (None, _) => "-".to_string(),
        };
        out.push_str(&format!(
            "{:>5}  {:>6}  {:>6}  {:>5}  {:>7}  {}\n",
            level.index,
            level.first_line,
            level.height,
            level.max_width_original,
            level.max_width_cleaned,
            truncate(&title, TITLE_COLUMN_WIDTH)
        ));
    }
    out
}

/// Render the tile legend, one `symbol  name` pair per line.
pub fn format_legend() -> String {
    let mut out = String::from("TILE LEGEND:\n");
    for tile in Tile::ALL {
        out.push_str(&format!("  {}  {}\n", tile.symbol(), tile.name()));
    }
    out
}

/// Serialize `value` as pretty-printed JSON with a trailing newline.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Decimal digits of `value` with a comma between each group of three.
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut groups = Vec::with_capacity(digits.len() / 3 + 1);
    let mut end = digits.len();
    while end > 3 {
        groups.push(&digits[end - 3..end]);
        end -= 3;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups.join(",")
}

// ── Tests ──────────────────────────────────────────────────────────────────────

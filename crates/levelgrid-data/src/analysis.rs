//! Main analysis pipeline.
//!
//! Reads a level file, normalizes each line, classifies it and folds the
//! result into a [`LevelStats`].

use std::path::Path;

use levelgrid_core::error::Result;
use levelgrid_core::models::{LevelStats, LineKind, DEFAULT_HEADER_LINES};
use tracing::{debug, info, warn};

use crate::reader::{is_header_line, normalize_line, read_level_file, split_lines};
use crate::segmenter::LevelSegmenter;

/// Tunables for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Leading lines skipped without classification.
    pub header_lines: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            header_lines: DEFAULT_HEADER_LINES,
        }
    }
}

/// Run the full pipeline over the level file at `path`.
///
/// The only failure is reading the file; classification itself cannot fail.
pub fn analyze_levels_file(path: &Path, options: AnalysisOptions) -> Result<LevelStats> {
    info!("Processing levels from {}", path.display());

    let lines = read_level_file(path)?;
    let stats = analyze_lines(lines.iter().map(String::as_str), options);

    if stats.total_levels == 0 {
        warn!("No levels found in {}", path.display());
    }
    Ok(stats)
}

/// Run the pipeline over in-memory text.
pub fn analyze_text(text: &str, options: AnalysisOptions) -> LevelStats {
    analyze_lines(split_lines(text), options)
}

/// Run the pipeline over already-split raw lines.
pub fn analyze_lines<'a, I>(lines: I, options: AnalysisOptions) -> LevelStats
where
    I: IntoIterator<Item = &'a str>,
{
    let mut segmenter = LevelSegmenter::new();

    for (idx, raw) in lines.into_iter().enumerate() {
        let line_no = idx + 1;
        if is_header_line(line_no, options.header_lines) {
            segmenter.push_classified(line_no, LineKind::Header, raw);
            continue;
        }
        let line = normalize_line(raw);
        segmenter.push(line_no, &line);
    }

    let stats = segmenter.finish();
    debug!(
        "{} lines: {} grid, {} title, {} levels",
        stats.lines_read, stats.grid_lines, stats.title_lines, stats.total_levels
    );
    stats
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Grouping of grid rows into levels.
//!
//! Every maximal run of consecutive grid rows is one level. The segmenter is
//! fed lines in file order and keeps only the rows of the level currently
//! open plus running maxima; the result is complete after [`LevelSegmenter::finish`].

use levelgrid_core::models::{LevelStats, LevelSummary, LineKind};
use tracing::debug;

use crate::classifier::classify_line;
use crate::teleporter::cleaned_width;

/// Title/author lines remembered for the next level.
const MAX_CAPTION_LINES: usize = 2;

// ── OpenLevel ─────────────────────────────────────────────────────────────────

/// Rows of the level currently being read.
#[derive(Debug, Default)]
struct OpenLevel {
    rows: Vec<String>,
    first_line: usize,
    max_width_original: usize,
    max_width_cleaned: usize,
}

impl OpenLevel {
    fn add_row(&mut self, line_no: usize, row: &str) {
        if self.rows.is_empty() {
            self.first_line = line_no;
        }
        self.max_width_original = self.max_width_original.max(row.chars().count());
        self.max_width_cleaned = self.max_width_cleaned.max(cleaned_width(row));
        self.rows.push(row.to_string());
    }
}

// ── LevelSegmenter ────────────────────────────────────────────────────────────

/// Accumulator that folds classified lines into [`LevelStats`].
#[derive(Debug, Default)]
pub struct LevelSegmenter {
    open: OpenLevel,
    captions: Vec<String>,
    stats: LevelStats,
}

impl LevelSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a normalized line and fold it in. Returns the classification.
    pub fn push(&mut self, line_no: usize, line: &str) -> LineKind {
        let kind = classify_line(line);
        self.push_classified(line_no, kind, line);
        kind
    }

    /// Fold in a line whose classification is already known. Header lines
    /// arrive here as [`LineKind::Header`] without going through the classifier.
    pub fn push_classified(&mut self, line_no: usize, kind: LineKind, line: &str) {
        self.stats.lines_read += 1;

        match kind {
            LineKind::Grid => {
                self.stats.grid_lines += 1;
                self.open.add_row(line_no, line);
                self.stats.max_width_original = self
                    .stats
                    .max_width_original
                    .max(self.open.max_width_original);
                self.stats.max_width_cleaned = self
                    .stats
                    .max_width_cleaned
                    .max(self.open.max_width_cleaned);
            }
            LineKind::Title => {
                self.close_level();
                self.stats.title_lines += 1;
                if self.captions.len() == MAX_CAPTION_LINES {
                    self.captions.remove(0);
                }
                self.captions.push(line.trim().to_string());
            }
            LineKind::Header | LineKind::Other => {
                if self.open.rows.is_empty() {
                    // A separator between captions and the next level drops them.
                    self.captions.clear();
                } else {
                    self.close_level();
                }
            }
        }
    }

    /// Rows of the level currently open, in file order.
    pub fn open_rows(&self) -> &[String] {
        &self.open.rows
    }

    /// Statistics accumulated so far, excluding any level still open.
    pub fn stats(&self) -> &LevelStats {
        &self.stats
    }

    /// Close a level left open at end of input and return the totals.
    pub fn finish(mut self) -> LevelStats {
        self.close_level();
        self.stats
    }

    /// Record the open level, if any, and start a fresh one.
    fn close_level(&mut self) {
        if self.open.rows.is_empty() {
            return;
        }

        let open = std::mem::take(&mut self.open);
        let mut captions = std::mem::take(&mut self.captions).into_iter();
        let height = open.rows.len();

        self.stats.total_levels += 1;
        self.stats.max_height = self.stats.max_height.max(height);

        let summary = LevelSummary {
            index: self.stats.total_levels,
            first_line: open.first_line,
            height,
            max_width_original: open.max_width_original,
            max_width_cleaned: open.max_width_cleaned,
            title: captions.next(),
            author: captions.next(),
        };

        debug!(
            "Level {} at line {}: {} rows, width {} ({} cleaned)",
            summary.index,
            summary.first_line,
            summary.height,
            summary.max_width_original,
            summary.max_width_cleaned
        );

        self.stats.levels.push(summary);
    }
}

/// Fold `(line_no, line)` pairs of normalized, non-header lines into stats.
pub fn segment_lines<'a, I>(lines: I) -> LevelStats
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    lines
        .into_iter()
        .fold(LevelSegmenter::new(), |mut seg, (line_no, line)| {
            seg.push(line_no, line);
            seg
        })
        .finish()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(lines: &[&'static str]) -> Vec<(usize, &'static str)> {
        lines.iter().enumerate().map(|(i, l)| (i + 1, *l)).collect()
    }

    #[test]
    fn test_two_levels_split_by_blank_and_title() {
        let stats = segment_lines(numbered(&["wwwsss", "eeekkk", "", "THE END", "fggg"]));

        assert_eq!(stats.total_levels, 2);
        assert_eq!(stats.heights(), vec![2, 1]);
        assert_eq!(stats.max_width_original, 6);
        assert_eq!(stats.max_width_cleaned, 6);
        assert_eq!(stats.max_height, 2);
        assert_eq!(stats.grid_lines, 3);
        assert_eq!(stats.title_lines, 1);
        assert_eq!(stats.lines_read, 5);
    }

    #[test]
    fn test_level_at_end_of_input_is_counted() {
        let stats = segment_lines(numbered(&["", "www", "wsw", "www"]));
        assert_eq!(stats.total_levels, 1);
        assert_eq!(stats.max_height, 3);
        assert_eq!(stats.levels[0].first_line, 2);
    }

    #[test]
    fn test_title_lines_never_counted() {
        let stats = segment_lines(numbered(&["LEVEL", "THE VERY LONGEST TITLE LINE"]));
        assert_eq!(stats.total_levels, 0);
        assert_eq!(stats.max_width_original, 0);
        assert_eq!(stats.max_height, 0);
        assert_eq!(stats.title_lines, 2);
    }

    #[test]
    fn test_blank_input_is_all_zero() {
        let stats = segment_lines(numbered(&["", "   ", ""]));
        assert_eq!(stats.total_levels, 0);
        assert_eq!(stats.max_width_original, 0);
        assert_eq!(stats.max_width_cleaned, 0);
        assert_eq!(stats.max_height, 0);
        assert!(stats.levels.is_empty());
    }

    #[test]
    fn test_consecutive_separators_do_not_add_levels() {
        let stats = segment_lines(numbered(&["www", "", "", "xyz", "", "www"]));
        assert_eq!(stats.total_levels, 2);
        assert_eq!(stats.heights(), vec![1, 1]);
    }

    #[test]
    fn test_teleporter_width_tracked_separately() {
        // {w, s, e, g, t, 1, 2}: four of seven distinct characters are tiles.
        let stats = segment_lines(numbered(&["wsegt11t22", "wwww"]));
        assert_eq!(stats.total_levels, 1);
        assert_eq!(stats.max_width_original, 10);
        assert_eq!(stats.max_width_cleaned, 6);
        assert_eq!(stats.levels[0].max_width_cleaned, 6);
    }

    #[test]
    fn test_widths_include_untrimmed_whitespace() {
        let stats = segment_lines(numbered(&["  ww  "]));
        assert_eq!(stats.max_width_original, 6);
    }

    #[test]
    fn test_open_rows_hold_uncleaned_lines() {
        let mut seg = LevelSegmenter::new();
        seg.push(1, "wset12");
        seg.push(2, "wswe");
        assert_eq!(seg.open_rows(), ["wset12", "wswe"]);
        assert_eq!(seg.stats().total_levels, 0);

        seg.push(3, "");
        assert!(seg.open_rows().is_empty());
        assert_eq!(seg.stats().total_levels, 1);
    }

    #[test]
    fn test_maxima_never_decrease() {
        let lines = numbered(&["wwwwwwww", "ww", "", "w", "", "wwww", "www", "ww", "w"]);
        let mut seg = LevelSegmenter::new();
        let mut prev = (0, 0, 0);
        for (line_no, line) in lines {
            seg.push(line_no, line);
            let s = seg.stats();
            let now = (s.max_width_original, s.max_width_cleaned, s.max_height);
            assert!(now.0 >= prev.0 && now.1 >= prev.1 && now.2 >= prev.2);
            prev = now;
        }
        let stats = seg.finish();
        assert_eq!(stats.max_height, 4);
        assert_eq!(stats.max_width_original, 8);
    }

    #[test]
    fn test_captions_attach_to_next_level() {
        let stats = segment_lines(numbered(&[
            "First Steps",
            "Anna Svensson",
            "wwww",
            "wsew",
            "",
            "DARK CAVE",
            "wwww",
        ]));

        assert_eq!(stats.total_levels, 2);
        assert_eq!(stats.levels[0].title.as_deref(), Some("First Steps"));
        assert_eq!(stats.levels[0].author.as_deref(), Some("Anna Svensson"));
        assert_eq!(stats.levels[1].title.as_deref(), Some("DARK CAVE"));
        assert_eq!(stats.levels[1].author, None);
    }

    #[test]
    fn test_trailer_does_not_caption_next_level() {
        let stats = segment_lines(numbered(&[
            "wwww",
            "THE END",
            "",
            "Dark Cave",
            "Anna",
            "wwww",
        ]));

        assert_eq!(stats.total_levels, 2);
        assert_eq!(stats.levels[0].title, None);
        assert_eq!(stats.levels[1].title.as_deref(), Some("Dark Cave"));
        assert_eq!(stats.levels[1].author.as_deref(), Some("Anna"));
    }

    #[test]
    fn test_captions_keep_most_recent_two() {
        let stats = segment_lines(numbered(&["THE END", "Dark Cave", "Anna", "wwww"]));
        assert_eq!(stats.levels[0].title.as_deref(), Some("Dark Cave"));
        assert_eq!(stats.levels[0].author.as_deref(), Some("Anna"));
    }

    #[test]
    fn test_header_line_is_not_grid() {
        let mut seg = LevelSegmenter::new();
        seg.push(1, "www");
        seg.push_classified(2, LineKind::Header, "wwww");
        let stats = seg.finish();
        assert_eq!(stats.total_levels, 1);
        assert_eq!(stats.grid_lines, 1);
        assert_eq!(stats.max_width_original, 3);
        assert_eq!(stats.lines_read, 2);
    }
}

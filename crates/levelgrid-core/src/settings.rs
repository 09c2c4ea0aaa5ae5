use clap::Parser;
use std::path::PathBuf;

use crate::models::DEFAULT_HEADER_LINES;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Grid dimension analysis for ASCII level files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "levelgrid",
    about = "Grid dimension analysis for ASCII level files",
    version
)]
pub struct Settings {
    /// Level files to analyse
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Report format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Include the per-level table in the text report
    #[arg(long)]
    pub levels: bool,

    /// Print the tile legend after the report
    #[arg(long)]
    pub legend: bool,

    /// Number of header lines skipped at the top of each file
    #[arg(long, default_value_t = DEFAULT_HEADER_LINES)]
    pub header_lines: usize,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// How the final statistics are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments. Exits with a usage message on bad input.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);

        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings
    }

    /// The selected report format.
    pub fn report_format(&self) -> ReportFormat {
        match self.format.as_str() {
            "json" => ReportFormat::Json,
            _ => ReportFormat::Text,
        }
    }

    /// Log level after applying `--debug`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["levelgrid", "levels.txt"]);

        assert_eq!(settings.files, vec![PathBuf::from("levels.txt")]);
        assert_eq!(settings.format, "text");
        assert!(!settings.levels);
        assert!(!settings.legend);
        assert_eq!(settings.header_lines, 3);
        assert_eq!(settings.log_level, "WARNING");
        assert!(!settings.debug);
        assert_eq!(settings.report_format(), ReportFormat::Text);
    }

    #[test]
    fn test_settings_multiple_files() {
        let settings = Settings::parse_from(["levelgrid", "a.txt", "b.txt"]);
        assert_eq!(settings.files.len(), 2);
    }

    #[test]
    fn test_settings_missing_file_is_rejected() {
        let result = Settings::try_parse_from(["levelgrid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_json_format() {
        let settings = Settings::parse_from(["levelgrid", "--format", "json", "x.txt"]);
        assert_eq!(settings.report_format(), ReportFormat::Json);
    }

    #[test]
    fn test_settings_unknown_format_is_rejected() {
        let result = Settings::try_parse_from(["levelgrid", "--format", "xml", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_overrides_log_level() {
        let settings =
            Settings::load_from_args(["levelgrid", "--debug", "--log-level", "ERROR", "x.txt"]);
        assert_eq!(settings.log_level, "DEBUG");
        assert_eq!(settings.effective_log_level(), "DEBUG");
    }

    #[test]
    fn test_header_lines_override() {
        let settings = Settings::load_from_args(["levelgrid", "--header-lines", "0", "x.txt"]);
        assert_eq!(settings.header_lines, 0);
    }

    #[test]
    fn test_large_header_lines_is_accepted() {
        let settings = Settings::load_from_args(["levelgrid", "--header-lines", "5000", "x.txt"]);
        assert_eq!(settings.header_lines, 5000);
    }
}

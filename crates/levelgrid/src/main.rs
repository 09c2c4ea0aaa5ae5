mod bootstrap;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use levelgrid_core::formatting::{format_json, format_legend, format_level_table, format_report};
use levelgrid_core::models::LevelStats;
use levelgrid_core::settings::{ReportFormat, Settings};
use levelgrid_data::analysis::{analyze_levels_file, AnalysisOptions};
use serde::Serialize;

/// One analysed file, as emitted by `--format json` for multiple inputs.
#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    stats: LevelStats,
}

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("levelgrid v{} starting", env!("CARGO_PKG_VERSION"));

    let output = run(&settings)?;
    print!("{output}");

    Ok(())
}

/// Analyse every input file and render the full report.
fn run(settings: &Settings) -> Result<String> {
    let options = AnalysisOptions {
        header_lines: settings.header_lines,
    };

    let mut reports = Vec::with_capacity(settings.files.len());
    for path in &settings.files {
        let stats = analyze_levels_file(path, options)
            .with_context(|| format!("analysing {}", path.display()))?;
        tracing::info!(
            "{}: {} levels, grid {} x {}",
            path.display(),
            stats.total_levels,
            stats.max_width_cleaned,
            stats.max_height
        );
        reports.push(FileReport {
            path: path.clone(),
            stats,
        });
    }

    match settings.report_format() {
        ReportFormat::Json => render_json(&reports),
        ReportFormat::Text => Ok(render_text(&reports, settings.levels, settings.legend)),
    }
}

fn render_json(reports: &[FileReport]) -> Result<String> {
    let json = match reports {
        [single] => format_json(&single.stats)?,
        _ => format_json(reports)?,
    };
    Ok(json)
}

fn render_text(reports: &[FileReport], with_levels: bool, with_legend: bool) -> String {
    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format_report(&display_name(&report.path), &report.stats));
        if with_levels {
            let table = format_level_table(&report.stats);
            if !table.is_empty() {
                out.push('\n');
                out.push_str(&table);
            }
        }
    }
    if with_legend {
        out.push('\n');
        out.push_str(&format_legend());
    }
    out
}

/// File name for the report banner, falling back to the full path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

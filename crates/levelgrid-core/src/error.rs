use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the level analyser.
///
/// Line classification never fails; every variant here comes from reading
/// input files or serializing reports.
#[derive(Error, Debug)]
pub enum LevelGridError {
    /// A level file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The level file is not valid UTF-8 text.
    #[error("File is not valid UTF-8 text: {path}")]
    InvalidUtf8 { path: PathBuf },

    /// A report could not be serialized to JSON.
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the levelgrid crates.
pub type Result<T> = std::result::Result<T, LevelGridError>;

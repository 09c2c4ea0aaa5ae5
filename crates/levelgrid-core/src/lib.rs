//! Shared types for levelgrid: error type, level data model, CLI settings
//! and report formatting.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{LevelGridError, Result};
pub use models::{LevelStats, LevelSummary, LineKind, Tile};

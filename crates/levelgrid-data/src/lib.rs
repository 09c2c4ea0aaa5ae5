//! Level file analysis for levelgrid.
//!
//! Responsible for reading level files, normalizing and classifying their
//! lines, grouping grid rows into levels and running the top-level analysis
//! pipeline.

pub mod analysis;
pub mod classifier;
pub mod reader;
pub mod segmenter;
pub mod teleporter;

pub use levelgrid_core as core;

//! Error types for level building and settings loading.

use thiserror::Error;

/// Errors that can occur when building a level from a tile grid.
#[derive(Debug, Error, PartialEq)]
pub enum LevelError {
    /// The grid has no rows or no columns.
    #[error("level grid is empty")]
    EmptyGrid,

    /// A row is a different length than the first one.
    #[error("ragged level grid: row {row} has {actual} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Level area must be positive on both axes.
    #[error("invalid level area {width}x{height}")]
    InvalidArea { width: f32, height: f32 },

    /// No level at the requested index.
    #[error("no level at index {index} ({count} loaded)")]
    NoSuchLevel { index: usize, count: usize },
}

/// Errors that can occur when loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file could not be read.
    #[error("failed to read settings '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with.
    #[error("invalid setting '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

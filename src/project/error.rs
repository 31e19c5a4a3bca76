//! Error type for project model, persistence and export operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for project operations.
pub type Result<T> = std::result::Result<T, ProjectError>;

/// Errors surfaced to the caller by the project core.
///
/// Per-entry problems while loading (bad `"x,y"` keys, missing images) are
/// never reported through this type; they are skipped where they occur.
#[derive(Error, Debug)]
pub enum ProjectError {
    // Load errors
    #[error("Project file not found: {path}")]
    ProjectFileNotFound { path: PathBuf },

    #[error("Failed to parse project file: {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid grid dimensions {width}x{height}: both must be greater than zero")]
    InvalidDimensions { width: u32, height: u32 },

    // Save errors
    #[error("Project has no root path to save to")]
    RootPathRequired,

    #[error("Invalid project name: {name:?}")]
    InvalidProjectName { name: String },

    #[error("A project already exists at {path}")]
    ProjectExists { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize project: {0}")]
    Serialize(#[from] serde_json::Error),

    // Layer store errors
    #[error("Cannot remove the last remaining layer")]
    LastLayer,

    #[error("Layer index {index} out of range ({len} layers)")]
    LayerIndexOutOfRange { index: usize, len: usize },

    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    CellOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

impl ProjectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the index-style errors raised by tile and layer operations.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            Self::LayerIndexOutOfRange { .. } | Self::CellOutOfBounds { .. }
        )
    }
}

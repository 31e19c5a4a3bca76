//! Resource types for project session state tracking.

use bevy::prelude::*;
use std::path::PathBuf;

/// Last failure to open or create a project, for display to the user.
#[derive(Resource, Default)]
pub struct ProjectLoadError {
    pub message: Option<String>,
}

/// Resource tracking save operation errors for display to user.
#[derive(Resource, Default)]
pub struct ProjectSaveError {
    pub message: Option<String>,
}

/// Resource tracking export errors and where the last export went.
#[derive(Resource, Default)]
pub struct ProjectExportStatus {
    pub error: Option<String>,
    pub last_legend_path: Option<PathBuf>,
}

/// Resource tracking if the active project has unsaved changes
#[derive(Resource, Default)]
pub struct ProjectDirtyState {
    pub is_dirty: bool,
}

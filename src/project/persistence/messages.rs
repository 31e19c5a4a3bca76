//! Message types for project session operations.

use bevy::prelude::*;
use std::path::PathBuf;

/// Create `parent/name/` as a new project and make it the active one.
#[derive(Message)]
pub struct NewProjectRequest {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub parent: PathBuf,
}

/// Load the project stored in `path` and make it the active one.
#[derive(Message)]
pub struct OpenProjectRequest {
    pub path: PathBuf,
}

/// Save the active project to its root directory.
#[derive(Message)]
pub struct SaveProjectRequest;

/// Write the flat-text export of the active project.
#[derive(Message)]
pub struct ExportProjectRequest;

/// Discard the active project.
#[derive(Message)]
pub struct CloseProjectRequest;

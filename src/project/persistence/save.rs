//! Project saving and creation.

use bevy::log::info;
use std::path::{Path, PathBuf};

use crate::constants::PROJECT_FILE_NAME;
use crate::project::Project;
use crate::project::error::{ProjectError, Result};

use super::format::SavedProject;

/// Write the project's `config.json` into its root directory.
///
/// Only the layer structure is written; image references are stored as bare
/// file names so the project directory can be moved freely.
pub fn save_project(project: &Project) -> Result<PathBuf> {
    let root = project
        .root_path
        .as_ref()
        .ok_or(ProjectError::RootPathRequired)?;

    let saved = SavedProject::from(project);
    let mut json = serde_json::to_string_pretty(&saved)?;
    json.push('\n');

    let path = root.join(PROJECT_FILE_NAME);
    std::fs::write(&path, json).map_err(|e| ProjectError::io(&path, e))?;

    info!("Project {:?} saved to {:?}", project.name, path);
    Ok(path)
}

/// Create `parent/name/` and save a fresh single-layer project into it.
pub fn create_project(name: &str, width: u32, height: u32, parent: &Path) -> Result<Project> {
    if !is_valid_project_name(name) {
        return Err(ProjectError::InvalidProjectName {
            name: name.to_string(),
        });
    }
    let mut project = Project::new(name, width, height)?;

    let dir = parent.join(name);
    if dir.join(PROJECT_FILE_NAME).exists() {
        return Err(ProjectError::ProjectExists { path: dir });
    }
    std::fs::create_dir_all(&dir).map_err(|e| ProjectError::io(&dir, e))?;
    let root = dir.canonicalize().map_err(|e| ProjectError::io(&dir, e))?;

    project.root_path = Some(root);
    save_project(&project)?;

    info!("Created project {:?} ({}x{})", name, width, height);
    Ok(project)
}

/// A project name must be usable as a single directory name.
fn is_valid_project_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty()
        && trimmed != "."
        && trimmed != ".."
        && !name.contains(['/', '\\'])
}

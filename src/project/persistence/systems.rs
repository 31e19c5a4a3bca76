//! Systems driving project open/new/save/export/close from messages.
//!
//! Every operation runs to completion inside the system; failures are logged
//! and stored in the matching error resource for the dialog layer.

use bevy::prelude::*;

use crate::config::{AddRecentProjectRequest, SetDefaultParentDirRequest};
use crate::project::{Project, export_flat_text};

use super::load::load_project;
use super::messages::{
    CloseProjectRequest, ExportProjectRequest, NewProjectRequest, OpenProjectRequest,
    SaveProjectRequest,
};
use super::resources::{ProjectDirtyState, ProjectExportStatus, ProjectLoadError, ProjectSaveError};
use super::save::{create_project, save_project};

/// Discard the active project (if any) and install `project` in its place.
///
/// Removing first makes the new resource count as freshly added.
fn replace_project(commands: &mut Commands, project: Project) {
    commands.remove_resource::<Project>();
    commands.insert_resource(project);
}

pub fn open_project_system(
    mut commands: Commands,
    mut events: MessageReader<OpenProjectRequest>,
    mut load_error: ResMut<ProjectLoadError>,
    mut dirty_state: ResMut<ProjectDirtyState>,
    mut recent: MessageWriter<AddRecentProjectRequest>,
) {
    for event in events.read() {
        match load_project(&event.path) {
            Ok(project) => {
                load_error.message = None;
                dirty_state.is_dirty = false;
                if let Some(root) = &project.root_path {
                    recent.write(AddRecentProjectRequest { path: root.clone() });
                }
                replace_project(&mut commands, project);
            }
            Err(e) => {
                error!("Failed to open project {:?}: {}", event.path, e);
                load_error.message = Some(e.to_string());
            }
        }
    }
}

pub fn new_project_system(
    mut commands: Commands,
    mut events: MessageReader<NewProjectRequest>,
    mut load_error: ResMut<ProjectLoadError>,
    mut dirty_state: ResMut<ProjectDirtyState>,
    mut recent: MessageWriter<AddRecentProjectRequest>,
    mut parent_dir: MessageWriter<SetDefaultParentDirRequest>,
) {
    for event in events.read() {
        match create_project(&event.name, event.width, event.height, &event.parent) {
            Ok(project) => {
                load_error.message = None;
                dirty_state.is_dirty = false;
                if let Some(root) = &project.root_path {
                    recent.write(AddRecentProjectRequest { path: root.clone() });
                    // The next new project is offered the same parent
                    if let Some(parent) = root.parent() {
                        parent_dir.write(SetDefaultParentDirRequest {
                            path: parent.to_path_buf(),
                        });
                    }
                }
                replace_project(&mut commands, project);
            }
            Err(e) => {
                error!("Failed to create project {:?}: {}", event.name, e);
                load_error.message = Some(e.to_string());
            }
        }
    }
}

pub fn save_project_system(
    mut events: MessageReader<SaveProjectRequest>,
    project: Option<Res<Project>>,
    mut save_error: ResMut<ProjectSaveError>,
    mut dirty_state: ResMut<ProjectDirtyState>,
) {
    for _ in events.read() {
        let Some(project) = project.as_deref() else {
            warn!("Save requested with no open project");
            continue;
        };

        match save_project(project) {
            Ok(_) => {
                save_error.message = None;
                dirty_state.is_dirty = false;
            }
            Err(e) => {
                error!("Failed to save project: {}", e);
                save_error.message = Some(e.to_string());
            }
        }
    }
}

pub fn export_project_system(
    mut events: MessageReader<ExportProjectRequest>,
    project: Option<Res<Project>>,
    mut status: ResMut<ProjectExportStatus>,
) {
    for _ in events.read() {
        let Some(project) = project.as_deref() else {
            warn!("Export requested with no open project");
            continue;
        };

        match export_flat_text(project) {
            Ok(summary) => {
                status.error = None;
                status.last_legend_path = Some(summary.legend_path);
            }
            Err(e) => {
                error!("Failed to export project: {}", e);
                status.error = Some(e.to_string());
            }
        }
    }
}

pub fn close_project_system(
    mut commands: Commands,
    mut events: MessageReader<CloseProjectRequest>,
    mut dirty_state: ResMut<ProjectDirtyState>,
) {
    for _ in events.read() {
        commands.remove_resource::<Project>();
        dirty_state.is_dirty = false;
        info!("Closed project");
    }
}

//! Dirty state detection for the active project.

use bevy::prelude::*;

use crate::project::Project;

use super::resources::ProjectDirtyState;

/// Marks the project dirty whenever it is mutated after being opened.
///
/// A freshly inserted project counts as added, not changed, so opening or
/// creating a project leaves it clean.
pub fn detect_project_changes(
    project: Option<Res<Project>>,
    mut dirty_state: ResMut<ProjectDirtyState>,
) {
    let Some(project) = project else {
        return;
    };

    if project.is_changed() && !project.is_added() && !dirty_state.is_dirty {
        dirty_state.is_dirty = true;
    }
}

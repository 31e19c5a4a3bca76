//! Tile map project model: layers of sparse tiles on a fixed-size grid.

mod asset_ref;
mod cell;
pub mod error;
pub mod export;
mod layer;
mod layer_stack;
pub mod persistence;
mod project_data;

pub use asset_ref::AssetRef;
pub use cell::{Cell, cell_key, in_bounds, parse_cell_key};
pub use error::{ProjectError, Result};
pub use export::{ExportSummary, Legend, export_flat_text};
pub use layer::TileLayer;
pub use layer_stack::LayerStack;
pub use persistence::{
    CloseProjectRequest, ExportProjectRequest, NewProjectRequest, OpenProjectRequest,
    ProjectDirtyState, ProjectExportStatus, ProjectLoadError, ProjectSaveError,
    SaveProjectRequest, create_project, load_project, save_project,
};
pub use project_data::Project;

use bevy::prelude::*;

use crate::config::{AddRecentProjectRequest, SetDefaultParentDirRequest};

pub struct ProjectPlugin;

impl Plugin for ProjectPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProjectLoadError>()
            .init_resource::<ProjectSaveError>()
            .init_resource::<ProjectExportStatus>()
            .init_resource::<ProjectDirtyState>()
            .add_message::<NewProjectRequest>()
            .add_message::<OpenProjectRequest>()
            .add_message::<SaveProjectRequest>()
            .add_message::<ExportProjectRequest>()
            .add_message::<CloseProjectRequest>()
            // Also registered by ConfigPlugin
            .add_message::<AddRecentProjectRequest>()
            .add_message::<SetDefaultParentDirRequest>()
            .add_systems(
                Update,
                (
                    persistence::close_project_system.run_if(on_message::<CloseProjectRequest>),
                    persistence::open_project_system.run_if(on_message::<OpenProjectRequest>),
                    persistence::new_project_system.run_if(on_message::<NewProjectRequest>),
                    persistence::detect_project_changes,
                    persistence::save_project_system.run_if(on_message::<SaveProjectRequest>),
                    persistence::export_project_system.run_if(on_message::<ExportProjectRequest>),
                )
                    .chain(),
            );
    }
}

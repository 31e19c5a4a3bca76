mod library;
pub use library::{AssetBrowser, ScanAssetsTask, ScanResult, is_image_file, list_image_files};

use bevy::prelude::*;

/// Message to rescan the open project's directory for tile images
#[derive(Message)]
pub struct ScanAssetsRequest;

pub struct AssetLibraryPlugin;

impl Plugin for AssetLibraryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AssetBrowser>()
            .add_message::<ScanAssetsRequest>()
            .add_systems(
                Update,
                (
                    library::track_project_for_scan,
                    library::start_asset_scan.run_if(on_message::<ScanAssetsRequest>),
                    library::poll_scan_tasks,
                )
                    .chain(),
            );
    }
}

//! Project loading and legacy tile map migration.

use bevy::log::{debug, info};
use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::Path;

use crate::constants::{DEFAULT_LAYER_NAME, PROJECT_FILE_NAME};
use crate::project::error::{ProjectError, Result};
use crate::project::{AssetRef, Cell, LayerStack, Project, TileLayer, in_bounds, parse_cell_key};

use super::format::SavedProject;

/// Load the project stored in `root`.
///
/// Tiles whose key is malformed, lies outside the grid, or whose image file
/// no longer exists are dropped without failing the load.
pub fn load_project(root: &Path) -> Result<Project> {
    let file = root.join(PROJECT_FILE_NAME);

    let json = match std::fs::read_to_string(&file) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ProjectError::ProjectFileNotFound { path: file });
        }
        Err(e) => return Err(ProjectError::io(file, e)),
    };

    let saved: SavedProject =
        serde_json::from_str(&json).map_err(|source| ProjectError::Parse {
            path: file.clone(),
            source,
        })?;

    // Resolve assets against an absolute root so equality is stable
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let project = decode_project(saved, &root)?;

    info!(
        "Project {:?} loaded from {:?} ({} layers, {} tiles)",
        project.name,
        root,
        project.layer_count(),
        project.tile_count()
    );
    Ok(project)
}

/// Build a [`Project`] from its saved form, migrating any legacy tile map.
///
/// Without explicit layers the legacy entries become a single "Background"
/// layer. With explicit layers they are merged into layer 0, where the
/// layer's own entries take precedence on the same cell.
pub(crate) fn decode_project(saved: SavedProject, root: &Path) -> Result<Project> {
    let (width, height) = (saved.width, saved.height);
    if width == 0 || height == 0 {
        return Err(ProjectError::InvalidDimensions { width, height });
    }

    let legacy = resolve_tiles(&saved.legacy_tiles, root, width, height);
    if !legacy.is_empty() {
        info!("Migrating {} legacy tiles into layer 0", legacy.len());
    }

    let layers = if saved.layers.is_empty() {
        vec![TileLayer::with_tiles(DEFAULT_LAYER_NAME, true, legacy)]
    } else {
        let mut legacy = Some(legacy);
        saved
            .layers
            .into_iter()
            .map(|layer| {
                let mut tiles = resolve_tiles(&layer.tiles, root, width, height);
                if let Some(legacy) = legacy.take() {
                    for (cell, asset) in legacy {
                        tiles.entry(cell).or_insert(asset);
                    }
                }
                TileLayer::with_tiles(layer.name, layer.visible, tiles)
            })
            .collect()
    };

    let layers = LayerStack::from_layers(layers)
        .unwrap_or_else(|| LayerStack::new(TileLayer::new(DEFAULT_LAYER_NAME)));

    let name = if saved.name.is_empty() {
        root.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        saved.name
    };

    let mut project = Project::with_layers(name, width, height, layers)?;
    project.root_path = Some(root.to_path_buf());
    Ok(project)
}

/// Turn stored `"x,y" -> file name` entries into resolved tiles.
fn resolve_tiles(
    entries: &BTreeMap<String, String>,
    root: &Path,
    width: u32,
    height: u32,
) -> HashMap<Cell, AssetRef> {
    let mut tiles = HashMap::with_capacity(entries.len());

    for (key, file_name) in entries {
        let Some(cell) = parse_cell_key(key) else {
            debug!("Skipping tile with malformed key {:?}", key);
            continue;
        };
        if !in_bounds(cell, width, height) {
            debug!("Skipping tile {:?} outside the {}x{} grid", key, width, height);
            continue;
        }
        let asset = AssetRef::resolve(root, file_name);
        if !asset.exists() {
            debug!("Skipping tile {:?}: image {:?} not found", key, asset.path());
            continue;
        }
        tiles.insert(cell, asset);
    }

    tiles
}

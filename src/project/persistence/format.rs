//! On-disk shape of `config.json`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::project::{Project, TileLayer, cell_key};

/// Persistence format for a project.
///
/// Unknown fields are ignored and `layers` may be missing entirely. Tile maps
/// are ordered maps so repeated saves of the same project are byte-identical.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedProject {
    #[serde(default)]
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub layers: Vec<SavedLayer>,
    /// Legacy single-layer tile map (`"x,y"` -> file name).
    /// Migrated into layer 0 on load, never written back.
    #[serde(default, rename = "tiles", skip_serializing)]
    pub legacy_tiles: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLayer {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "isVisible", default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub tiles: BTreeMap<String, String>,
}

fn default_visible() -> bool {
    true
}

impl SavedLayer {
    /// Saved form of `layer`, image paths written relative to `root`.
    pub fn from_layer(layer: &TileLayer, root: Option<&Path>) -> Self {
        Self {
            name: layer.name.clone(),
            visible: layer.visible,
            tiles: layer
                .tiles()
                .map(|(cell, asset)| (cell_key(cell), asset.stored_name(root)))
                .collect(),
        }
    }
}

impl From<&Project> for SavedProject {
    fn from(project: &Project) -> Self {
        let root = project.root_path.as_deref();
        Self {
            name: project.name.clone(),
            width: project.width(),
            height: project.height(),
            layers: project
                .layers()
                .iter()
                .map(|layer| SavedLayer::from_layer(layer, root))
                .collect(),
            legacy_tiles: BTreeMap::new(), // Never save this, only for loading legacy
        }
    }
}

//! Flat-text export: a legend of tile ids plus one integer grid per layer.
//!
//! Ids are assigned from the sorted names (as stored in `config.json`) of
//! every asset used anywhere in the project, so the same tile set always yields the same legend no
//! matter where or in which order the tiles were placed.

use bevy::log::info;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::constants::LEGEND_FILE_NAME;

use super::error::{ProjectError, Result};
use super::{AssetRef, Project, TileLayer};

/// Grid value written for an empty cell
pub const EMPTY_CELL_ID: i64 = -1;

/// Mapping between assets and their sequential export ids.
#[derive(Debug, Clone, Default)]
pub struct Legend {
    entries: Vec<AssetRef>,
    names: Vec<String>,
    ids: HashMap<AssetRef, usize>,
}

impl Legend {
    /// Collect every distinct asset across all layers, hidden ones included.
    ///
    /// Names are the same root-relative names the project file stores.
    pub fn from_project(project: &Project) -> Self {
        let root = project.root_path.as_deref();
        let unique: BTreeSet<(String, &AssetRef)> = project
            .layers()
            .iter()
            .flat_map(TileLayer::tiles)
            .map(|(_, asset)| (asset.stored_name(root), asset))
            .collect();

        let mut entries = Vec::with_capacity(unique.len());
        let mut names = Vec::with_capacity(unique.len());
        let mut ids = HashMap::with_capacity(unique.len());
        for (id, (name, asset)) in unique.into_iter().enumerate() {
            ids.insert(asset.clone(), id);
            entries.push(asset.clone());
            names.push(name);
        }

        Self {
            entries,
            names,
            ids,
        }
    }

    pub fn id_of(&self, asset: &AssetRef) -> Option<usize> {
        self.ids.get(asset).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assets in id order.
    pub fn entries(&self) -> &[AssetRef] {
        &self.entries
    }

    /// One `<id>: <filename>` line per asset.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (id, name) in self.names.iter().enumerate() {
            let _ = writeln!(out, "{}: {}", id, name);
        }
        out
    }
}

/// Encode a layer as `height` rows of `width` comma-separated ids.
pub fn encode_layer_grid(layer: &TileLayer, legend: &Legend, width: u32, height: u32) -> String {
    let mut out = String::new();
    for y in 0..height as i32 {
        let row: Vec<String> = (0..width as i32)
            .map(|x| {
                layer
                    .tile((x, y))
                    .and_then(|asset| legend.id_of(asset))
                    .map_or(EMPTY_CELL_ID, |id| id as i64)
                    .to_string()
            })
            .collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Replace every character that is not an ASCII letter or digit with `_`.
pub fn sanitize_layer_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Output file name for the layer at `index`.
pub fn layer_file_name(index: usize, name: &str) -> String {
    format!("map_layer_{}_{}.txt", index, sanitize_layer_name(name))
}

/// Files written by [`export_flat_text`].
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub legend_path: PathBuf,
    /// One grid file per layer, in layer order
    pub layer_paths: Vec<PathBuf>,
    pub asset_count: usize,
}

/// Write the legend and one grid file per layer into the project root.
pub fn export_flat_text(project: &Project) -> Result<ExportSummary> {
    let root = project
        .root_path
        .as_ref()
        .ok_or(ProjectError::RootPathRequired)?;

    let legend = Legend::from_project(project);

    let legend_path = root.join(LEGEND_FILE_NAME);
    std::fs::write(&legend_path, legend.to_text())
        .map_err(|e| ProjectError::io(&legend_path, e))?;

    let mut layer_paths = Vec::with_capacity(project.layer_count());
    for (index, layer) in project.layers().iter().enumerate() {
        let path = root.join(layer_file_name(index, &layer.name));
        let grid = encode_layer_grid(layer, &legend, project.width(), project.height());
        std::fs::write(&path, grid).map_err(|e| ProjectError::io(&path, e))?;
        layer_paths.push(path);
    }

    info!(
        "Exported {} layers ({} distinct tiles) to {:?}",
        layer_paths.len(),
        legend.len(),
        root
    );

    Ok(ExportSummary {
        legend_path,
        layer_paths,
        asset_count: legend.len(),
    })
}

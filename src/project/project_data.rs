use bevy::prelude::Resource;
use std::path::PathBuf;

use crate::constants::DEFAULT_LAYER_NAME;

use super::cell::in_bounds;
use super::error::{ProjectError, Result};
use super::{AssetRef, Cell, LayerStack, TileLayer};

/// An open tile map project.
///
/// Owned by a single editing session. All tile and layer mutations go through
/// the methods below so that cell bounds and the non-empty layer list hold at
/// all times.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    width: u32,
    height: u32,
    /// Directory holding `config.json` and the tile images; `None` until the
    /// project has been created on or loaded from disk.
    pub root_path: Option<PathBuf>,
    layers: LayerStack,
}

impl Project {
    /// A new project with a single empty "Background" layer.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Result<Self> {
        Self::with_layers(
            name,
            width,
            height,
            LayerStack::new(TileLayer::new(DEFAULT_LAYER_NAME)),
        )
    }

    pub(crate) fn with_layers(
        name: impl Into<String>,
        width: u32,
        height: u32,
        layers: LayerStack,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ProjectError::InvalidDimensions { width, height });
        }
        Ok(Self {
            name: name.into(),
            width,
            height,
            root_path: None,
            layers,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, cell: Cell) -> bool {
        in_bounds(cell, self.width, self.height)
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Result<&TileLayer> {
        self.layers.get(index)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total number of placed tiles across all layers.
    pub fn tile_count(&self) -> usize {
        self.layers.iter().map(TileLayer::tile_count).sum()
    }

    /// Place `asset` at `(x, y)` on a layer, replacing whatever was there.
    pub fn place_tile(&mut self, layer: usize, x: i32, y: i32, asset: AssetRef) -> Result<()> {
        if !self.contains((x, y)) {
            return Err(ProjectError::CellOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.layers.get_mut(layer)?.insert((x, y), asset);
        Ok(())
    }

    /// Remove the tile at `(x, y)` from a layer. An empty cell is not an error.
    pub fn remove_tile(&mut self, layer: usize, x: i32, y: i32) -> Result<Option<AssetRef>> {
        Ok(self.layers.get_mut(layer)?.remove((x, y)))
    }

    /// Insert an empty, visible layer at the front (index 0).
    ///
    /// The caller should select index 0 afterwards.
    pub fn add_layer(&mut self, name: impl Into<String>) {
        self.layers.push_front(TileLayer::new(name));
    }

    /// Remove a layer. Fails without changes when it is the only one left.
    ///
    /// Any selected index held by the caller must be clamped afterwards.
    pub fn remove_layer(&mut self, index: usize) -> Result<TileLayer> {
        self.layers.remove(index)
    }

    pub fn set_visibility(&mut self, index: usize, visible: bool) -> Result<()> {
        self.layers.get_mut(index)?.visible = visible;
        Ok(())
    }

    pub fn rename_layer(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.layers.get_mut(index)?.name = name.into();
        Ok(())
    }

    /// Default name for the next added layer: `"Layer <count>"`.
    pub fn next_layer_name(&self) -> String {
        format!("Layer {}", self.layers.len())
    }
}

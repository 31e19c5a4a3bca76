use std::collections::HashMap;

use super::{AssetRef, Cell};

/// One named, independently visible layer of sparse tiles.
///
/// Tiles are only mutated through [`super::Project`], which checks the grid
/// bounds before anything reaches this map.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub name: String,
    pub visible: bool,
    tiles: HashMap<Cell, AssetRef>,
}

impl TileLayer {
    /// An empty, visible layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            tiles: HashMap::new(),
        }
    }

    pub(crate) fn with_tiles(
        name: impl Into<String>,
        visible: bool,
        tiles: HashMap<Cell, AssetRef>,
    ) -> Self {
        Self {
            name: name.into(),
            visible,
            tiles,
        }
    }

    pub fn tile(&self, cell: Cell) -> Option<&AssetRef> {
        self.tiles.get(&cell)
    }

    pub fn tiles(&self) -> impl Iterator<Item = (Cell, &AssetRef)> {
        self.tiles.iter().map(|(cell, asset)| (*cell, asset))
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub(crate) fn insert(&mut self, cell: Cell, asset: AssetRef) -> Option<AssetRef> {
        self.tiles.insert(cell, asset)
    }

    pub(crate) fn remove(&mut self, cell: Cell) -> Option<AssetRef> {
        self.tiles.remove(&cell)
    }
}

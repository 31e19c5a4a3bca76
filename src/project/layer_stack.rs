//! Ordered, never-empty list of tile layers.
//!
//! Position in the list is the z-order: index 0 is the frontmost layer, new
//! layers are inserted at index 0, and the renderer composites from the last
//! index back to index 0. The last remaining layer cannot be removed.

use super::error::{ProjectError, Result};
use super::TileLayer;

#[derive(Debug, Clone, PartialEq)]
pub struct LayerStack {
    layers: Vec<TileLayer>,
}

impl LayerStack {
    /// A stack holding a single layer.
    pub fn new(first: TileLayer) -> Self {
        Self {
            layers: vec![first],
        }
    }

    /// Build from a list that must not be empty; returns `None` otherwise.
    pub fn from_layers(layers: Vec<TileLayer>) -> Option<Self> {
        if layers.is_empty() {
            None
        } else {
            Some(Self { layers })
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Never true: a stack always holds at least one layer.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&TileLayer> {
        let len = self.layers.len();
        self.layers
            .get(index)
            .ok_or(ProjectError::LayerIndexOutOfRange { index, len })
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut TileLayer> {
        let len = self.layers.len();
        self.layers
            .get_mut(index)
            .ok_or(ProjectError::LayerIndexOutOfRange { index, len })
    }

    /// Layers in list order, frontmost first.
    pub fn iter(&self) -> impl Iterator<Item = &TileLayer> {
        self.layers.iter()
    }

    /// Visible layers in composition order: last index first, index 0 last.
    pub fn render_order(&self) -> impl Iterator<Item = (usize, &TileLayer)> {
        self.layers
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, layer)| layer.visible)
    }

    /// Insert a layer at the front (index 0).
    pub fn push_front(&mut self, layer: TileLayer) {
        self.layers.insert(0, layer);
    }

    /// Remove the layer at `index`, refusing to remove the last one.
    pub fn remove(&mut self, index: usize) -> Result<TileLayer> {
        if self.layers.len() <= 1 {
            return Err(ProjectError::LastLayer);
        }
        let len = self.layers.len();
        if index >= len {
            return Err(ProjectError::LayerIndexOutOfRange { index, len });
        }
        Ok(self.layers.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(stack: &LayerStack) -> Vec<&str> {
        stack.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_from_empty_list_is_rejected() {
        assert!(LayerStack::from_layers(Vec::new()).is_none());
    }

    #[test]
    fn test_push_front_inserts_at_index_zero() {
        let mut stack = LayerStack::new(TileLayer::new("Background"));
        stack.push_front(TileLayer::new("Layer 1"));
        stack.push_front(TileLayer::new("Layer 2"));
        assert_eq!(names(&stack), vec!["Layer 2", "Layer 1", "Background"]);
    }

    #[test]
    fn test_remove_last_layer_is_refused() {
        let mut stack = LayerStack::new(TileLayer::new("Background"));
        assert!(matches!(stack.remove(0), Err(ProjectError::LastLayer)));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut stack = LayerStack::new(TileLayer::new("Background"));
        stack.push_front(TileLayer::new("Top"));
        assert!(matches!(
            stack.remove(5),
            Err(ProjectError::LayerIndexOutOfRange { index: 5, len: 2 })
        ));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_render_order_is_back_to_front_and_skips_hidden() {
        let mut stack = LayerStack::new(TileLayer::new("Background"));
        stack.push_front(TileLayer::new("Middle"));
        stack.push_front(TileLayer::new("Top"));
        stack.get_mut(1).unwrap().visible = false;

        let order: Vec<(usize, &str)> = stack
            .render_order()
            .map(|(i, l)| (i, l.name.as_str()))
            .collect();
        assert_eq!(order, vec![(2, "Background"), (0, "Top")]);
    }
}

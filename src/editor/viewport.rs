use bevy::prelude::*;

use crate::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::project::{Cell, in_bounds};

/// Screen <-> grid mapping for the map view.
///
/// Screen points are window coordinates (origin top-left, y down). A map point
/// `m` is drawn at `(m + offset) * scale`, so `offset` is a translation in map
/// units that does not change with zoom.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub scale: f32,
    pub offset: Vec2,
    /// While locked, drags paint and erase instead of panning
    pub locked: bool,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            locked: true,
        }
    }
}

impl ViewportTransform {
    /// Transform at 100% with the `width` x `height` map centred in `viewport_size`.
    pub fn centered(viewport_size: Vec2, width: u32, height: u32, tile_size: f32) -> Self {
        let map_size = Vec2::new(width as f32, height as f32) * tile_size;
        Self {
            offset: (viewport_size - map_size) / 2.0,
            ..default()
        }
    }

    /// The cell under `screen`, or `None` if it falls outside the map.
    pub fn screen_to_grid(
        &self,
        screen: Vec2,
        tile_size: f32,
        width: u32,
        height: u32,
    ) -> Option<Cell> {
        let map_point = screen / self.scale - self.offset;
        let cell = (map_point / tile_size).floor();
        if !cell.is_finite() {
            return None;
        }

        let cell = (cell.x as i32, cell.y as i32);
        in_bounds(cell, width, height).then_some(cell)
    }

    /// Top-left screen position of `cell`.
    pub fn grid_to_screen(&self, cell: Cell, tile_size: f32) -> Vec2 {
        let map_point = Vec2::new(cell.0 as f32, cell.1 as f32) * tile_size;
        (map_point + self.offset) * self.scale
    }

    /// Multiplicative zoom: scrolling away (positive) zooms out, toward zooms in.
    pub fn apply_zoom(&mut self, wheel_delta: f32) {
        let factor = if wheel_delta > 0.0 {
            ZOOM_OUT_FACTOR
        } else if wheel_delta < 0.0 {
            ZOOM_IN_FACTOR
        } else {
            return;
        };
        self.scale = (self.scale * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Pan by a screen-space drag. Returns false (and does nothing) while locked.
    pub fn apply_pan(&mut self, drag: Vec2) -> bool {
        if self.locked {
            return false;
        }
        self.offset += drag / self.scale;
        true
    }

    pub fn toggle_lock(&mut self) {
        self.locked = !self.locked;
    }

    pub fn zoom_percent(&self) -> i32 {
        (self.scale * 100.0) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: f32 = 32.0;

    #[test]
    fn test_default_is_locked_at_full_scale() {
        let view = ViewportTransform::default();
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.offset, Vec2::ZERO);
        assert!(view.locked);
    }

    #[test]
    fn test_screen_to_grid_identity() {
        let view = ViewportTransform::default();
        assert_eq!(view.screen_to_grid(Vec2::new(0.0, 0.0), TILE, 4, 4), Some((0, 0)));
        assert_eq!(view.screen_to_grid(Vec2::new(33.0, 70.0), TILE, 4, 4), Some((1, 2)));
        assert_eq!(view.screen_to_grid(Vec2::new(127.9, 127.9), TILE, 4, 4), Some((3, 3)));
    }

    #[test]
    fn test_screen_to_grid_excludes_out_of_bounds() {
        let view = ViewportTransform::default();
        assert_eq!(view.screen_to_grid(Vec2::new(128.0, 0.0), TILE, 4, 4), None);
        assert_eq!(view.screen_to_grid(Vec2::new(0.0, 128.0), TILE, 4, 4), None);
        // Just left of the map floors to -1 rather than truncating to 0
        assert_eq!(view.screen_to_grid(Vec2::new(-0.5, 10.0), TILE, 4, 4), None);
        assert_eq!(view.screen_to_grid(Vec2::new(10.0, -31.0), TILE, 4, 4), None);
    }

    #[test]
    fn test_screen_to_grid_with_scale_and_offset() {
        let view = ViewportTransform {
            scale: 2.0,
            offset: Vec2::new(10.0, 20.0),
            locked: true,
        };
        // map = screen / 2 - offset = (100, 100) - (10, 20) = (90, 80)
        assert_eq!(view.screen_to_grid(Vec2::new(200.0, 200.0), TILE, 8, 8), Some((2, 2)));
        // Maps back to the same cell
        let top_left = view.grid_to_screen((2, 2), TILE);
        assert_eq!(view.screen_to_grid(top_left, TILE, 8, 8), Some((2, 2)));
    }

    #[test]
    fn test_zoom_direction() {
        let mut view = ViewportTransform::default();
        view.apply_zoom(1.0);
        assert!((view.scale - 0.9).abs() < 1e-6);

        let mut view = ViewportTransform::default();
        view.apply_zoom(-3.0);
        assert!((view.scale - 1.1).abs() < 1e-6);

        let mut view = ViewportTransform::default();
        view.apply_zoom(0.0);
        assert_eq!(view.scale, 1.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = ViewportTransform::default();
        for _ in 0..200 {
            view.apply_zoom(1.0);
            assert!(view.scale >= MIN_ZOOM);
        }
        assert_eq!(view.scale, MIN_ZOOM);

        for _ in 0..200 {
            view.apply_zoom(-1.0);
            assert!(view.scale <= MAX_ZOOM);
        }
        assert_eq!(view.scale, MAX_ZOOM);
    }

    #[test]
    fn test_pan_only_when_unlocked() {
        let mut view = ViewportTransform::default();
        assert!(!view.apply_pan(Vec2::new(10.0, 10.0)));
        assert_eq!(view.offset, Vec2::ZERO);

        view.toggle_lock();
        view.scale = 2.0;
        assert!(view.apply_pan(Vec2::new(10.0, -4.0)));
        assert_eq!(view.offset, Vec2::new(5.0, -2.0));
    }

    #[test]
    fn test_centered() {
        let view = ViewportTransform::centered(Vec2::new(800.0, 600.0), 10, 5, TILE);
        assert_eq!(view.offset, Vec2::new(240.0, 220.0));
        assert!(view.locked);
        assert_eq!(view.screen_to_grid(Vec2::new(240.0, 220.0), TILE, 10, 5), Some((0, 0)));
    }

    #[test]
    fn test_zoom_percent() {
        let mut view = ViewportTransform::default();
        assert_eq!(view.zoom_percent(), 100);
        view.scale = 0.5;
        assert_eq!(view.zoom_percent(), 50);
    }
}

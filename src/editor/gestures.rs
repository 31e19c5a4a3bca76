//! Pointer gesture policy: what a press or drag does to the map.
//!
//! Resolution is pure so it can be tested without a window; the input system
//! only gathers the pointer state and applies the result.

use bevy::prelude::*;

use crate::project::{AssetRef, Cell, Project};

use super::session::EditorSession;
use super::viewport::ViewportTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GestureAction {
    Place {
        layer: usize,
        cell: Cell,
        asset: AssetRef,
    },
    Remove {
        layer: usize,
        cell: Cell,
    },
    Pan(Vec2),
    None,
}

/// Decide what a pointer event does.
///
/// `screen` is the current pointer position, `drag` the screen-space movement
/// since the last event (zero for a plain press).
pub fn resolve_gesture(
    button: PointerButton,
    screen: Vec2,
    drag: Vec2,
    viewport: &ViewportTransform,
    project: &Project,
    session: &EditorSession,
    tile_size: f32,
) -> GestureAction {
    // Unlocked: only a primary drag pans, nothing edits
    if !viewport.locked {
        return if button == PointerButton::Primary && drag != Vec2::ZERO {
            GestureAction::Pan(drag)
        } else {
            GestureAction::None
        };
    }

    let Some(cell) = viewport.screen_to_grid(screen, tile_size, project.width(), project.height())
    else {
        return GestureAction::None;
    };
    let Some(layer) = session.active_layer(project) else {
        return GestureAction::None;
    };

    match button {
        PointerButton::Primary => match &session.selected_asset {
            Some(asset) => GestureAction::Place {
                layer,
                cell,
                asset: asset.clone(),
            },
            None => GestureAction::None,
        },
        PointerButton::Secondary => GestureAction::Remove { layer, cell },
    }
}

/// Apply a resolved gesture. Returns true if the project or viewport changed.
pub fn apply_gesture(
    action: GestureAction,
    project: &mut Project,
    viewport: &mut ViewportTransform,
) -> bool {
    match action {
        GestureAction::Place { layer, cell, asset } => {
            if project.layer(layer).ok().and_then(|l| l.tile(cell)) == Some(&asset) {
                return false;
            }
            match project.place_tile(layer, cell.0, cell.1, asset) {
                Ok(()) => true,
                Err(e) => {
                    warn!("Ignoring placement at {:?}: {}", cell, e);
                    false
                }
            }
        }
        GestureAction::Remove { layer, cell } => match project.remove_tile(layer, cell.0, cell.1) {
            Ok(removed) => removed.is_some(),
            Err(e) => {
                warn!("Ignoring removal at {:?}: {}", cell, e);
                false
            }
        },
        GestureAction::Pan(drag) => viewport.apply_pan(drag),
        GestureAction::None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: f32 = 32.0;

    fn setup() -> (Project, EditorSession, ViewportTransform) {
        let project = Project::new("Test", 4, 4).unwrap();
        let session = EditorSession {
            selected_layer: 0,
            selected_asset: Some(AssetRef::new("/maps/test/grass.png")),
        };
        (project, session, ViewportTransform::default())
    }

    #[test]
    fn test_primary_places_selected_asset() {
        let (mut project, session, mut viewport) = setup();
        let action = resolve_gesture(
            PointerButton::Primary,
            Vec2::new(40.0, 10.0),
            Vec2::ZERO,
            &viewport,
            &project,
            &session,
            TILE,
        );
        assert_eq!(
            action,
            GestureAction::Place {
                layer: 0,
                cell: (1, 0),
                asset: AssetRef::new("/maps/test/grass.png"),
            }
        );

        assert!(apply_gesture(action.clone(), &mut project, &mut viewport));
        assert_eq!(
            project.layer(0).unwrap().tile((1, 0)),
            Some(&AssetRef::new("/maps/test/grass.png"))
        );
        // Same tile again is not a change
        assert!(!apply_gesture(action, &mut project, &mut viewport));
    }

    #[test]
    fn test_primary_without_asset_does_nothing() {
        let (project, mut session, viewport) = setup();
        session.select_asset(None);
        let action = resolve_gesture(
            PointerButton::Primary,
            Vec2::new(40.0, 10.0),
            Vec2::ZERO,
            &viewport,
            &project,
            &session,
            TILE,
        );
        assert_eq!(action, GestureAction::None);
    }

    #[test]
    fn test_secondary_removes_regardless_of_asset() {
        let (mut project, mut session, mut viewport) = setup();
        project
            .place_tile(0, 2, 2, AssetRef::new("/maps/test/wall.png"))
            .unwrap();
        session.select_asset(None);

        let action = resolve_gesture(
            PointerButton::Secondary,
            Vec2::new(70.0, 70.0),
            Vec2::new(3.0, 0.0),
            &viewport,
            &project,
            &session,
            TILE,
        );
        assert_eq!(action, GestureAction::Remove { layer: 0, cell: (2, 2) });
        assert!(apply_gesture(action, &mut project, &mut viewport));
        assert_eq!(project.tile_count(), 0);
    }

    #[test]
    fn test_outside_map_does_nothing() {
        let (project, session, viewport) = setup();
        let action = resolve_gesture(
            PointerButton::Primary,
            Vec2::new(500.0, 10.0),
            Vec2::ZERO,
            &viewport,
            &project,
            &session,
            TILE,
        );
        assert_eq!(action, GestureAction::None);
    }

    #[test]
    fn test_stale_layer_index_does_nothing() {
        let (project, mut session, viewport) = setup();
        session.select_layer(5);
        let action = resolve_gesture(
            PointerButton::Secondary,
            Vec2::new(10.0, 10.0),
            Vec2::ZERO,
            &viewport,
            &project,
            &session,
            TILE,
        );
        assert_eq!(action, GestureAction::None);
    }

    #[test]
    fn test_unlocked_drag_pans_without_editing() {
        let (mut project, session, mut viewport) = setup();
        viewport.toggle_lock();

        let action = resolve_gesture(
            PointerButton::Primary,
            Vec2::new(40.0, 10.0),
            Vec2::new(8.0, -4.0),
            &viewport,
            &project,
            &session,
            TILE,
        );
        assert_eq!(action, GestureAction::Pan(Vec2::new(8.0, -4.0)));

        assert!(apply_gesture(action, &mut project, &mut viewport));
        assert_eq!(viewport.offset, Vec2::new(8.0, -4.0));
        assert_eq!(project.tile_count(), 0);
    }

    #[test]
    fn test_unlocked_secondary_drag_does_nothing() {
        let (mut project, session, mut viewport) = setup();
        project
            .place_tile(0, 1, 0, AssetRef::new("/maps/test/wall.png"))
            .unwrap();
        viewport.toggle_lock();

        let action = resolve_gesture(
            PointerButton::Secondary,
            Vec2::new(40.0, 10.0),
            Vec2::new(8.0, -4.0),
            &viewport,
            &project,
            &session,
            TILE,
        );
        assert_eq!(action, GestureAction::None);

        assert!(!apply_gesture(action, &mut project, &mut viewport));
        assert_eq!(viewport.offset, Vec2::ZERO);
        assert_eq!(project.tile_count(), 1);
    }
}

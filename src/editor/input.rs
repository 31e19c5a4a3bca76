use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::TILE_SIZE;
use crate::project::Project;

use super::gestures::{GestureAction, PointerButton, apply_gesture, resolve_gesture};
use super::session::EditorSession;
use super::viewport::ViewportTransform;

/// Last cursor position seen while a button was held, for drag deltas
#[derive(Resource, Default)]
pub struct PointerState {
    pub last_position: Option<Vec2>,
}

pub fn handle_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut viewport: ResMut<ViewportTransform>,
) {
    for event in scroll_events.read() {
        // Wheel up reports positive y; scrolling up zooms in
        viewport.apply_zoom(-event.y);
    }
}

pub fn handle_lock_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut viewport: ResMut<ViewportTransform>,
) {
    if keyboard.just_pressed(KeyCode::KeyL) {
        viewport.toggle_lock();
        info!(
            "Viewport {}",
            if viewport.locked { "locked" } else { "unlocked" }
        );
    }
}

pub fn handle_pointer(
    mouse_button: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    project: Option<ResMut<Project>>,
    session: Res<EditorSession>,
    mut viewport: ResMut<ViewportTransform>,
    mut pointer: ResMut<PointerState>,
) {
    let button = if mouse_button.pressed(MouseButton::Left) {
        PointerButton::Primary
    } else if mouse_button.pressed(MouseButton::Right) {
        PointerButton::Secondary
    } else {
        pointer.last_position = None;
        return;
    };

    let Some(cursor) = window_query.single().ok().and_then(|w| w.cursor_position()) else {
        pointer.last_position = None;
        return;
    };
    let drag = pointer
        .last_position
        .map(|last| cursor - last)
        .unwrap_or(Vec2::ZERO);
    pointer.last_position = Some(cursor);

    let Some(mut project) = project else {
        return;
    };

    let action = resolve_gesture(
        button,
        cursor,
        drag,
        &viewport,
        &project,
        &session,
        TILE_SIZE,
    );
    if action == GestureAction::None {
        return;
    }

    // Only flag the project as changed when a tile actually changed
    if apply_gesture(action, project.bypass_change_detection(), &mut viewport) {
        project.set_changed();
    }
}

/// Reset selection and view when a project is opened, clamp it on edits.
pub fn sync_session_with_project(
    project: Option<Res<Project>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut session: ResMut<EditorSession>,
    mut viewport: ResMut<ViewportTransform>,
) {
    let Some(project) = project else {
        if *session != EditorSession::default() {
            session.reset();
        }
        return;
    };

    if project.is_added() {
        session.reset();
        *viewport = match window_query.single() {
            Ok(window) => ViewportTransform::centered(
                window.size(),
                project.width(),
                project.height(),
                TILE_SIZE,
            ),
            Err(_) => ViewportTransform::default(),
        };
    } else if project.is_changed() && session.active_layer(&project).is_none() {
        session.clamp_to(&project);
    }
}

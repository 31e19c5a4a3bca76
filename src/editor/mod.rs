//! Interactive editing: viewport transform, selection and pointer gestures.

mod gestures;
mod input;
mod session;
mod viewport;

pub use gestures::{GestureAction, PointerButton, apply_gesture, resolve_gesture};
pub use input::PointerState;
pub use session::{EditorSession, status_line};
pub use viewport::ViewportTransform;

use bevy::prelude::*;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportTransform>()
            .init_resource::<EditorSession>()
            .init_resource::<PointerState>()
            .add_systems(
                Update,
                (
                    input::sync_session_with_project,
                    input::handle_zoom,
                    input::handle_lock_shortcut,
                    input::handle_pointer,
                )
                    .chain(),
            );
    }
}

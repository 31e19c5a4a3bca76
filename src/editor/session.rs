use bevy::prelude::*;

use crate::project::{AssetRef, Project};

use super::viewport::ViewportTransform;

/// Per-session editing selection. Not part of the saved project.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct EditorSession {
    pub selected_layer: usize,
    pub selected_asset: Option<AssetRef>,
}

impl EditorSession {
    /// The selected layer index, if it is valid for `project`.
    pub fn active_layer(&self, project: &Project) -> Option<usize> {
        (self.selected_layer < project.layer_count()).then_some(self.selected_layer)
    }

    pub fn select_layer(&mut self, index: usize) {
        self.selected_layer = index;
    }

    pub fn select_asset(&mut self, asset: Option<AssetRef>) {
        self.selected_asset = asset;
    }

    /// Add a layer with the default name and select it.
    pub fn add_layer(&mut self, project: &mut Project) {
        let name = project.next_layer_name();
        project.add_layer(name);
        self.selected_layer = 0;
    }

    /// Remove the selected layer. Fails, leaving everything untouched, on the last layer.
    pub fn remove_selected_layer(&mut self, project: &mut Project) -> crate::project::Result<()> {
        project.remove_layer(self.selected_layer)?;
        self.clamp_to(project);
        Ok(())
    }

    /// Pull the selected layer back inside the project's layer list.
    pub fn clamp_to(&mut self, project: &Project) {
        let last = project.layer_count().saturating_sub(1);
        if self.selected_layer > last {
            self.selected_layer = last;
        }
    }

    /// Forget the selection (project opened, created or closed).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Status bar text: zoom, active layer and selected asset.
pub fn status_line(project: &Project, session: &EditorSession, viewport: &ViewportTransform) -> String {
    let layer_name = session
        .active_layer(project)
        .and_then(|index| project.layer(index).ok())
        .map(|layer| layer.name.as_str())
        .unwrap_or("-");
    let asset = session
        .selected_asset
        .as_ref()
        .map(AssetRef::file_name)
        .unwrap_or_else(|| "None".to_string());

    format!("{}% | Layer: {} | {}", viewport.zoom_percent(), layer_name, asset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project::new("Test", 4, 4).unwrap()
    }

    #[test]
    fn test_add_layer_selects_front() {
        let mut project = project();
        let mut session = EditorSession::default();

        session.add_layer(&mut project);
        session.select_layer(1);
        session.add_layer(&mut project);

        assert_eq!(session.selected_layer, 0);
        assert_eq!(project.layer(0).unwrap().name, "Layer 2");
        assert_eq!(project.layer(1).unwrap().name, "Layer 1");
        assert_eq!(project.layer(2).unwrap().name, "Background");
    }

    #[test]
    fn test_remove_selected_layer_clamps() {
        let mut project = project();
        let mut session = EditorSession::default();
        session.add_layer(&mut project);
        session.select_layer(1);

        session.remove_selected_layer(&mut project).unwrap();

        assert_eq!(project.layer_count(), 1);
        assert_eq!(session.selected_layer, 0);
        assert_eq!(project.layer(0).unwrap().name, "Layer 1");
    }

    #[test]
    fn test_remove_last_layer_is_refused() {
        let mut project = project();
        let mut session = EditorSession::default();

        let err = session.remove_selected_layer(&mut project).unwrap_err();

        assert!(matches!(err, crate::project::ProjectError::LastLayer));
        assert_eq!(project.layer_count(), 1);
        assert_eq!(session.selected_layer, 0);
    }

    #[test]
    fn test_active_layer_rejects_stale_index() {
        let project = project();
        let session = EditorSession {
            selected_layer: 3,
            selected_asset: None,
        };
        assert_eq!(session.active_layer(&project), None);
    }

    #[test]
    fn test_status_line() {
        let project = project();
        let mut session = EditorSession::default();
        let mut viewport = ViewportTransform::default();

        assert_eq!(
            status_line(&project, &session, &viewport),
            "100% | Layer: Background | None"
        );

        viewport.scale = 1.5;
        session.select_asset(Some(AssetRef::new("/maps/town/grass.png")));
        assert_eq!(
            status_line(&project, &session, &viewport),
            "150% | Layer: Background | grass.png"
        );

        session.select_layer(7);
        assert_eq!(
            status_line(&project, &session, &viewport),
            "150% | Layer: - | grass.png"
        );
    }
}

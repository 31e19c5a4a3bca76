//! Project persistence: the `config.json` codec and the session systems.
//!
//! ## Module Structure
//!
//! - [`format`] - Serde types mirroring `config.json`
//! - [`load`] - Loading, per-entry recovery and legacy tile map migration
//! - [`save`] - Saving and project creation
//! - [`messages`] - Message types for session operations
//! - [`resources`] - Error and dirty state resources
//! - [`systems`] - Message handling systems
//! - [`dirty`] - Dirty state detection
//!
//! ## On-disk format
//!
//! ```json
//! {
//!   "name": "Dungeon",
//!   "width": 32,
//!   "height": 32,
//!   "layers": [
//!     { "name": "Background", "isVisible": true, "tiles": { "2,3": "wall.png" } }
//!   ]
//! }
//! ```
//!
//! A top-level `"tiles"` map from older single-layer projects is accepted on
//! load and folded into layer 0; it is never written.

mod dirty;
pub mod format;
mod load;
mod messages;
mod resources;
mod save;
mod systems;


// Re-exports - Codec
pub use format::{SavedLayer, SavedProject};
pub use load::load_project;
pub use save::{create_project, save_project};

// Re-exports - Messages
pub use messages::{
    CloseProjectRequest, ExportProjectRequest, NewProjectRequest, OpenProjectRequest,
    SaveProjectRequest,
};

// Re-exports - Resources
pub use resources::{ProjectDirtyState, ProjectExportStatus, ProjectLoadError, ProjectSaveError};

// Re-exports - Systems
pub use dirty::detect_project_changes;
pub use systems::{
    close_project_system, export_project_system, new_project_system, open_project_system,
    save_project_system,
};

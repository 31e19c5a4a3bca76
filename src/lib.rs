//! Layered tile map editor core.
//!
//! [`project`] holds the grid model, the on-disk codec and the flat-text
//! export. [`editor`] maps screen input onto the grid. Both are usable as
//! plain Rust or through their Bevy plugins.

pub mod assets;
pub mod config;
pub mod constants;
pub mod editor;
pub mod paths;
pub mod project;

pub use assets::AssetLibraryPlugin;
pub use config::ConfigPlugin;
pub use editor::EditorPlugin;
pub use project::ProjectPlugin;

//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Edge length of one grid cell in screen units at zoom 1.0
pub const TILE_SIZE: f32 = 32.0;

/// Default grid width offered for new projects
pub const DEFAULT_GRID_WIDTH: u32 = 32;

/// Default grid height offered for new projects
pub const DEFAULT_GRID_HEIGHT: u32 = 32;

/// Smallest allowed viewport scale
pub const MIN_ZOOM: f32 = 0.1;

/// Largest allowed viewport scale
pub const MAX_ZOOM: f32 = 10.0;

/// Scale multiplier applied when scrolling away from the map
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

/// Scale multiplier applied when scrolling toward the map
pub const ZOOM_IN_FACTOR: f32 = 1.1;

/// Name of the project description file inside a project root
pub const PROJECT_FILE_NAME: &str = "config.json";

/// Name of the first layer of every new project
pub const DEFAULT_LAYER_NAME: &str = "Background";

/// Name of the legend file written by the flat-text export
pub const LEGEND_FILE_NAME: &str = "map_legend.txt";

/// File extensions (lowercase) recognized as tile images
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// Maximum number of recent projects to remember in config
pub const MAX_RECENT_PROJECTS: usize = 5;

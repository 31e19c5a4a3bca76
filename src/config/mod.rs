use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::MAX_RECENT_PROJECTS;

/// Application settings persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfigData {
    /// Recently opened project roots, most recent first
    #[serde(default)]
    pub recent_projects: Vec<PathBuf>,

    /// Last opened project root (not auto-loaded, just remembered for quick access)
    #[serde(default)]
    pub last_project_path: Option<PathBuf>,

    /// Directory offered as the parent when creating a new project
    #[serde(default)]
    pub default_parent_dir: Option<PathBuf>,
}

impl AppConfigData {
    /// Move `path` to the front of the recent list and remember it as last opened.
    pub fn remember_project(&mut self, path: &Path) {
        // Remove if already in list (to move it to front)
        self.recent_projects.retain(|p| p != path);
        self.recent_projects.insert(0, path.to_path_buf());
        self.recent_projects.truncate(MAX_RECENT_PROJECTS);
        self.last_project_path = Some(path.to_path_buf());
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the settings file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::settings_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to record a project in the recent list
#[derive(Message)]
pub struct AddRecentProjectRequest {
    pub path: PathBuf,
}

/// Message to remember the parent directory offered for new projects
#[derive(Message)]
pub struct SetDefaultParentDirRequest {
    pub path: PathBuf,
}

/// Result of loading config from disk
pub struct LoadConfigResult {
    pub data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    pub reset_reason: Option<String>,
}

/// Load settings from `path`, falling back to defaults on any error
pub fn load_config(path: &Path) -> LoadConfigResult {
    let (data, reset_reason) = if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult { data, reset_reason }
}

/// Save settings to disk
pub fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;
    config.dirty = false;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// Startup system to drop recent projects whose directory has gone away
fn prune_missing_projects(mut config: ResMut<AppConfig>) {
    let before = config.data.recent_projects.len();
    config.data.recent_projects.retain(|p| p.is_dir());
    let removed = before - config.data.recent_projects.len();
    if removed > 0 {
        info!("Dropped {} missing projects from the recent list", removed);
        config.dirty = true;
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to add a project to the recent list
fn add_recent_project_system(
    mut events: MessageReader<AddRecentProjectRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.remember_project(&event.path);
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

/// System to set the default parent directory
fn set_default_parent_dir_system(
    mut events: MessageReader<SetDefaultParentDirRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.default_parent_dir = Some(event.path.clone());
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        info!("Set default project directory to {:?}", event.path);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<AddRecentProjectRequest>()
            .add_message::<SetDefaultParentDirRequest>()
            .add_systems(
                Startup,
                (load_config_system, prune_missing_projects).chain(),
            )
            .add_systems(
                Update,
                (
                    add_recent_project_system.run_if(on_message::<AddRecentProjectRequest>),
                    set_default_parent_dir_system.run_if(on_message::<SetDefaultParentDirRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}

//! Where the editor keeps its own files: `settings.json` and `logs/`.
//!
//! Debug builds and `cargo run` keep both in the working directory; installed
//! builds use the platform config and data directories from `dirs`.

use std::path::PathBuf;

const APP_DIR_NAME: &str = "tilemap_maker";

pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

fn app_dir(platform_dir: Option<PathBuf>) -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }
    platform_dir.map(|p| p.join(APP_DIR_NAME))
}

/// Directory holding `settings.json`.
pub fn config_dir() -> Option<PathBuf> {
    app_dir(dirs::config_dir())
}

/// Directory holding `logs/`.
pub fn data_dir() -> Option<PathBuf> {
    app_dir(dirs::data_dir())
}

/// Application settings file; never named like a project's `config.json`.
pub fn settings_file() -> PathBuf {
    config_dir()
        .map(|p| p.join("settings.json"))
        .unwrap_or_else(|| PathBuf::from("settings.json"))
}

pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Create the settings and log directories if they are missing.
pub fn ensure_directories() -> std::io::Result<()> {
    if is_dev_mode() {
        return Ok(());
    }
    if let Some(config) = config_dir() {
        std::fs::create_dir_all(config)?;
    }
    std::fs::create_dir_all(logs_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_file_is_not_project_file() {
        let path = settings_file();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("settings.json")
        );
        assert_ne!(
            path.file_name().and_then(|n| n.to_str()),
            Some(crate::constants::PROJECT_FILE_NAME)
        );
    }

    #[test]
    fn test_dev_mode_returns_local_paths() {
        assert!(is_dev_mode());
        assert_eq!(config_dir(), Some(PathBuf::from(".")));
        assert_eq!(data_dir(), Some(PathBuf::from(".")));
        assert_eq!(logs_dir(), PathBuf::from("./logs"));
        assert!(ensure_directories().is_ok());
    }
}

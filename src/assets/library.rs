use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task};
use futures_lite::future;
use std::path::{Path, PathBuf};

use crate::constants::IMAGE_EXTENSIONS;
use crate::project::{AssetRef, Project};

use super::ScanAssetsRequest;

/// Tile images available in the open project's directory
#[derive(Resource, Default)]
pub struct AssetBrowser {
    /// Directory the assets were scanned from
    pub root: Option<PathBuf>,
    pub assets: Vec<AssetRef>,
    pub is_scanning: bool,
    pub error: Option<String>,
}

impl AssetBrowser {
    /// Look up an asset by its file name
    pub fn find(&self, file_name: &str) -> Option<&AssetRef> {
        self.assets.iter().find(|a| a.file_name() == file_name)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct ScanResult {
    pub root: PathBuf,
    pub files: Result<Vec<PathBuf>, String>,
}

#[derive(Component)]
pub struct ScanAssetsTask(pub Task<ScanResult>);

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// All image files under `root`, recursively, sorted by path.
pub fn list_image_files(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_image_files(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_image_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_image_files(&path, files)?;
        } else if is_image_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

/// Request a rescan whenever a project is opened, clear the list when it is closed
pub fn track_project_for_scan(
    project: Option<Res<Project>>,
    mut browser: ResMut<AssetBrowser>,
    mut scan_events: MessageWriter<ScanAssetsRequest>,
) {
    match project {
        Some(project) if project.is_added() => {
            scan_events.write(ScanAssetsRequest);
        }
        None if browser.root.is_some() => browser.clear(),
        _ => {}
    }
}

/// Starts a background directory scan of the open project
pub fn start_asset_scan(
    mut commands: Commands,
    mut events: MessageReader<ScanAssetsRequest>,
    project: Option<Res<Project>>,
    mut browser: ResMut<AssetBrowser>,
) {
    // Several requests in one frame need only one scan
    if events.read().count() == 0 {
        return;
    }

    let Some(root) = project.and_then(|p| p.root_path.clone()) else {
        warn!("Asset scan requested with no project directory");
        return;
    };

    browser.is_scanning = true;
    let task_pool = IoTaskPool::get();
    let task = task_pool.spawn(async move {
        let files = list_image_files(&root).map_err(|e| e.to_string());
        ScanResult { root, files }
    });

    commands.spawn(ScanAssetsTask(task));
}

/// Polls scan tasks and publishes finished results
pub fn poll_scan_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut ScanAssetsTask)>,
    project: Option<Res<Project>>,
    mut browser: ResMut<AssetBrowser>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };
        commands.entity(entity).despawn();
        browser.is_scanning = false;

        // A scan for a project that has since been closed or switched is stale
        let current_root = project.as_ref().and_then(|p| p.root_path.as_ref());
        if current_root != Some(&result.root) {
            debug!("Discarding stale asset scan of {:?}", result.root);
            continue;
        }

        match result.files {
            Ok(files) => {
                info!("Found {} tile images in {:?}", files.len(), result.root);
                browser.assets = files.into_iter().map(AssetRef::from).collect();
                browser.error = None;
            }
            Err(e) => {
                error!("Failed to scan {:?}: {}", result.root, e);
                browser.assets.clear();
                browser.error = Some(e);
            }
        }
        browser.root = Some(result.root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("grass.png")));
        assert!(is_image_file(Path::new("dir/Wall.JPG")));
        assert!(is_image_file(Path::new("a.jpeg")));
        assert!(is_image_file(Path::new("b.bmp")));
        assert!(!is_image_file(Path::new("config.json")));
        assert!(!is_image_file(Path::new("sprite.webp")));
        assert!(!is_image_file(Path::new("png")));
    }

    #[test]
    fn test_list_image_files_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("walls/stone")).unwrap();
        for file in ["water.png", "grass.PNG", "config.json", "walls/brick.bmp", "walls/stone/dark.jpg"] {
            std::fs::write(root.join(file), b"").unwrap();
        }

        let files = list_image_files(root).unwrap();

        assert_eq!(
            files,
            vec![
                root.join("grass.PNG"),
                root.join("walls/brick.bmp"),
                root.join("walls/stone/dark.jpg"),
                root.join("water.png"),
            ]
        );
    }

    #[test]
    fn test_list_image_files_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_image_files(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_browser_find() {
        let browser = AssetBrowser {
            root: Some(PathBuf::from("/maps/town")),
            assets: vec![
                AssetRef::new("/maps/town/grass.png"),
                AssetRef::new("/maps/town/water.png"),
            ],
            ..default()
        };
        assert_eq!(
            browser.find("water.png"),
            Some(&AssetRef::new("/maps/town/water.png"))
        );
        assert!(browser.find("lava.png").is_none());
    }
}

use std::path::{Path, PathBuf};

/// Reference to a tile image.
///
/// Holds the resolved path; two references are equal when they resolve to the
/// same path. On disk the path relative to the project root is written, with
/// `/` separators, so images in subdirectories of the root survive a reload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetRef {
    path: PathBuf,
}

impl AssetRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve a stored name (`"wall.png"`, `"walls/brick.png"`) against a project root.
    pub fn resolve(root: &Path, stored_name: &str) -> Self {
        Self::new(root.join(stored_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last component of the path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// The name written to project files and the export legend.
    ///
    /// Relative to `root` when the image lies under it, otherwise the bare
    /// file name.
    pub fn stored_name(&self, root: Option<&Path>) -> String {
        let Some(relative) = root.and_then(|root| self.path.strip_prefix(root).ok()) else {
            return self.file_name();
        };
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        if parts.is_empty() {
            return self.file_name();
        }
        parts.join("/")
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl From<PathBuf> for AssetRef {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_root() {
        let asset = AssetRef::resolve(Path::new("/maps/dungeon"), "wall.png");
        assert_eq!(asset.path(), Path::new("/maps/dungeon/wall.png"));
        assert_eq!(asset.file_name(), "wall.png");
    }

    #[test]
    fn test_equality_is_by_resolved_path() {
        let a = AssetRef::resolve(Path::new("/maps/a"), "grass.png");
        let b = AssetRef::new("/maps/a/grass.png");
        let c = AssetRef::resolve(Path::new("/maps/b"), "grass.png");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.file_name(), c.file_name());
    }

    #[test]
    fn test_stored_name_is_relative_to_root() {
        let root = Path::new("/maps/town");
        let top = AssetRef::resolve(root, "grass.png");
        let nested = AssetRef::new("/maps/town/walls/stone/brick.png");
        let outside = AssetRef::new("/elsewhere/lava.png");

        assert_eq!(top.stored_name(Some(root)), "grass.png");
        assert_eq!(nested.stored_name(Some(root)), "walls/stone/brick.png");
        assert_eq!(outside.stored_name(Some(root)), "lava.png");
        assert_eq!(nested.stored_name(None), "brick.png");
        assert_eq!(AssetRef::resolve(root, &nested.stored_name(Some(root))), nested);
    }

    #[test]
    fn test_exists_requires_a_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stone.png"), b"png").unwrap();

        assert!(AssetRef::resolve(dir.path(), "stone.png").exists());
        assert!(!AssetRef::resolve(dir.path(), "missing.png").exists());
        assert!(!AssetRef::new(dir.path()).exists());
    }
}

//! Asset lookup.
//!
//! The renderer never touches the filesystem directly; it asks an
//! [`AssetStore`] whether a referenced file exists and how to link to it.

use std::path::{Path, PathBuf};

use folio_core::validation::is_unsafe_asset_name;

use crate::escape::encode_path;

/// Read-only view of the asset directory.
pub trait AssetStore {
    /// Returns `true` if `name` refers to an existing asset.
    fn exists(&self, name: &str) -> bool;

    /// URL under which the asset is served.
    fn url(&self, name: &str) -> String;

    /// Filesystem location where `name` is expected.
    fn expected_path(&self, name: &str) -> PathBuf;
}

/// Assets stored in a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
    url_prefix: String,
}

impl DirAssets {
    /// Creates a store rooted at `root`, served under `url_prefix`
    /// (e.g. `"/assets"` for the server, `"assets"` for a static export).
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, url_prefix: impl Into<String>) -> Self {
        let url_prefix = url_prefix.into().trim_end_matches('/').to_string();
        Self {
            root: root.into(),
            url_prefix,
        }
    }

    /// The asset directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `name` to a file inside the asset directory.
    ///
    /// Returns `None` for empty names and names that would escape the
    /// directory.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || is_unsafe_asset_name(name) {
            return None;
        }
        Some(self.root.join(name))
    }
}

impl AssetStore for DirAssets {
    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|path| path.is_file())
    }

    fn url(&self, name: &str) -> String {
        format!("{}/{}", self.url_prefix, encode_path(name))
    }

    fn expected_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_for_present_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.png"), b"png").unwrap();
        let store = DirAssets::new(dir.path(), "/assets");
        assert!(store.exists("a.png"));
        assert!(!store.exists("b.png"));
        assert!(!store.exists(""));
    }

    #[test]
    fn test_directories_are_not_assets() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("shots")).unwrap();
        let store = DirAssets::new(dir.path(), "/assets");
        assert!(!store.exists("shots"));
    }

    #[test]
    fn test_traversal_never_exists() {
        let dir = TempDir::new().unwrap();
        let inner = dir.path().join("assets");
        std::fs::create_dir(&inner).unwrap();
        std::fs::write(dir.path().join("secret.txt"), b"x").unwrap();
        let store = DirAssets::new(&inner, "/assets");
        assert!(!store.exists("../secret.txt"));
        assert!(store.resolve("../secret.txt").is_none());
    }

    #[test]
    fn test_url_prefix_and_encoding() {
        let store = DirAssets::new("assets", "/assets/");
        assert_eq!(store.url("my shot.png"), "/assets/my%20shot.png");
        let relative = DirAssets::new("assets", "assets");
        assert_eq!(relative.url("a.png"), "assets/a.png");
    }
}

//! Shared test helpers.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::assets::AssetStore;

/// In-memory asset store holding a fixed set of filenames.
pub struct FakeAssets(pub HashSet<&'static str>);

impl FakeAssets {
    pub fn with(names: &[&'static str]) -> Self {
        Self(names.iter().copied().collect())
    }
}

impl AssetStore for FakeAssets {
    fn exists(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    fn url(&self, name: &str) -> String {
        format!("/assets/{name}")
    }

    fn expected_path(&self, name: &str) -> PathBuf {
        PathBuf::from("assets").join(name)
    }
}

//! Render-time error types.

use std::path::PathBuf;
use thiserror::Error;

/// A record references an asset that does not exist.
///
/// Never fatal: the card renders a placeholder and the miss is reported as
/// a notice on the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing image '{file}' for \"{title}\" (expected at {})", expected.display())]
pub struct AssetMissing {
    /// Title of the record that referenced the asset.
    pub title: String,
    /// Filename as written in the record.
    pub file: String,
    /// Where the asset was looked for.
    pub expected: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_missing_display() {
        let err = AssetMissing {
            title: "Dashboard".to_string(),
            file: "dash.png".to_string(),
            expected: PathBuf::from("assets/dash.png"),
        };
        assert_eq!(
            err.to_string(),
            "missing image 'dash.png' for \"Dashboard\" (expected at assets/dash.png)"
        );
    }
}

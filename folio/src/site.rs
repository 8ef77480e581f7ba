//! Site sources and per-request loading.
//!
//! Every page render starts here: settings, records and text are read
//! fresh from disk and any failure is turned into a [`Notice`] so the page
//! still renders.

use std::path::{Path, PathBuf};

use folio_core::validation::is_unsafe_asset_name;
use folio_core::{ConfigError, ConfigLoader, ExperienceRecord, LoadResult, ProjectRecord, SiteSettings};
use folio_render::{DirAssets, Notice};

/// Resolved locations of a site's files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSources {
    /// Site root.
    pub root: PathBuf,
    /// `projects.json`.
    pub projects: PathBuf,
    /// Asset directory.
    pub assets: PathBuf,
    /// `experiences.json`.
    pub experiences: PathBuf,
    /// `site.yaml`.
    pub site: PathBuf,
    /// Column override from the command line.
    pub columns: Option<usize>,
}

impl SiteSources {
    /// Sources with default file names under `root`.
    #[must_use]
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            projects: root.join("projects.json"),
            assets: root.join("assets"),
            experiences: root.join("experiences.json"),
            site: root.join("site.yaml"),
            root,
            columns: None,
        }
    }

    /// Asset store over the asset directory, linked under `url_prefix`.
    #[must_use]
    pub fn assets(&self, url_prefix: &str) -> DirAssets {
        DirAssets::new(&self.assets, url_prefix)
    }

    /// Loads site settings, falling back to defaults on error.
    pub fn settings(&self, loader: &ConfigLoader) -> (SiteSettings, Vec<Notice>) {
        let (mut settings, notices) = match loader.load_site(&self.site) {
            Ok(settings) => (settings, Vec::new()),
            Err(e) => {
                tracing::warn!(path = %self.site.display(), error = %e, "site settings unusable, using defaults");
                (SiteSettings::default(), vec![Notice::from(&e)])
            }
        };
        if let Some(columns) = self.columns {
            settings.columns = columns;
        }
        (settings, notices)
    }

    /// Loads projects; an unreadable file yields no records and an error
    /// notice.
    pub fn projects(&self, loader: &ConfigLoader) -> (Vec<ProjectRecord>, Vec<Notice>) {
        records_or_notice(&self.projects, loader.load_projects(&self.projects))
    }

    /// Loads experiences; a missing file is simply empty.
    pub fn experiences(&self, loader: &ConfigLoader) -> (Vec<ExperienceRecord>, Vec<Notice>) {
        records_or_notice(&self.experiences, loader.load_experiences(&self.experiences))
    }

    /// Reads the reflections text configured in `settings`.
    pub fn reflections(&self, settings: &SiteSettings) -> (Option<String>, Vec<Notice>) {
        let Some(file) = settings.reflections.as_deref() else {
            return (None, Vec::new());
        };
        if is_unsafe_asset_name(file) {
            return (
                None,
                vec![Notice::Error(format!(
                    "Reflections path `{file}` must stay inside the site root."
                ))],
            );
        }
        let path = self.root.join(file);
        match std::fs::read_to_string(&path) {
            Ok(text) => (Some(text), Vec::new()),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "reflections unreadable");
                (
                    None,
                    vec![Notice::Error(format!(
                        "Reflections file not found at: {}",
                        path.display()
                    ))],
                )
            }
        }
    }

    /// Path of the résumé PDF, if configured and safe.
    #[must_use]
    pub fn resume_path(&self, settings: &SiteSettings) -> Option<PathBuf> {
        settings
            .resume
            .as_deref()
            .filter(|file| !is_unsafe_asset_name(file))
            .map(|file| self.assets.join(file))
    }
}

/// Converts a load result into records plus user-visible notices.
///
/// Skipped entries become warnings on the page; content warnings are only
/// logged.
fn records_or_notice<T>(
    path: &Path,
    result: Result<LoadResult<T>, ConfigError>,
) -> (Vec<T>, Vec<Notice>) {
    match result {
        Ok(loaded) => {
            for warning in &loaded.warnings {
                tracing::debug!(path = %path.display(), "{warning}");
            }
            let notices = loaded
                .errors
                .iter()
                .map(|issue| {
                    tracing::warn!(path = %path.display(), "{issue}");
                    Notice::Warning(format!(
                        "Skipped entry in {}: {} at {}",
                        file_name(path),
                        issue.message,
                        issue.path
                    ))
                })
                .collect();
            (loaded.records, notices)
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to load records");
            (Vec::new(), vec![Notice::from(&e)])
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_projects_is_error_notice() {
        let dir = TempDir::new().unwrap();
        let sources = SiteSources::under(dir.path());
        let (records, notices) = sources.projects(&ConfigLoader::with_defaults());
        assert!(records.is_empty());
        assert_eq!(notices.len(), 1);
        assert!(matches!(&notices[0], Notice::Error(msg) if msg.contains("projects.json")));
    }

    #[test]
    fn test_skipped_entries_become_warnings() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("projects.json"),
            r#"[{"title":"A"},{"blurb":"untitled"}]"#,
        )
        .unwrap();
        let sources = SiteSources::under(dir.path());
        let (records, notices) = sources.projects(&ConfigLoader::with_defaults());
        assert_eq!(records.len(), 1);
        assert!(
            matches!(&notices[..], [Notice::Warning(msg)] if msg.contains("projects.json") && msg.contains("[1].title"))
        );
    }

    #[test]
    fn test_column_override() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("site.yaml"), "columns: 4\n").unwrap();
        let mut sources = SiteSources::under(dir.path());
        let loader = ConfigLoader::with_defaults();
        assert_eq!(sources.settings(&loader).0.columns, 4);
        sources.columns = Some(2);
        assert_eq!(sources.settings(&loader).0.columns, 2);
    }

    #[test]
    fn test_broken_site_yaml_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("site.yaml"), "columns: [\n").unwrap();
        let sources = SiteSources::under(dir.path());
        let (settings, notices) = sources.settings(&ConfigLoader::with_defaults());
        assert_eq!(settings, SiteSettings::default());
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn test_reflections_read_and_missing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("essay.txt"), "One.\n\nTwo.").unwrap();
        let sources = SiteSources::under(dir.path());

        let settings = SiteSettings {
            reflections: Some("essay.txt".to_string()),
            ..SiteSettings::default()
        };
        let (text, notices) = sources.reflections(&settings);
        assert_eq!(text.as_deref(), Some("One.\n\nTwo."));
        assert!(notices.is_empty());

        let settings = SiteSettings {
            reflections: Some("nope.txt".to_string()),
            ..SiteSettings::default()
        };
        let (text, notices) = sources.reflections(&settings);
        assert!(text.is_none());
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn test_resume_path_rejects_traversal() {
        let sources = SiteSources::under("/srv");
        let settings = SiteSettings {
            resume: Some("../etc/cv.pdf".to_string()),
            ..SiteSettings::default()
        };
        assert!(sources.resume_path(&settings).is_none());

        let settings = SiteSettings {
            resume: Some("cv.pdf".to_string()),
            ..SiteSettings::default()
        };
        assert_eq!(
            sources.resume_path(&settings),
            Some(PathBuf::from("/srv/assets/cv.pdf"))
        );
    }
}

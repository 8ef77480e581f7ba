//! Static export.
//!
//! Renders every page to an HTML file and copies the assets those pages
//! reference, so the output directory can be served by any file server.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use folio_core::ConfigLoader;
use folio_render::page::{ExperienceLayout, Layout};
use folio_render::{AssetStore, RenderedPage, Routes, ShowcaseFilter};
use tracing::{debug, info, warn};

use crate::error::FolioError;
use crate::pages::SiteRenderer;
use crate::site::SiteSources;

/// Asset directory name inside the output, also the relative URL prefix.
pub const ASSET_DIR: &str = "assets";

/// What a build wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// HTML files written, relative to the output directory.
    pub pages: Vec<String>,
    /// Asset files copied.
    pub assets: Vec<String>,
    /// Referenced assets that did not exist.
    pub missing_assets: usize,
    /// Project cards on the showcase page.
    pub projects: usize,
}

/// Renders the site into `out_dir`.
///
/// # Errors
///
/// Returns [`FolioError::Config`] if `projects.json` cannot be loaded and
/// [`FolioError::Io`] if the output cannot be written.
pub fn build_site(
    sources: &SiteSources,
    loader: &ConfigLoader,
    out_dir: &Path,
) -> Result<BuildSummary, FolioError> {
    // Fail the build on a broken project list instead of exporting an
    // empty gallery.
    loader.load_projects(&sources.projects)?;

    let (settings, _) = sources.settings(loader);
    let source_assets = sources.assets("");
    let resume_url = settings
        .resume
        .as_deref()
        .map(|file| format!("{ASSET_DIR}/{}", folio_render::escape::encode_path(file)))
        .unwrap_or_default();

    let renderer = SiteRenderer::new(
        sources.clone(),
        loader.clone(),
        Routes::static_site(resume_url),
        ASSET_DIR,
    );

    std::fs::create_dir_all(out_dir)?;
    let mut summary = BuildSummary::default();

    let showcase = renderer.showcase(&ShowcaseFilter::default(), Layout::Grid);
    summary.projects = showcase.items;
    let pages = [
        ("index.html", showcase),
        ("resume.html", renderer.resume()),
        ("experience.html", renderer.experience(ExperienceLayout::Feature)),
        ("reflections.html", renderer.reflections()),
    ];
    for (name, page) in &pages {
        write_page(out_dir, name, page)?;
        summary.missing_assets += page.missing_assets.len();
        summary.pages.push((*name).to_string());
    }

    let mut referenced = BTreeSet::new();
    let (projects, _) = sources.projects(loader);
    referenced.extend(projects.iter().map(|p| p.image.clone()));
    let (experiences, _) = sources.experiences(loader);
    referenced.extend(experiences.iter().map(|e| e.image.clone()));
    referenced.extend(settings.resume.iter().cloned());
    referenced.extend(settings.signature.iter().cloned());

    let asset_out = out_dir.join(ASSET_DIR);
    for name in referenced.iter().filter(|n| source_assets.exists(n)) {
        let Some(from) = source_assets.resolve(name) else {
            continue;
        };
        let to = asset_out.join(name);
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(&from, &to)?;
        debug!(asset = %name, "asset copied");
        summary.assets.push(name.clone());
    }

    if summary.missing_assets > 0 {
        warn!(count = summary.missing_assets, "referenced assets are missing");
    }
    info!(
        out = %out_dir.display(),
        pages = summary.pages.len(),
        assets = summary.assets.len(),
        "static site written"
    );
    Ok(summary)
}

fn write_page(out_dir: &Path, name: &str, page: &RenderedPage) -> Result<PathBuf, FolioError> {
    let path = out_dir.join(name);
    std::fs::write(&path, &page.html)?;
    debug!(path = %path.display(), items = page.items, "page written");
    Ok(path)
}

//! Load-and-render for each page.
//!
//! Shared by the HTTP server and the static export; the only difference
//! between the two is the [`Routes`] table and the asset URL prefix.

use folio_core::ConfigLoader;
use folio_render::page::{
    self, ExperienceLayout, ExperiencePage, Layout, ReflectionsPage, ShowcasePage,
};
use folio_render::{DirAssets, PageContext, RenderedPage, Routes, ShowcaseFilter};

use crate::site::SiteSources;

/// Everything needed to render pages for one site.
#[derive(Debug, Clone)]
pub struct SiteRenderer {
    sources: SiteSources,
    loader: ConfigLoader,
    routes: Routes,
    assets: DirAssets,
}

impl SiteRenderer {
    /// Creates a renderer linking assets under `asset_prefix`.
    #[must_use]
    pub fn new(sources: SiteSources, loader: ConfigLoader, routes: Routes, asset_prefix: &str) -> Self {
        let assets = sources.assets(asset_prefix);
        Self {
            sources,
            loader,
            routes,
            assets,
        }
    }

    /// The site's source paths.
    #[must_use]
    pub const fn sources(&self) -> &SiteSources {
        &self.sources
    }

    /// The loader used for every page.
    #[must_use]
    pub const fn loader(&self) -> &ConfigLoader {
        &self.loader
    }

    /// Renders the showcase page.
    #[must_use]
    pub fn showcase(&self, filter: &ShowcaseFilter, layout: Layout) -> RenderedPage {
        let (site, mut notices) = self.sources.settings(&self.loader);
        let (projects, load_notices) = self.sources.projects(&self.loader);
        notices.extend(load_notices);

        let ctx = self.context(&site);
        page::render_showcase(
            &ctx,
            ShowcasePage {
                projects: &projects,
                filter,
                layout,
                notices,
            },
        )
    }

    /// Renders the résumé page.
    #[must_use]
    pub fn resume(&self) -> RenderedPage {
        let (site, notices) = self.sources.settings(&self.loader);
        let ctx = self.context(&site);
        page::render_resume(&ctx, notices)
    }

    /// Renders the experience page.
    #[must_use]
    pub fn experience(&self, layout: ExperienceLayout) -> RenderedPage {
        let (site, mut notices) = self.sources.settings(&self.loader);
        let (experiences, load_notices) = self.sources.experiences(&self.loader);
        notices.extend(load_notices);

        let ctx = self.context(&site);
        page::render_experience(
            &ctx,
            ExperiencePage {
                experiences: &experiences,
                layout,
                notices,
            },
        )
    }

    /// Renders the reflections page.
    #[must_use]
    pub fn reflections(&self) -> RenderedPage {
        let (site, mut notices) = self.sources.settings(&self.loader);
        let (text, text_notices) = self.sources.reflections(&site);
        notices.extend(text_notices);

        let ctx = self.context(&site);
        page::render_reflections(
            &ctx,
            ReflectionsPage {
                text: text.as_deref(),
                notices,
            },
        )
    }

    fn context<'a>(&'a self, site: &'a folio_core::SiteSettings) -> PageContext<'a> {
        PageContext {
            site,
            routes: &self.routes,
            assets: &self.assets,
        }
    }
}

//! Full-page HTML generation.
//!
//! Every page shares the same shell: `<head>` with the stylesheet, the tab
//! navigation and a notice area. The individual pages only produce the
//! body content.

pub mod experience;
pub mod reflections;
pub mod resume;
pub mod showcase;

use std::fmt::Write as _;

use folio_core::{ConfigError, SiteSettings};

use crate::assets::AssetStore;
use crate::error::AssetMissing;
use crate::escape::{escape_html, escape_url};

pub use experience::{ExperienceLayout, ExperiencePage, render_experience};
pub use reflections::{ReflectionsPage, render_reflections};
pub use resume::render_resume;
pub use showcase::{Layout, ShowcasePage, render_showcase};

const STYLE: &str = include_str!("style.css");

// ============================================================================
// Routes
// ============================================================================

/// Link targets for the pages of a site.
///
/// The server and a static export link pages differently; the renderer only
/// ever goes through this table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    /// Showcase page.
    pub showcase: String,
    /// Résumé page.
    pub resume: String,
    /// Résumé PDF download.
    pub resume_pdf: String,
    /// Experience page.
    pub experience: String,
    /// Reflections page.
    pub reflections: String,
    /// Whether pages can react to query parameters (filters, layouts).
    pub dynamic: bool,
}

impl Routes {
    /// Routes served by the HTTP server.
    #[must_use]
    pub fn server() -> Self {
        Self {
            showcase: "/".to_string(),
            resume: "/resume".to_string(),
            resume_pdf: "/resume.pdf".to_string(),
            experience: "/experience".to_string(),
            reflections: "/reflections".to_string(),
            dynamic: true,
        }
    }

    /// Relative file links for a static export.
    ///
    /// `resume_pdf` is the asset URL of the PDF, filled in by the caller.
    #[must_use]
    pub fn static_site(resume_pdf: impl Into<String>) -> Self {
        Self {
            showcase: "index.html".to_string(),
            resume: "resume.html".to_string(),
            resume_pdf: resume_pdf.into(),
            experience: "experience.html".to_string(),
            reflections: "reflections.html".to_string(),
            dynamic: false,
        }
    }
}

/// The navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Project gallery.
    Showcase,
    /// Résumé viewer.
    Resume,
    /// Experiential learning.
    Experience,
    /// Reflections essay.
    Reflections,
}

impl Tab {
    const ALL: [Self; 4] = [
        Self::Showcase,
        Self::Resume,
        Self::Experience,
        Self::Reflections,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Showcase => "📁 Portfolio Showcase",
            Self::Resume => "📄 Electronic Résumé",
            Self::Experience => "📰 Experiential Learning",
            Self::Reflections => "🖊️ Reflections",
        }
    }

    fn href(self, routes: &Routes) -> &str {
        match self {
            Self::Showcase => &routes.showcase,
            Self::Resume => &routes.resume,
            Self::Experience => &routes.experience,
            Self::Reflections => &routes.reflections,
        }
    }
}

// ============================================================================
// Notices
// ============================================================================

/// A user-visible message in a page's notice area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Something is broken; content may be missing.
    Error(String),
    /// Content rendered in degraded form.
    Warning(String),
    /// Guidance for the site owner.
    Info(String),
}

impl Notice {
    const fn class(&self) -> &'static str {
        match self {
            Self::Error(_) => "notice error",
            Self::Warning(_) => "notice warning",
            Self::Info(_) => "notice info",
        }
    }

    /// The message without its severity.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Error(t) | Self::Warning(t) | Self::Info(t) => t,
        }
    }
}

impl From<&ConfigError> for Notice {
    fn from(err: &ConfigError) -> Self {
        Self::Error(err.user_message())
    }
}

impl From<&AssetMissing> for Notice {
    fn from(miss: &AssetMissing) -> Self {
        Self::Warning(miss.to_string())
    }
}

// ============================================================================
// Page Shell
// ============================================================================

/// Inputs shared by every page.
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    /// Presentation settings.
    pub site: &'a SiteSettings,
    /// Link table.
    pub routes: &'a Routes,
    /// Asset lookup.
    pub assets: &'a dyn AssetStore,
}

/// Output of a page render.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Complete HTML document.
    pub html: String,
    /// Number of cards or entries rendered.
    pub items: usize,
    /// Assets that were referenced but not found.
    pub missing_assets: Vec<AssetMissing>,
}

/// Wraps `body` in the shared document shell.
#[must_use]
pub fn layout(ctx: &PageContext<'_>, active: Tab, notices: &[Notice], body: &str) -> String {
    let mut html = String::with_capacity(body.len() + STYLE.len() + 1024);
    let title = escape_html(&ctx.site.title);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{title}</title>");
    let _ = writeln!(html, "<style>\n{STYLE}</style>");
    html.push_str("</head>\n<body>\n<nav class=\"tabs\">\n");
    for tab in Tab::ALL {
        let class = if tab == active { "tab active" } else { "tab" };
        let _ = writeln!(
            html,
            "  <a class=\"{class}\" href=\"{}\">{}</a>",
            escape_url(tab.href(ctx.routes)),
            tab.label()
        );
    }
    html.push_str("</nav>\n<main>\n");

    if !notices.is_empty() {
        html.push_str("<div class=\"notices\">\n");
        for notice in notices {
            let _ = writeln!(
                html,
                "  <div class=\"{}\" role=\"status\">{}</div>",
                notice.class(),
                escape_html(notice.text())
            );
        }
        html.push_str("</div>\n");
    }

    html.push_str(body);
    html.push_str("\n</main>\n</body>\n</html>\n");
    html
}

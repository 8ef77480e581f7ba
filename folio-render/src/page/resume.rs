//! Résumé page: inline PDF viewer plus download link.

use std::fmt::Write as _;

use super::{Notice, PageContext, RenderedPage, Tab, layout};
use crate::escape::{escape_html, escape_url};

/// Renders the résumé page.
///
/// A missing or unconfigured PDF adds notices instead of a viewer.
#[must_use]
pub fn render_resume(ctx: &PageContext<'_>, mut notices: Vec<Notice>) -> RenderedPage {
    let mut body = String::from("<h1>Electronic Résumé</h1>\n");
    body.push_str("<p class=\"caption\">View inline, print directly, or download the PDF version.</p>\n");
    let mut items = 0;

    match ctx.site.resume.as_deref() {
        None => notices.push(Notice::Info(
            "No résumé configured. Set `resume` in site.yaml to a PDF in the asset directory."
                .to_string(),
        )),
        Some(file) if !ctx.assets.exists(file) => {
            notices.push(Notice::Error(format!(
                "Résumé file not found at: {}",
                ctx.assets.expected_path(file).display()
            )));
            notices.push(Notice::Info(
                "Place your PDF in the asset directory with that exact filename.".to_string(),
            ));
        }
        Some(file) => {
            items = 1;
            let _ = writeln!(
                body,
                "<p><a class=\"button\" href=\"{}\" download=\"{}\">Download Résumé (PDF)</a></p>",
                escape_url(&ctx.routes.resume_pdf),
                escape_html(file)
            );
            let _ = writeln!(
                body,
                "<iframe class=\"resume-frame\" src=\"{}#toolbar=0&amp;navpanes=0&amp;scrollbar=0&amp;zoom=page-width\" title=\"Résumé\"></iframe>",
                escape_url(&ctx.assets.url(file))
            );
        }
    }

    RenderedPage {
        html: layout(ctx, Tab::Resume, &notices, &body),
        items,
        missing_assets: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Routes;
    use crate::testing::FakeAssets;
    use folio_core::SiteSettings;

    fn render(resume: Option<&str>, present: &[&'static str]) -> RenderedPage {
        let site = SiteSettings {
            resume: resume.map(str::to_string),
            ..SiteSettings::default()
        };
        let routes = Routes::server();
        let assets = FakeAssets::with(present);
        let ctx = PageContext {
            site: &site,
            routes: &routes,
            assets: &assets,
        };
        render_resume(&ctx, Vec::new())
    }

    #[test]
    fn test_viewer_when_pdf_present() {
        let page = render(Some("cv.pdf"), &["cv.pdf"]);
        assert_eq!(page.items, 1);
        assert!(page.html.contains("href=\"/resume.pdf\""));
        assert!(page.html.contains("<iframe class=\"resume-frame\" src=\"/assets/cv.pdf#toolbar=0"));
        assert!(!page.html.contains("notice error"));
    }

    #[test]
    fn test_missing_pdf_is_error_notice() {
        let page = render(Some("cv.pdf"), &[]);
        assert_eq!(page.items, 0);
        assert!(page.html.contains("Résumé file not found at: assets/cv.pdf"));
        assert!(!page.html.contains("<iframe"));
    }

    #[test]
    fn test_unconfigured_is_info_notice() {
        let page = render(None, &[]);
        assert!(page.html.contains("notice info"));
        assert!(!page.html.contains("notice error"));
    }
}

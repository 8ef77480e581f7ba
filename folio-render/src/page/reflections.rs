//! Reflections essay page.

use std::fmt::Write as _;

use super::{Notice, PageContext, RenderedPage, Tab, layout};
use crate::escape::{escape_html, escape_url, paragraphs};

/// Inputs of the reflections page.
#[derive(Debug, Clone)]
pub struct ReflectionsPage<'a> {
    /// Essay text, if a reflections file was configured and read.
    pub text: Option<&'a str>,
    /// Notices raised while reading the text.
    pub notices: Vec<Notice>,
}

/// Renders the reflections page: heading from the site settings, essay
/// paragraphs, then signature.
#[must_use]
pub fn render_reflections(ctx: &PageContext<'_>, page: ReflectionsPage<'_>) -> RenderedPage {
    let mut notices = page.notices;
    let mut body = String::new();
    let _ = writeln!(body, "<h1><em>{}</em></h1>", escape_html(&ctx.site.reflections_title));

    let paras = page.text.map(paragraphs).unwrap_or_default();
    if paras.is_empty() && notices.is_empty() {
        notices.push(Notice::Info(
            "No reflections yet. Set `reflections` in site.yaml to a plain text file.".to_string(),
        ));
    }

    body.push_str("<div class=\"essay\">\n");
    for para in &paras {
        let _ = writeln!(body, "<p>{}</p>", escape_html(para));
    }
    body.push_str("</div>\n");

    let signature = ctx
        .site
        .signature
        .as_deref()
        .filter(|file| ctx.assets.exists(file));
    if ctx.site.author.is_some() || signature.is_some() {
        body.push_str("<div class=\"signature\">\n");
        if let Some(file) = signature {
            let _ = writeln!(
                body,
                "<img src=\"{}\" alt=\"Signature\">",
                escape_url(&ctx.assets.url(file))
            );
        }
        if let Some(author) = &ctx.site.author {
            let _ = writeln!(body, "<em>{}</em>", escape_html(author));
        }
        body.push_str("</div>");
    }

    RenderedPage {
        html: layout(ctx, Tab::Reflections, &notices, &body),
        items: paras.len(),
        missing_assets: Vec::new(),
    }
}

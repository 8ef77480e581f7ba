//! Experiential learning page.
//!
//! Two layouts: `feature` shows each entry full width with its facts and
//! body; `cards` is a two-column grid with the body folded away.

use std::fmt::Write as _;

use folio_core::ExperienceRecord;

use super::{Notice, PageContext, RenderedPage, Tab, layout};
use crate::error::AssetMissing;
use crate::escape::{escape_html, escape_url, paragraphs};

/// Columns used by the `cards` layout.
const CARD_COLUMNS: usize = 2;

/// Arrangement of the experience page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExperienceLayout {
    /// Full-width entries.
    #[default]
    Feature,
    /// Two-column cards.
    Cards,
}

impl ExperienceLayout {
    /// Parses the `layout` query value; anything but `cards` is `Feature`.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("cards") => Self::Cards,
            _ => Self::Feature,
        }
    }
}

/// Inputs of the experience page.
#[derive(Debug, Clone)]
pub struct ExperiencePage<'a> {
    /// Loaded experiences, in file order.
    pub experiences: &'a [ExperienceRecord],
    /// Arrangement.
    pub layout: ExperienceLayout,
    /// Notices raised while loading.
    pub notices: Vec<Notice>,
}

/// Renders the experience page.
#[must_use]
pub fn render_experience(ctx: &PageContext<'_>, page: ExperiencePage<'_>) -> RenderedPage {
    let mut notices = page.notices;
    let mut missing_assets = Vec::new();

    let mut body = String::from("<h1>Experiential Learning</h1>\n");
    body.push_str(
        "<p class=\"caption\">Volunteer work, student organizations, apprenticeships, \
         field trips, special projects and employment.</p>\n",
    );

    if page.experiences.is_empty() {
        notices.push(Notice::Info(
            "Add items to `experiences.json` and images to the asset directory to populate this page."
                .to_string(),
        ));
        return RenderedPage {
            html: layout(ctx, Tab::Experience, &notices, &body),
            items: 0,
            missing_assets,
        };
    }

    if ctx.routes.dynamic {
        let _ = writeln!(
            body,
            "<p class=\"layout-switch\"><a href=\"{0}?layout=feature\">Feature</a> · <a href=\"{0}?layout=cards\">Cards</a></p>",
            escape_url(&ctx.routes.experience)
        );
    }

    match page.layout {
        ExperienceLayout::Feature => {
            for exp in page.experiences {
                body.push_str(&feature_entry(ctx, exp, &mut missing_assets));
            }
        }
        ExperienceLayout::Cards => {
            let _ = writeln!(
                body,
                "<section class=\"grid\" style=\"--columns: {CARD_COLUMNS}\">"
            );
            for row in page.experiences.chunks(CARD_COLUMNS) {
                body.push_str("<div class=\"row\">\n");
                for exp in row {
                    body.push_str(&card_entry(ctx, exp, &mut missing_assets));
                }
                body.push_str("</div>\n");
            }
            body.push_str("</section>");
        }
    }

    notices.extend(missing_assets.iter().map(Notice::from));

    RenderedPage {
        html: layout(ctx, Tab::Experience, &notices, &body),
        items: page.experiences.len(),
        missing_assets,
    }
}

/// Image for an experience, or nothing if absent.
///
/// Unlike project cards, experiences without an image simply omit it.
fn image(ctx: &PageContext<'_>, exp: &ExperienceRecord, missing: &mut Vec<AssetMissing>) -> String {
    if exp.image.is_empty() {
        return String::new();
    }
    if ctx.assets.exists(&exp.image) {
        format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
            escape_url(&ctx.assets.url(&exp.image)),
            escape_html(&exp.title)
        )
    } else {
        missing.push(AssetMissing {
            title: exp.title.clone(),
            file: exp.image.clone(),
            expected: ctx.assets.expected_path(&exp.image),
        });
        String::new()
    }
}

fn meta_line(exp: &ExperienceRecord) -> String {
    let tags = exp.tags.join(", ");
    [exp.date.as_str(), tags.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}

fn body_html(text: &str) -> String {
    paragraphs(text)
        .iter()
        .map(|p| format!("<p>{}</p>", escape_html(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn feature_entry(
    ctx: &PageContext<'_>,
    exp: &ExperienceRecord,
    missing: &mut Vec<AssetMissing>,
) -> String {
    let mut html = String::from("<article class=\"experience-feature\">\n");
    html.push_str(&image(ctx, exp, missing));
    let _ = writeln!(html, "<h2>{}</h2>", escape_html(&exp.title));

    let meta = meta_line(exp);
    if !meta.is_empty() {
        let _ = writeln!(html, "<p class=\"caption\">{}</p>", escape_html(&meta));
    }
    if !exp.lede.is_empty() {
        let _ = writeln!(html, "<p class=\"lede\">{}</p>", escape_html(&exp.lede));
    }
    if !exp.facts.is_empty() {
        html.push_str("<details open><summary>Quick facts</summary><ul>\n");
        for fact in &exp.facts {
            let _ = writeln!(html, "<li>{}</li>", escape_html(fact));
        }
        html.push_str("</ul></details>\n");
    }
    if !exp.body.is_empty() {
        html.push_str(&body_html(&exp.body));
        html.push('\n');
    }
    html.push_str("</article>\n<hr>\n");
    html
}

fn card_entry(
    ctx: &PageContext<'_>,
    exp: &ExperienceRecord,
    missing: &mut Vec<AssetMissing>,
) -> String {
    let mut html = String::from("<article class=\"experience-card card\">\n");
    html.push_str(&image(ctx, exp, missing));
    let _ = writeln!(html, "<h3>{}</h3>", escape_html(&exp.title));
    if !exp.date.is_empty() {
        let _ = writeln!(html, "<p class=\"caption\">{}</p>", escape_html(&exp.date));
    }
    if !exp.lede.is_empty() {
        let _ = writeln!(html, "<p>{}</p>", escape_html(&exp.lede));
    }
    if !exp.body.is_empty() {
        let _ = writeln!(
            html,
            "<details><summary>Read more</summary>\n{}\n</details>",
            body_html(&exp.body)
        );
    }
    html.push_str("</article>\n");
    html
}

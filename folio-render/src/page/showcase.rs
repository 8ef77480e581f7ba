//! Portfolio showcase page.

use std::fmt::Write as _;

use folio_core::ProjectRecord;

use super::{Notice, PageContext, RenderedPage, Tab, layout};
use crate::card::build_cards;
use crate::escape::{encode_query, escape_html, escape_url};
use crate::filter::{ShowcaseFilter, all_tags};
use crate::grid::Grid;

/// Card arrangement on the showcase page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// `site.columns` cards per row.
    #[default]
    Grid,
    /// One card per row.
    List,
}

impl Layout {
    /// Parses the `layout` query value; anything but `list` is the grid.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("list") => Self::List,
            _ => Self::Grid,
        }
    }
}

/// Inputs of the showcase page.
#[derive(Debug, Clone)]
pub struct ShowcasePage<'a> {
    /// Every loaded project, in file order.
    pub projects: &'a [ProjectRecord],
    /// Visitor filter; applied before rendering.
    pub filter: &'a ShowcaseFilter,
    /// Card arrangement.
    pub layout: Layout,
    /// Notices raised while loading.
    pub notices: Vec<Notice>,
}

/// Renders the showcase page.
#[must_use]
pub fn render_showcase(ctx: &PageContext<'_>, page: ShowcasePage<'_>) -> RenderedPage {
    let selected = page.filter.apply(page.projects);
    let (cards, missing_assets) = build_cards(selected, ctx.assets);

    let columns = match page.layout {
        Layout::Grid => ctx.site.columns,
        Layout::List => 1,
    };
    let grid = Grid::new(cards, columns);

    let mut notices = page.notices;
    notices.extend(missing_assets.iter().map(Notice::from));

    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape_html(&ctx.site.title));
    if !ctx.site.intro.is_empty() {
        let _ = writeln!(body, "<p class=\"intro\">{}</p>", escape_html(&ctx.site.intro));
    }

    body.push_str("<div class=\"showcase\">\n");
    if ctx.routes.dynamic {
        body.push_str(&sidebar(ctx, page.projects, page.filter, page.layout));
    }
    body.push_str("<div class=\"gallery\">\n");
    let _ = writeln!(
        body,
        "<p class=\"count\">Showing <strong>{}</strong> of <strong>{}</strong> projects.</p>",
        grid.len(),
        page.projects.len()
    );
    body.push_str(&grid.to_html());
    body.push_str("\n</div>\n</div>");

    tracing::debug!(
        cards = grid.len(),
        total = page.projects.len(),
        missing_assets = missing_assets.len(),
        "rendered showcase"
    );

    RenderedPage {
        html: layout(ctx, Tab::Showcase, &notices, &body),
        items: grid.len(),
        missing_assets,
    }
}

/// Filter form: title search, tag checkboxes and layout toggle.
fn sidebar(
    ctx: &PageContext<'_>,
    projects: &[ProjectRecord],
    filter: &ShowcaseFilter,
    current: Layout,
) -> String {
    let mut html = String::from("<aside class=\"sidebar\">\n<h2>Explore Projects</h2>\n");
    let _ = writeln!(
        html,
        "<form method=\"get\" action=\"{}\">",
        escape_url(&ctx.routes.showcase)
    );
    let _ = writeln!(
        html,
        "<label>Search title <input type=\"search\" name=\"q\" value=\"{}\"></label>",
        escape_html(filter.query.as_deref().unwrap_or(""))
    );

    let tags = all_tags(projects);
    if !tags.is_empty() {
        html.push_str("<fieldset><legend>Filter by tags</legend>\n");
        for tag in &tags {
            let checked = if filter.tags.contains(tag) { " checked" } else { "" };
            let _ = writeln!(
                html,
                "<label><input type=\"checkbox\" name=\"tag\" value=\"{}\"{checked}> {}</label>",
                escape_html(tag),
                escape_html(tag)
            );
        }
        html.push_str("</fieldset>\n");
    }

    let list_checked = if current == Layout::List { " checked" } else { "" };
    let _ = writeln!(
        html,
        "<label><input type=\"checkbox\" name=\"layout\" value=\"list\"{list_checked}> Single-column list</label>"
    );
    html.push_str("<button type=\"submit\">Apply</button>\n</form>\n");

    if !tags.is_empty() {
        html.push_str("<p class=\"tag-links\">");
        for tag in &tags {
            let _ = write!(
                html,
                "<a class=\"tag\" href=\"{}?tag={}\">{}</a> ",
                escape_url(&ctx.routes.showcase),
                encode_query(tag),
                escape_html(tag)
            );
        }
        html.push_str("</p>\n");
    }

    html.push_str("</aside>\n");
    html
}

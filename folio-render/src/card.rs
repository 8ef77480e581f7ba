//! Project cards.
//!
//! A [`Card`] is the render-ready form of one [`ProjectRecord`]. Building
//! cards resolves assets; turning them into HTML is a pure string step.

use std::fmt::Write as _;

use folio_core::ProjectRecord;

use crate::assets::AssetStore;
use crate::error::AssetMissing;
use crate::escape::{escape_html, escape_url};

/// Image slot of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    /// The referenced asset exists.
    Asset {
        /// URL of the image.
        src: String,
        /// Alt text.
        alt: String,
    },
    /// The referenced asset is absent (or none was given).
    Placeholder {
        /// Filename from the record, possibly empty.
        file: String,
    },
}

/// A clickable link button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    /// Button text.
    pub label: String,
    /// Target URL.
    pub url: String,
}

/// The rendered visual unit for one project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Title.
    pub title: String,
    /// Description text.
    pub blurb: String,
    /// Tag chips, in record order.
    pub tags: Vec<String>,
    /// Image or placeholder.
    pub image: CardImage,
    /// Link buttons; empty when the record has no link.
    pub links: Vec<CardLink>,
}

impl Card {
    /// Builds a card, checking the image against `assets`.
    ///
    /// Returns the card and, if the image was referenced but not found,
    /// the corresponding [`AssetMissing`].
    pub fn from_record(
        record: &ProjectRecord,
        assets: &dyn AssetStore,
    ) -> (Self, Option<AssetMissing>) {
        let (image, missing) = if assets.exists(&record.image) {
            (
                CardImage::Asset {
                    src: assets.url(&record.image),
                    alt: record.title.clone(),
                },
                None,
            )
        } else {
            let missing = (!record.image.is_empty()).then(|| AssetMissing {
                title: record.title.clone(),
                file: record.image.clone(),
                expected: assets.expected_path(&record.image),
            });
            (
                CardImage::Placeholder {
                    file: record.image.clone(),
                },
                missing,
            )
        };

        let links = record
            .link_buttons()
            .into_iter()
            .map(|(label, url)| CardLink {
                label: label.to_string(),
                url: url.to_string(),
            })
            .collect();

        let card = Self {
            title: record.title.clone(),
            blurb: record.blurb.clone(),
            tags: record.tags.clone(),
            image,
            links,
        };
        (card, missing)
    }

    /// Returns `true` if the card shows a placeholder instead of an image.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.image, CardImage::Placeholder { .. })
    }

    /// Renders the card as an `<article class="card">` element.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from("<article class=\"card\">\n");

        match &self.image {
            CardImage::Asset { src, alt } => {
                let _ = writeln!(
                    html,
                    "  <img class=\"card-image\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                    escape_url(src),
                    escape_html(alt)
                );
            }
            CardImage::Placeholder { file } if file.is_empty() => {
                html.push_str("  <div class=\"card-image placeholder\">🖼️ <em>No image</em></div>\n");
            }
            CardImage::Placeholder { file } => {
                let _ = writeln!(
                    html,
                    "  <div class=\"card-image placeholder\">🖼️ <em>Missing image:</em> <code>{}</code>\
                     <small>Place it in the asset directory with this exact filename.</small></div>",
                    escape_html(file)
                );
            }
        }

        let _ = writeln!(html, "  <h3 class=\"card-title\">{}</h3>", escape_html(&self.title));

        if !self.tags.is_empty() {
            html.push_str("  <ul class=\"tags\">");
            for tag in &self.tags {
                let _ = write!(html, "<li class=\"tag\">{}</li>", escape_html(tag));
            }
            html.push_str("</ul>\n");
        }

        if !self.blurb.is_empty() {
            let _ = writeln!(html, "  <p class=\"blurb\">{}</p>", escape_html(&self.blurb));
        }

        if !self.links.is_empty() {
            html.push_str("  <nav class=\"card-links\">");
            for link in &self.links {
                let _ = write!(
                    html,
                    "<a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                    escape_url(&link.url),
                    escape_html(&link.label)
                );
            }
            html.push_str("</nav>\n");
        }

        html.push_str("</article>");
        html
    }
}

/// Builds one card per record, preserving order.
///
/// Missing assets never abort the build; they are returned alongside the
/// cards.
pub fn build_cards<'a>(
    records: impl IntoIterator<Item = &'a ProjectRecord>,
    assets: &dyn AssetStore,
) -> (Vec<Card>, Vec<AssetMissing>) {
    let mut cards = Vec::new();
    let mut missing = Vec::new();
    for record in records {
        let (card, miss) = Card::from_record(record, assets);
        if let Some(miss) = miss {
            tracing::debug!(title = %miss.title, file = %miss.file, "asset missing, using placeholder");
            missing.push(miss);
        }
        cards.push(card);
    }
    (cards, missing)
}

//! Record and settings types
//!
//! `ProjectRecord` is the entire persisted schema of `projects.json`.
//! `ExperienceRecord` and `SiteSettings` back the optional
//! `experiences.json` and `site.yaml` files.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of link buttons shown on a single card.
pub const MAX_CARD_LINKS: usize = 4;

/// Label used for the single `link` field of a project.
pub const PRIMARY_LINK_LABEL: &str = "View project";

// ============================================================================
// Record Trait
// ============================================================================

/// A record type that can be loaded from a JSON array file.
pub trait Record: DeserializeOwned {
    /// Human-readable name of the record kind, used in log messages.
    const KIND: &'static str;

    /// Display title of the record.
    fn title(&self) -> &str;
}

/// Reads an optional field, treating an explicit `null` like an absent one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Project Record
// ============================================================================

/// One entry of `projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Display name (non-empty).
    pub title: String,

    /// Short description text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub blurb: String,

    /// Filename of an image in the asset directory.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,

    /// Labels rendered as chips, in file order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Primary link; absent or empty means none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Additional labelled links, in file order.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub links: IndexMap<String, String>,
}

impl ProjectRecord {
    /// Creates a record with only a title set.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blurb: String::new(),
            image: String::new(),
            tags: Vec::new(),
            link: None,
            links: IndexMap::new(),
        }
    }

    /// Returns the primary link if it is present and non-empty.
    #[must_use]
    pub fn primary_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Returns the `(label, url)` pairs to render as link buttons.
    ///
    /// The primary link comes first, followed by `links` in file order.
    /// Entries with an empty URL are dropped and the result is capped at
    /// [`MAX_CARD_LINKS`].
    #[must_use]
    pub fn link_buttons(&self) -> Vec<(&str, &str)> {
        self.primary_link()
            .map(|url| (PRIMARY_LINK_LABEL, url))
            .into_iter()
            .chain(
                self.links
                    .iter()
                    .map(|(label, url)| (label.as_str(), url.trim()))
                    .filter(|(_, url)| !url.is_empty()),
            )
            .take(MAX_CARD_LINKS)
            .collect()
    }

    /// Returns `true` if the record carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Record for ProjectRecord {
    const KIND: &'static str = "project";

    fn title(&self) -> &str {
        &self.title
    }
}

// ============================================================================
// Experience Record
// ============================================================================

/// One entry of `experiences.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    /// Display name (non-empty).
    pub title: String,

    /// Free-form date or period, e.g. "Summer 2024".
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,

    /// Filename of an image in the asset directory.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,

    /// One-paragraph summary shown under the title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub lede: String,

    /// Short bullet facts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub facts: Vec<String>,

    /// Longer text; paragraphs are separated by blank lines.
    #[serde(default, alias = "body_md", deserialize_with = "null_as_default")]
    pub body: String,

    /// Labels shown next to the date.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Record for ExperienceRecord {
    const KIND: &'static str = "experience";

    fn title(&self) -> &str {
        &self.title
    }
}

// ============================================================================
// Site Settings
// ============================================================================

/// Default number of grid columns on the showcase page.
pub const DEFAULT_COLUMNS: usize = 3;

/// Largest accepted column count.
pub const MAX_COLUMNS: usize = 6;

/// Presentation settings from `site.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Page heading and `<title>`.
    pub title: String,

    /// Introductory paragraph on the showcase page.
    pub intro: String,

    /// Name shown under the reflections essay.
    pub author: Option<String>,

    /// Columns per grid row.
    pub columns: usize,

    /// Résumé PDF filename in the asset directory.
    pub resume: Option<String>,

    /// Signature image filename in the asset directory.
    pub signature: Option<String>,

    /// Path to the reflections text file, relative to the site root.
    pub reflections: Option<String>,

    /// Heading of the reflections page.
    pub reflections_title: String,
}

/// Default heading of the reflections page.
pub const DEFAULT_REFLECTIONS_TITLE: &str = "Reflections";

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Portfolio Showcase".to_string(),
            intro: String::new(),
            author: None,
            columns: DEFAULT_COLUMNS,
            resume: None,
            signature: None,
            reflections: None,
            reflections_title: DEFAULT_REFLECTIONS_TITLE.to_string(),
        }
    }
}

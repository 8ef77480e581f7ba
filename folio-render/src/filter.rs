//! Showcase filters.
//!
//! Filtering happens before cards are built; the renderer itself never
//! drops or reorders records. An empty filter selects everything.

use std::collections::BTreeSet;

use folio_core::ProjectRecord;

/// Visitor-selected title search and tag filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowcaseFilter {
    /// Case-insensitive substring matched against title and blurb.
    pub query: Option<String>,
    /// A record matches if it carries any of these tags.
    pub tags: Vec<String>,
}

impl ShowcaseFilter {
    /// Returns `true` if no criteria are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query_text().is_none() && self.tags.is_empty()
    }

    /// Trimmed, lowercased query, or `None` if blank.
    fn query_text(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Returns `true` if `record` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        if !self.tags.is_empty() && !self.tags.iter().any(|t| record.has_tag(t)) {
            return false;
        }
        if let Some(query) = self.query_text() {
            let haystack = format!("{} {}", record.title, record.blurb).to_lowercase();
            if !haystack.contains(&query) {
                return false;
            }
        }
        true
    }

    /// Selects matching records, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Distinct non-empty tags across all records, sorted.
#[must_use]
pub fn all_tags(records: &[ProjectRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.tags.iter())
        .filter(|t| !t.trim().is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

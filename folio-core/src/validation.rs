//! Record validation
//!
//! Validation runs per array element. Shape problems (not an object, no
//! title, wrongly typed fields) are errors and cause the element to be
//! skipped; content problems on an otherwise usable record are warnings.
//!
//! The validator collects ALL issues rather than stopping at the first.

use crate::error::{Severity, ValidationIssue};
use crate::schema::{ExperienceRecord, ProjectRecord, SiteSettings, MAX_COLUMNS};

use serde_json::Value;

/// Link prefixes accepted without a warning.
const KNOWN_LINK_PREFIXES: &[&str] = &["https://", "http://", "mailto:", "/"];

// ============================================================================
// Public API
// ============================================================================

/// Result of validating a batch of records.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (the offending records were skipped).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Record validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the minimal shape of a raw array element.
    ///
    /// Returns `false` if the element must be skipped: it is not an object,
    /// or it lacks a non-empty string `title`.
    pub fn check_shape(&mut self, index: usize, element: &Value) -> bool {
        let Some(object) = element.as_object() else {
            self.add_error(&format!("[{index}]"), "Entry is not a JSON object");
            return false;
        };

        match object.get("title") {
            None | Some(Value::Null) => {
                self.add_error(&format!("[{index}].title"), "Title is required");
                false
            }
            Some(Value::String(title)) if title.trim().is_empty() => {
                self.add_error(&format!("[{index}].title"), "Title cannot be empty");
                false
            }
            Some(Value::String(_)) => true,
            Some(_) => {
                self.add_error(&format!("[{index}].title"), "Title must be a string");
                false
            }
        }
    }

    /// Records a deserialization failure for an element that passed
    /// [`Self::check_shape`].
    pub fn reject(&mut self, index: usize, reason: &str) {
        self.add_error(&format!("[{index}]"), reason);
    }

    /// Validates the content of a parsed project record.
    pub fn validate_project(&mut self, index: usize, record: &ProjectRecord) {
        if record.image.trim().is_empty() {
            self.add_warning(
                &format!("[{index}].image"),
                "No image set; a placeholder will be shown",
            );
        } else if is_unsafe_asset_name(&record.image) {
            self.add_warning(
                &format!("[{index}].image"),
                "Image must be a plain filename inside the asset directory",
            );
        }

        self.validate_tags(index, &record.tags);

        if let Some(url) = record.primary_link() {
            self.validate_link(&format!("[{index}].link"), url);
        }
        for (label, url) in &record.links {
            let path = format!("[{index}].links.{label}");
            if label.trim().is_empty() {
                self.add_warning(&path, "Link label is empty");
            }
            if !url.trim().is_empty() {
                self.validate_link(&path, url.trim());
            }
        }
    }

    /// Validates the content of a parsed experience record.
    pub fn validate_experience(&mut self, index: usize, record: &ExperienceRecord) {
        if !record.image.is_empty() && is_unsafe_asset_name(&record.image) {
            self.add_warning(
                &format!("[{index}].image"),
                "Image must be a plain filename inside the asset directory",
            );
        }
        self.validate_tags(index, &record.tags);
        for (i, fact) in record.facts.iter().enumerate() {
            if fact.trim().is_empty() {
                self.add_warning(&format!("[{index}].facts[{i}]"), "Fact is empty");
            }
        }
    }

    /// Validates site settings.
    pub fn validate_site(&mut self, site: &SiteSettings) {
        if site.columns == 0 || site.columns > MAX_COLUMNS {
            self.add_error(
                "columns",
                &format!("Columns must be between 1 and {MAX_COLUMNS}"),
            );
        }
        if site.title.trim().is_empty() {
            self.add_warning("title", "Site title is empty");
        }
        for (field, value) in [("resume", &site.resume), ("signature", &site.signature)] {
            if let Some(name) = value {
                if is_unsafe_asset_name(name) {
                    self.add_error(
                        field,
                        "Must be a plain filename inside the asset directory",
                    );
                }
            }
        }
    }

    /// Drains the collected issues into a [`ValidationResult`].
    pub fn finish(&mut self) -> ValidationResult {
        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Field Checks
    // ========================================================================

    fn validate_tags(&mut self, index: usize, tags: &[String]) {
        for (i, tag) in tags.iter().enumerate() {
            if tag.trim().is_empty() {
                self.add_warning(&format!("[{index}].tags[{i}]"), "Tag is empty");
            }
        }
    }

    fn validate_link(&mut self, path: &str, url: &str) {
        if !KNOWN_LINK_PREFIXES
            .iter()
            .any(|prefix| url.starts_with(prefix))
        {
            self.add_warning(
                path,
                "Link should start with https://, http://, mailto: or /",
            );
        }
    }

    /// Adds an error to the collection.
    fn add_error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    /// Adds a warning to the collection.
    fn add_warning(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Returns `true` if `name` could escape the asset directory.
#[must_use]
pub fn is_unsafe_asset_name(name: &str) -> bool {
    name.starts_with('/')
        || name.starts_with('\\')
        || name.contains(':')
        || name.split(['/', '\\']).any(|part| part == "..")
}

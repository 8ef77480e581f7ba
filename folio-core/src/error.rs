//! Core error types for `Folio`
//!
//! Configuration and validation error types shared across the workspace.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
///
/// Covers every way `projects.json`, `experiences.json` or `site.yaml`
/// can fail to produce usable records.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON or YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration validation failed
    #[error("validation failed for {path}")]
    ValidationError {
        /// Path to the configuration file
        path: PathBuf,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Configuration file not found or unreadable
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },

    /// One or more configuration files failed validation.
    #[error("{count} file(s) failed validation")]
    ValidationFailed {
        /// Number of files that failed validation.
        count: usize,
    },
}

impl ConfigError {
    /// Returns a short message suitable for showing to a site visitor.
    ///
    /// Unlike `Display`, this adds a hint on how to fix the problem.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingFile { path } => format!(
                "Missing `{}`. Create it next to the site root and add your images under the asset directory.",
                path.display()
            ),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found while loading records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// JSON path to the problematic field (e.g., "[2].title")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The record is skipped
    Error,
    /// The record is kept; the issue is only reported
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_issue_display() {
        let issue = ValidationIssue {
            path: "[0].title".to_string(),
            message: "missing title".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(issue.to_string(), "error: missing title at [0].title");
    }

    #[test]
    fn test_validation_issue_warning_display() {
        let issue = ValidationIssue {
            path: "[3].link".to_string(),
            message: "unrecognized link scheme".to_string(),
            severity: Severity::Warning,
        };
        assert_eq!(
            issue.to_string(),
            "warning: unrecognized link scheme at [3].link"
        );
    }

    #[test]
    fn test_parse_error_display_with_line() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("projects.json"),
            line: Some(7),
            message: "trailing comma".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("projects.json"));
        assert!(msg.contains("(line 7)"));
        assert!(msg.contains("trailing comma"));
    }

    #[test]
    fn test_parse_error_display_without_line() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("site.yaml"),
            line: None,
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "parse error in site.yaml: bad");
    }

    #[test]
    fn test_missing_file_user_message_has_hint() {
        let err = ConfigError::MissingFile {
            path: PathBuf::from("projects.json"),
        };
        let msg = err.user_message();
        assert!(msg.contains("`projects.json`"));
        assert!(msg.contains("asset directory"));
    }
}

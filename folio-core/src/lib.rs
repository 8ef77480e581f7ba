//! `Folio` Core — portfolio schema, loading and validation
//!
//! This crate provides the record types, site settings and error types
//! shared across `folio` (CLI/server) and `folio-render` (HTML generation),
//! together with the loader that turns `projects.json` and friends into
//! ordered, validated records.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, Severity, ValidationIssue};
pub use loader::{ConfigLoader, LoadResult, LoaderOptions};
pub use schema::{ExperienceRecord, ProjectRecord, SiteSettings};

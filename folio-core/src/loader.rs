//! Configuration loader
//!
//! Loading pipeline for record files:
//! 1. Size check and raw read (UTF-8 BOM stripped)
//! 2. JSON parsing into a top-level array
//! 3. Per-element shape check (skip and report bad elements)
//! 4. Typed deserialization and content validation
//!
//! Records are returned in file order. Nothing is cached: every call reads
//! the file again, so repeated loads of an unmodified file are identical.

use crate::error::{ConfigError, ValidationIssue};
use crate::schema::{ExperienceRecord, ProjectRecord, Record, SiteSettings};
use crate::validation::Validator;

use serde_json::Value;
use std::path::Path;

// ============================================================================
// Public API
// ============================================================================

/// Options for the configuration loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Maximum configuration file size in bytes.
    pub max_config_size: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_config_size: env_or("FOLIO_MAX_CONFIG_SIZE", 10 * 1024 * 1024),
        }
    }
}

/// Result of loading a record file.
#[derive(Debug)]
pub struct LoadResult<T> {
    /// Valid records, in file order.
    pub records: Vec<T>,

    /// Errors for elements that were skipped.
    pub errors: Vec<ValidationIssue>,

    /// Warnings for records that were kept.
    pub warnings: Vec<ValidationIssue>,
}

impl<T> LoadResult<T> {
    /// Returns an empty result with no issues.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            records: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns `true` if any element was skipped.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Iterates over errors then warnings.
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

/// Configuration loader.
///
/// Stateless apart from its options; safe to share between requests.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Creates a new configuration loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new configuration loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Loads `projects.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or exceeds the size limit
    /// - The content is not a JSON array
    ///
    /// Invalid elements do not fail the load; they are reported in
    /// [`LoadResult::errors`].
    pub fn load_projects(&self, path: &Path) -> Result<LoadResult<ProjectRecord>, ConfigError> {
        self.load_array(path, Validator::validate_project)
    }

    /// Loads `experiences.json`.
    ///
    /// A missing file yields an empty result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_experiences(
        &self,
        path: &Path,
    ) -> Result<LoadResult<ExperienceRecord>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no experiences file");
            return Ok(LoadResult::empty());
        }
        self.load_array(path, Validator::validate_experience)
    }

    /// Loads `site.yaml`.
    ///
    /// A missing file yields [`SiteSettings::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or if the
    /// settings fail validation.
    pub fn load_site(&self, path: &Path) -> Result<SiteSettings, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no site settings file, using defaults");
            return Ok(SiteSettings::default());
        }

        let raw = self.read_limited(path)?;
        if raw.trim().is_empty() {
            return Ok(SiteSettings::default());
        }

        let site: SiteSettings =
            serde_yaml::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        let mut validator = Validator::new();
        validator.validate_site(&site);
        let result = validator.finish();
        for warning in &result.warnings {
            tracing::warn!(path = %path.display(), "{warning}");
        }
        if result.has_errors() {
            return Err(ConfigError::ValidationError {
                path: path.to_path_buf(),
                errors: result.errors,
            });
        }

        Ok(site)
    }

    // ========================================================================
    // Pipeline
    // ========================================================================

    fn load_array<T: Record>(
        &self,
        path: &Path,
        validate: fn(&mut Validator, usize, &T),
    ) -> Result<LoadResult<T>, ConfigError> {
        let raw = self.read_limited(path)?;

        let root: Value = serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: Some(e.line()),
            message: e.to_string(),
        })?;

        let Value::Array(elements) = root else {
            return Err(ConfigError::ParseError {
                path: path.to_path_buf(),
                line: None,
                message: format!(
                    "expected a JSON array of {} objects, found {}",
                    T::KIND,
                    json_type_name(&root)
                ),
            });
        };

        let mut validator = Validator::new();
        let mut records = Vec::with_capacity(elements.len());

        for (index, element) in elements.into_iter().enumerate() {
            if !validator.check_shape(index, &element) {
                continue;
            }
            match serde_json::from_value::<T>(element) {
                Ok(record) => {
                    validate(&mut validator, index, &record);
                    records.push(record);
                }
                Err(e) => validator.reject(index, &e.to_string()),
            }
        }

        let result = validator.finish();
        tracing::debug!(
            path = %path.display(),
            kind = T::KIND,
            records = records.len(),
            skipped = result.errors.len(),
            "loaded records"
        );

        Ok(LoadResult {
            records,
            errors: result.errors,
            warnings: result.warnings,
        })
    }

    /// Reads a file, enforcing the size limit and stripping a UTF-8 BOM.
    fn read_limited(&self, path: &Path) -> Result<String, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let file_size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if file_size > self.options.max_config_size {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{file_size} bytes"),
                expected: format!("at most {} bytes", self.options.max_config_size),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        Ok(match raw.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => raw,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_example_record() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "projects.json",
            r#"[{"title":"A","blurb":"x","image":"a.png","tags":["ml"],"link":""}]"#,
        );

        let result = ConfigLoader::with_defaults().load_projects(&path).unwrap();
        assert_eq!(result.records.len(), 1);
        let record = &result.records[0];
        assert_eq!(record.title, "A");
        assert_eq!(record.blurb, "x");
        assert_eq!(record.tags, vec!["ml"]);
        assert_eq!(record.primary_link(), None);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_load_preserves_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "projects.json",
            r#"[{"title":"zeta"},{"title":"Alpha"},{"title":"mu"},{"title":"Alpha"}]"#,
        );

        let result = ConfigLoader::with_defaults().load_projects(&path).unwrap();
        let titles: Vec<&str> = result.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["zeta", "Alpha", "mu", "Alpha"]);
    }

    #[test]
    fn test_load_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "projects.json",
            r#"[{"title":"A","tags":["x","x"]},{"title":"B","links":{"Code":"https://c"}}]"#,
        );

        let loader = ConfigLoader::with_defaults();
        let first = loader.load_projects(&path).unwrap();
        let second = loader.load_projects(&path).unwrap();
        assert_eq!(first.records, second.records);
    }

    #[test]
    fn test_null_optional_fields_are_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "projects.json",
            r#"[
                {"title":"A","blurb":null,"image":null,"tags":null},
                {"title":"B","image":null,"links":null},
                {"title":"C","link":null}
            ]"#,
        );

        let result = ConfigLoader::with_defaults().load_projects(&path).unwrap();
        let titles: Vec<&str> = result.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(result.records[0].blurb.is_empty());
        assert!(result.records[0].tags.is_empty());
        assert!(result.records[1].links.is_empty());
    }

    #[test]
    fn test_null_experience_fields_are_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "experiences.json",
            r#"[{"title":"Intern","date":null,"lede":null,"facts":null,"body_md":null,"tags":null}]"#,
        );

        let result = ConfigLoader::with_defaults().load_experiences(&path).unwrap();
        assert_eq!(result.records.len(), 1);
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(result.records[0].body.is_empty());
    }

    #[test]
    fn test_invalid_elements_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "projects.json",
            r#"[{"title":"A"}, 42, {"blurb":"no title"}, {"title":"B","tags":"not-a-list"}, {"title":"C"}]"#,
        );

        let result = ConfigLoader::with_defaults().load_projects(&path).unwrap();
        let titles: Vec<&str> = result.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.errors[0].path, "[1]");
        assert_eq!(result.errors[1].path, "[2].title");
        assert_eq!(result.errors[2].path, "[3]");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = ConfigLoader::with_defaults().load_projects(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "projects.json", "[{\"title\": \"A\",}\n");
        let result = ConfigLoader::with_defaults().load_projects(&path);
        match result {
            Err(ConfigError::ParseError { line, .. }) => assert_eq!(line, Some(1)),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_top_level_object_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "projects.json", r#"{"title":"A"}"#);
        match ConfigLoader::with_defaults().load_projects(&path) {
            Err(ConfigError::ParseError { message, .. }) => {
                assert!(message.contains("found an object"), "{message}");
            }
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_bom_is_stripped() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "projects.json", "\u{feff}[{\"title\":\"A\"}]");
        let result = ConfigLoader::with_defaults().load_projects(&path).unwrap();
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_size_limit() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "projects.json", r#"[{"title":"A"}]"#);
        let loader = ConfigLoader::new(LoaderOptions { max_config_size: 4 });
        assert!(matches!(
            loader.load_projects(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_missing_experiences_is_empty() {
        let dir = TempDir::new().unwrap();
        let result = ConfigLoader::with_defaults()
            .load_experiences(&dir.path().join("experiences.json"))
            .unwrap();
        assert!(result.records.is_empty());
        assert!(!result.has_errors());
    }

    #[test]
    fn test_load_experiences() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "experiences.json",
            r#"[{"title":"Intern","date":"2024","facts":["a","b"]}]"#,
        );
        let result = ConfigLoader::with_defaults().load_experiences(&path).unwrap();
        assert_eq!(result.records[0].facts, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_site_is_default() {
        let dir = TempDir::new().unwrap();
        let site = ConfigLoader::with_defaults()
            .load_site(&dir.path().join("site.yaml"))
            .unwrap();
        assert_eq!(site, SiteSettings::default());
    }

    #[test]
    fn test_site_invalid_columns() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "site.yaml", "columns: 0\n");
        assert!(matches!(
            ConfigLoader::with_defaults().load_site(&path),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_site_parse_error_has_line() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "site.yaml", "title: ok\ncolumns: [\n");
        match ConfigLoader::with_defaults().load_site(&path) {
            Err(ConfigError::ParseError { line, .. }) => assert!(line.is_some()),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }
}

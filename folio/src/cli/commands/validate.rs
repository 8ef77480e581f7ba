//! `folio validate`
//!
//! Loads every site file the way the server would and reports what the
//! pages would show: skipped entries, content warnings and missing assets.

use std::path::Path;

use folio_core::validation::is_unsafe_asset_name;
use folio_core::{ConfigError, ConfigLoader, LoadResult, Severity, ValidationIssue};
use folio_render::{AssetStore, DirAssets};
use serde::Serialize;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::error::FolioError;
use crate::site::SiteSources;

// ============================================================================
// Report
// ============================================================================

/// Validation outcome for all site files.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// One entry per checked file.
    pub files: Vec<FileReport>,
    /// Total errors across files.
    pub errors: usize,
    /// Total warnings across files.
    pub warnings: usize,
}

/// Validation outcome for one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path as resolved from the command line.
    pub path: String,
    /// Records that would be rendered, if the file holds records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    /// Issues in file order.
    pub issues: Vec<IssueReport>,
}

/// One reported issue.
#[derive(Debug, Serialize)]
pub struct IssueReport {
    /// `"error"` or `"warning"`.
    pub severity: &'static str,
    /// Location inside the file, e.g. `[2].title`.
    pub path: String,
    /// What is wrong.
    pub message: String,
}

impl From<&ValidationIssue> for IssueReport {
    fn from(issue: &ValidationIssue) -> Self {
        Self {
            severity: match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            },
            path: issue.path.clone(),
            message: issue.message.clone(),
        }
    }
}

impl FileReport {
    fn new(path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
            records: None,
            issues: Vec::new(),
        }
    }

    fn error(&mut self, path: &str, message: impl Into<String>) {
        self.issues.push(IssueReport {
            severity: "error",
            path: path.to_string(),
            message: message.into(),
        });
    }

    fn warning(&mut self, path: &str, message: impl Into<String>) {
        self.issues.push(IssueReport {
            severity: "warning",
            path: path.to_string(),
            message: message.into(),
        });
    }

    fn extend<T>(&mut self, loaded: &LoadResult<T>) {
        self.records = Some(loaded.records.len());
        self.issues.extend(loaded.issues().map(IssueReport::from));
    }

    fn load_failed(&mut self, e: &ConfigError) {
        match e {
            ConfigError::ValidationError { errors, .. } => {
                self.issues.extend(errors.iter().map(IssueReport::from));
            }
            other => self.error("", other.to_string()),
        }
    }
}

impl Report {
    fn push(&mut self, file: FileReport) {
        for issue in &file.issues {
            if issue.severity == "error" {
                self.errors += 1;
            } else {
                self.warnings += 1;
            }
        }
        self.files.push(file);
    }

    /// Whether the report fails under the given strictness.
    #[must_use]
    pub const fn failed(&self, strict: bool) -> bool {
        self.errors > 0 || (strict && self.warnings > 0)
    }

    /// Files with at least one failing issue.
    fn failing_files(&self, strict: bool) -> usize {
        self.files
            .iter()
            .filter(|f| {
                f.issues
                    .iter()
                    .any(|i| i.severity == "error" || strict)
            })
            .count()
    }
}

// ============================================================================
// Command
// ============================================================================

/// Validates the site files and prints a report.
///
/// # Errors
///
/// Returns [`ConfigError::ValidationFailed`] if any file has errors (or
/// warnings, with `--strict`).
pub fn run(args: &ValidateArgs) -> Result<(), FolioError> {
    let sources = args.source.sources();
    let report = check_site(&sources, &ConfigLoader::with_defaults());

    match args.format {
        OutputFormat::Human => print_human(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.failed(args.strict) {
        return Err(ConfigError::ValidationFailed {
            count: report.failing_files(args.strict),
        }
        .into());
    }
    tracing::info!(files = report.files.len(), "site valid");
    Ok(())
}

/// Checks projects, experiences and site settings, including whether the
/// assets they reference exist.
#[must_use]
pub fn check_site(sources: &SiteSources, loader: &ConfigLoader) -> Report {
    let assets = sources.assets("");
    let mut report = Report::default();

    let mut projects = FileReport::new(&sources.projects);
    match loader.load_projects(&sources.projects) {
        Ok(loaded) => {
            projects.extend(&loaded);
            for (i, record) in loaded.records.iter().enumerate() {
                check_asset(&mut projects, &assets, &format!("[{i}].image"), &record.image);
            }
        }
        Err(e) => projects.load_failed(&e),
    }
    report.push(projects);

    if sources.experiences.exists() {
        let mut experiences = FileReport::new(&sources.experiences);
        match loader.load_experiences(&sources.experiences) {
            Ok(loaded) => {
                experiences.extend(&loaded);
                for (i, record) in loaded.records.iter().enumerate() {
                    check_asset(&mut experiences, &assets, &format!("[{i}].image"), &record.image);
                }
            }
            Err(e) => experiences.load_failed(&e),
        }
        report.push(experiences);
    }

    if sources.site.exists() {
        let mut site = FileReport::new(&sources.site);
        match loader.load_site(&sources.site) {
            Ok(settings) => {
                if let Some(resume) = settings.resume.as_deref() {
                    check_asset(&mut site, &assets, "resume", resume);
                }
                if let Some(signature) = settings.signature.as_deref() {
                    check_asset(&mut site, &assets, "signature", signature);
                }
                let (_, notices) = sources.reflections(&settings);
                for notice in notices {
                    site.warning("reflections", notice.text());
                }
            }
            Err(e) => site.load_failed(&e),
        }
        report.push(site);
    }

    report
}

/// Warns about a referenced asset that is not on disk.
///
/// Empty names and names the loader already flagged as unsafe are skipped
/// so each field is reported once.
fn check_asset(file: &mut FileReport, assets: &DirAssets, path: &str, name: &str) {
    if name.is_empty() || is_unsafe_asset_name(name) || assets.exists(name) {
        return;
    }
    file.warning(
        path,
        format!("missing image '{name}' (expected at {})", assets.expected_path(name).display()),
    );
}

fn print_human(report: &Report) {
    for file in &report.files {
        match file.records {
            Some(n) => println!("{} ({n} records)", file.path),
            None => println!("{}", file.path),
        }
        for issue in &file.issues {
            if issue.path.is_empty() {
                println!("  {}: {}", issue.severity, issue.message);
            } else {
                println!("  {}: {} at {}", issue.severity, issue.message, issue.path);
            }
        }
    }
    println!(
        "{} file(s) checked: {} error(s), {} warning(s)",
        report.files.len(),
        report.errors,
        report.warnings
    );
}

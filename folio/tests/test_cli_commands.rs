mod common;

use common::{fixture_path, run_folio};

fn site_root() -> String {
    fixture_path("site").to_string_lossy().into_owned()
}

#[test]
fn validate_fixture_site() {
    let output = run_folio(&["validate", "--root", &site_root()]);
    assert!(
        output.status.success(),
        "validate should succeed: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("projects.json (3 records)"), "{stdout}");
    assert!(stdout.contains("missing image 'survey.png'"), "{stdout}");
}

#[test]
fn validate_strict_fails_on_warnings() {
    let output = run_folio(&["validate", "--strict", "--root", &site_root()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn validate_json_output() {
    let output = run_folio(&["validate", "--format", "json", "--root", &site_root()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    assert_eq!(parsed["errors"], 0);
    assert_eq!(parsed["warnings"], 1);
    assert_eq!(parsed["files"].as_array().map(Vec::len), Some(3));
}

#[test]
fn validate_broken_json_exits_2() {
    let root = fixture_path("broken");
    let output = run_folio(&["validate", "--root", root.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("parse error"), "{stdout}");
}

#[test]
fn validate_missing_projects_exits_2() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = run_folio(&["validate", "--root", dir.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn build_writes_static_site() {
    let out = tempfile::TempDir::new().unwrap();
    let output = run_folio(&[
        "build",
        "--root",
        &site_root(),
        "--out",
        out.path().to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "build should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for page in ["index.html", "resume.html", "experience.html", "reflections.html"] {
        assert!(out.path().join(page).is_file(), "{page} missing");
    }
    assert!(out.path().join("assets/churn.png").is_file());
    assert!(out.path().join("assets/cv.pdf").is_file());

    let index = std::fs::read_to_string(out.path().join("index.html")).unwrap();
    assert_eq!(index.matches("<article class=\"card\">").count(), 3);
    assert!(index.contains("--columns: 2"));
}

#[test]
fn build_fails_without_projects() {
    let src = tempfile::TempDir::new().unwrap();
    let out = tempfile::TempDir::new().unwrap();
    let output = run_folio(&[
        "build",
        "--root",
        src.path().to_str().unwrap(),
        "--out",
        out.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn version_json() {
    let output = run_folio(&["version", "--format", "json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("version JSON");
    assert_eq!(parsed["name"], "folio");
    assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn completions_bash() {
    let output = run_folio(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("folio"));
}

#[test]
fn invalid_flag_value_is_usage_error() {
    let output = run_folio(&["serve", "--columns", "9"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn unknown_flag_is_usage_error() {
    let output = run_folio(&["validate", "--no-such-flag"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn help_exits_zero() {
    let output = run_folio(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("serve"));
}

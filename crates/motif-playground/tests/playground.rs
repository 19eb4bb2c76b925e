//! Integration tests for the playground theme and its CLI.

use std::fs;
use std::path::Path;
use std::process::Command;

use insta::assert_snapshot;
use motif::ThemeUsage;
use motif_playground::{render, theme, Format};
use tempfile::TempDir;

const SITE_YAML: &str = r#"
config:
  title: Hey!
  description: This is a theme created using motif
  site: https://example.dev
pages:
  posts: /blog
  about: null
overrides:
  css:
    - ./custom.css
  components:
    Heading: ./CustomHeading
"#;

fn write_site(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_motif-playground"))
}

#[test]
fn resolved_playground_build() {
    let usage = ThemeUsage::from_yaml(SITE_YAML).unwrap();
    let build = theme().resolve(&usage).unwrap();
    let output = render(&build, Format::Json).unwrap();
    assert_snapshot!("resolved_playground_build", output);
}

#[test]
fn commented_out_overrides_resolve_to_defaults() {
    let usage = ThemeUsage::from_yaml(
        r#"
config:
  title: Hey!
pages: {}
overrides:
  css: []
  components: {}
"#,
    )
    .unwrap();
    let build = theme().resolve(&usage).unwrap();
    assert_eq!(build.pages().len(), 3);
    assert_eq!(build.css(), ["./styles/theme.css"]);
    assert_eq!(build.components()["Heading"].as_str(), "./components/Heading");
}

#[test]
fn cli_resolves_usage_file() {
    let dir = TempDir::new().unwrap();
    let path = write_site(dir.path(), "site.yaml", SITE_YAML);

    let output = cli().arg("resolve").arg(&path).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["theme"], "theme-playground");
    assert_eq!(value["pages"]["posts"], "/blog");
    assert!(value["pages"].get("about").is_none());
}

#[test]
fn cli_prints_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_site(dir.path(), "site.yml", "config:\n  title: Hey!\n");

    let output = cli()
        .args(["--format", "yaml", "resolve"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("theme: theme-playground"));
}

#[test]
fn cli_reports_resolution_errors_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    let path = write_site(
        dir.path(),
        "site.json",
        r#"{ "config": { "title": "Hey!" }, "pages": { "blog": "/b" } }"#,
    );

    let output = cli().arg("resolve").arg(&path).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error[unknown-page] at blog"));
}

#[test]
fn cli_reports_load_errors() {
    let output = cli()
        .arg("resolve")
        .arg("/nonexistent/site.yaml")
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("/nonexistent/site.yaml"));
}

#[test]
fn cli_prints_schema() {
    let output = cli().arg("schema").output().unwrap();
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["title"]["type"], "string");
    assert_eq!(schema["sitemap"]["default"], true);
    assert_eq!(schema["description"]["optional"], true);
}

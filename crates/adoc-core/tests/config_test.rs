//! Tests for the converter configuration system.

use adoc_core::config::{ConverterConfig, PayloadSource};
use adoc_core::errors::ConfigError;

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn load_missing_file_falls_back_to_defaults() {
    let dir = tempdir();
    let config = ConverterConfig::load(dir.path()).unwrap();

    assert_eq!(config.preview.effective_safe_mode(), "safe");
    assert_eq!(config.docbook.effective_backend(), "docbook5");
    assert!(config.html.effective_header_footer());
}

#[test]
fn load_reads_project_file() {
    let dir = tempdir();
    std::fs::write(
        dir.path().join("adoc.toml"),
        r#"
[preview]
safe_mode = "secure"

[html]
header_footer = false
source_highlighter = "highlightjs"

[docbook]
backend = "docbook45"

[html.attributes]
icons = "font"
"#,
    )
    .unwrap();

    let config = ConverterConfig::load(dir.path()).unwrap();
    assert_eq!(config.preview.effective_safe_mode(), "secure");
    assert!(!config.html.effective_header_footer());
    assert_eq!(config.docbook.effective_backend(), "docbook45");
    assert_eq!(
        config.html.attributes.get("icons").map(String::as_str),
        Some("font")
    );
}

#[test]
fn from_toml_tolerates_missing_sections() {
    let config = ConverterConfig::from_toml("[odf]\ntoc = true\n").unwrap();
    assert_eq!(config.odf.toc, Some(true));
    assert_eq!(config.html.effective_doctype(), "article");
}

#[test]
fn invalid_safe_mode_fails_validation() {
    let err = ConverterConfig::from_toml("[preview]\nsafe_mode = \"reckless\"\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "preview.safe_mode"),
        other => panic!("expected validation failure, got {other}"),
    }
}

#[test]
fn invalid_backend_fails_validation() {
    let err = ConverterConfig::from_toml("[docbook]\nbackend = \"html5\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = ConverterConfig::from_toml("[preview\nsafe_mode = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn payloads_serialize_each_section() {
    let config = ConverterConfig::from_toml(
        r#"
[docbook]
backend = "docbook5"

[docbook.attributes]
toc = "left"
"#,
    )
    .unwrap();

    let payload = config.docbook.json_payload().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed["backend"], "docbook5");
    assert_eq!(parsed["attributes"]["toc"], "left");

    // Sections with pure defaults still produce a payload.
    let preview = config.preview.json_payload().unwrap();
    assert!(preview.starts_with('{'));
}

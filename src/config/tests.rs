//! Tests for config functionality.

use crate::config::{CONFIG_FILE_NAME, Config};
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.max_column, 80);
    assert!(config.normalize_numbers);
    assert_eq!(config.squash_skip_extensions, vec!["go"]);
    assert_eq!(config.skip_paths, vec!["/dev/null"]);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    // Should use all defaults
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
max_column: 100
"#;
    let config = Config::from_yaml(yaml).unwrap();

    // Specified values should be used
    assert_eq!(config.max_column, 100);

    // Unspecified values should use defaults
    assert!(config.normalize_numbers);
    assert_eq!(config.squash_skip_extensions, vec!["go"]);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
max_column: 72
normalize_numbers: false
squash_skip_extensions:
  - go
  - rs
skip_paths:
  - /dev/null
  - vendor/generated.c
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.max_column, 72);
    assert!(!config.normalize_numbers);
    assert_eq!(config.squash_skip_extensions, vec!["go", "rs"]);
    assert_eq!(config.skip_paths, vec!["/dev/null", "vendor/generated.c"]);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
max_column: 90
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.max_column, 90);
}

#[test]
fn test_invalid_yaml_fails() {
    let err = Config::from_yaml("max_column: [not, a, number]").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_zero_max_column_fails() {
    let err = Config::from_yaml("max_column: 0").unwrap_err();
    assert!(err.to_string().contains("max_column must be greater than 0"));
}

#[test]
fn test_extension_with_leading_dot_fails() {
    let err = Config::from_yaml("squash_skip_extensions: [\".go\"]").unwrap_err();
    assert!(err.to_string().contains("Use 'go' instead"));

    let err = Config::from_yaml("squash_skip_extensions: [\"\"]").unwrap_err();
    assert!(err.to_string().contains("must be non-empty"));
}

#[test]
fn test_yaml_roundtrip() {
    let config = Config {
        max_column: 66,
        ..Config::default()
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_skip_helpers() {
    let config = Config::default();

    assert!(config.is_skipped_path("/dev/null"));
    assert!(!config.is_skipped_path("src/lib.rs"));

    assert!(config.skips_squash("cmd/main.go"));
    assert!(!config.skips_squash("cmd/MAIN.GO"));
    assert!(!config.skips_squash("cmd/main.gox"));
    assert!(!config.skips_squash("src/lib.rs"));
    assert!(!config.skips_squash("Makefile"));
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.yaml");
    std::fs::write(&path, "max_column: 40\n").unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "max_column: 50\n").unwrap();

    let config = Config::resolve(Some(path.as_path()), temp_dir.path()).unwrap();
    assert_eq!(config.max_column, 40);
}

#[test]
fn test_resolve_finds_file_in_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "max_column: 50\n").unwrap();

    let config = Config::resolve(None, temp_dir.path()).unwrap();
    assert_eq!(config.max_column, 50);
}

#[test]
fn test_resolve_defaults_without_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = Config::resolve(None, temp_dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_missing_explicit_path_fails() {
    let err = Config::resolve(Some(Path::new("/nonexistent/linescope.yaml")), Path::new("."))
        .unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

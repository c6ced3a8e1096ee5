//! Filesystem validation against real project layouts.

use panel_config::{AppConfig, ConfigError, validate_fs, validate_schema};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn project() -> (TempDir, AppConfig) {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("panel.config.toml"), "").expect("write config");

    let mut config = AppConfig::default();
    config.paths.config_dir = Some(dir.path().to_path_buf());
    config.paths.config = dir.path().join("panel.config.toml");
    (dir, config)
}

#[test]
fn accepts_complete_project() {
    let (dir, mut config) = project();
    fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
    fs::write(dir.path().join("theme.scss"), "").unwrap();
    config.admin.index_html = Some(PathBuf::from("index.html"));
    config.paths.scss = Some(PathBuf::from("theme.scss"));

    assert!(validate_fs(&config, dir.path()).is_ok());
}

#[test]
fn rejects_missing_config_file() {
    let (dir, mut config) = project();
    config.paths.config = dir.path().join("missing.toml");

    let err = validate_fs(&config, dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileNotFound { .. }));
}

#[test]
fn rejects_empty_config_path() {
    let (dir, mut config) = project();
    config.paths.config = PathBuf::new();

    let err = validate_fs(&config, dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileNotFound { .. }));
}

#[test]
fn rejects_missing_template() {
    let (dir, mut config) = project();
    config.admin.index_html = Some(PathBuf::from("custom.html"));

    let err = validate_fs(&config, dir.path()).unwrap_err();
    match err {
        ConfigError::TemplateNotFound { path } => {
            assert_eq!(path, dir.path().join("custom.html"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_missing_stylesheet() {
    let (dir, mut config) = project();
    config.paths.scss = Some(PathBuf::from("theme.scss"));

    let err = validate_fs(&config, dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::StylesheetNotFound { .. }));
}

#[test]
fn fs_validation_runs_schema_checks_first() {
    let (dir, mut config) = project();
    config.routes.admin = "admin".to_string();

    let err = validate_fs(&config, dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::SchemaValidation { .. }));
    assert!(validate_schema(&config).is_err());
}

#[test]
fn relative_config_dir_resolves_against_root() {
    let (dir, mut config) = project();
    config.paths.config_dir = None;
    config.paths.config = PathBuf::from("panel.config.toml");

    assert!(validate_fs(&config, dir.path()).is_ok());
}

#[test]
fn rooted_stylesheet_is_looked_up_under_config_dir() {
    let (dir, mut config) = project();
    fs::create_dir(dir.path().join("styles")).unwrap();
    fs::write(dir.path().join("styles/theme.scss"), "").unwrap();
    config.paths.scss = Some(PathBuf::from("/styles/theme.scss"));

    assert!(validate_fs(&config, dir.path()).is_ok());
}

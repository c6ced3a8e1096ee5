//! Tests for config file discovery and layering.

use panel_config::{ConfigDiscovery, ConfigError};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn clear_panel_env() {
    for (key, _) in env::vars() {
        if key.starts_with("PANEL_") {
            unsafe { env::remove_var(key) };
        }
    }
}

#[test]
#[serial]
fn toml_config_sets_paths_from_file_location() {
    clear_panel_env();
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("panel.config.toml"),
        r#"
server_modules = ["fs-extra"]

[routes]
admin = "/dashboard"

[public_env]
API_URL = "https://x"
"#,
    )
    .expect("write config");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load");
    let root = std::path::absolute(dir.path()).unwrap();

    assert_eq!(config.routes.admin, "/dashboard");
    assert_eq!(config.paths.config_dir.as_deref(), Some(root.as_path()));
    assert_eq!(config.paths.config, root.join("panel.config.toml"));
    assert_eq!(config.public_env["API_URL"], "https://x");
    assert_eq!(config.server_modules, vec!["fs-extra".to_string()]);
}

#[test]
#[serial]
fn file_can_override_config_dir() {
    clear_panel_env();
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("panel.config.json"),
        r#"{ "paths": { "config_dir": "/elsewhere", "scss": "theme.scss" } }"#,
    )
    .expect("write config");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load");
    assert_eq!(config.paths.config_dir, Some(PathBuf::from("/elsewhere")));
    assert_eq!(config.paths.scss, Some(PathBuf::from("theme.scss")));
}

#[test]
#[serial]
fn package_json_field_is_loaded() {
    clear_panel_env();
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{
            "name": "app",
            "panel": {
                "admin": { "index_html": "admin.html" },
                "server_modules": ["sharp"]
            }
        }"#,
    )
    .expect("write package.json");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load");
    assert_eq!(config.admin.index_html, Some(PathBuf::from("admin.html")));
    assert_eq!(config.server_modules, vec!["sharp".to_string()]);
    assert_eq!(config.routes.admin, "/admin");
}

#[test]
#[serial]
fn environment_overrides_file_values() {
    clear_panel_env();
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("panel.config.toml"),
        r#"
[routes]
admin = "/file"
"#,
    )
    .expect("write config");

    unsafe { env::set_var("PANEL_ROUTES__ADMIN", "/env") };
    let result = ConfigDiscovery::new(dir.path()).load();
    unsafe { env::remove_var("PANEL_ROUTES__ADMIN") };

    assert_eq!(result.expect("load").routes.admin, "/env");
}

#[test]
#[serial]
fn public_env_vars_are_collected() {
    clear_panel_env();
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("panel.config.toml"),
        r#"
[public_env]
PANEL_PUBLIC_SITE = "from-file"
API_URL = "https://x"
"#,
    )
    .expect("write config");

    unsafe { env::set_var("PANEL_PUBLIC_SITE", "from-env") };
    let result = ConfigDiscovery::new(dir.path()).load();
    unsafe { env::remove_var("PANEL_PUBLIC_SITE") };

    let config = result.expect("load");
    assert_eq!(config.public_env["PANEL_PUBLIC_SITE"], "from-env");
    assert_eq!(config.public_env["API_URL"], "https://x");
}

#[test]
#[serial]
fn section_style_public_vars_do_not_lowercase_keys() {
    clear_panel_env();
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("panel.config.toml"),
        r#"
[public_env]
API_URL = "file"
"#,
    )
    .expect("write config");

    unsafe { env::set_var("PANEL_PUBLIC_ENV__API_URL", "env") };
    let result = ConfigDiscovery::new(dir.path()).load();
    unsafe { env::remove_var("PANEL_PUBLIC_ENV__API_URL") };

    let config = result.expect("load");
    assert_eq!(config.public_env["API_URL"], "file");
    assert!(!config.public_env.contains_key("api_url"));
    assert_eq!(
        config.public_env.keys().collect::<Vec<_>>(),
        vec!["API_URL", "PANEL_PUBLIC_ENV__API_URL"]
    );
}

#[test]
#[serial]
fn invalid_field_type_reports_field() {
    clear_panel_env();
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("panel.config.toml"),
        r#"server_modules = "fs-extra""#,
    )
    .expect("write config");

    let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
    match err {
        ConfigError::InvalidValue { field, hint } => {
            assert_eq!(field, "server_modules");
            assert!(hint.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn load_from_missing_file_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let err = ConfigDiscovery::new(dir.path())
        .load_from(Path::new("nope.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileNotFound { .. }));
}

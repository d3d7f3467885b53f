//! sylas.toml loading tests

use pretty_assertions::assert_eq;
use std::fs;
use sylas::{LogFormat, SylasConfig};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SylasConfig::load(dir.path().join("sylas.toml")).unwrap();
    assert_eq!(config, SylasConfig::default());
}

#[test]
fn test_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sylas.toml");
    fs::write(
        &path,
        r#"
title = "Handbook"

[router]
page_roots = ["pages", "app-pages"]
page_patterns = ["./pages/**/*.tsx", "../app-pages/**/*.tsx"]
kebab_keep_digits = true
remove_index = false
case_sensitive = true
enable_catch_all = false

[layout]
patterns = ["./layouts/*.tsx"]
root_id = "app"
strict_mode = false

[logging]
format = "pretty"
filter = "sylas=debug"
"#,
    )
    .unwrap();

    let config = SylasConfig::load(&path).unwrap();
    assert_eq!(config.title, "Handbook");
    assert_eq!(config.router.page_roots, vec!["pages", "app-pages"]);
    assert_eq!(
        config.router.absolute_page_patterns(),
        vec!["/pages/**/*.tsx", "/app-pages/**/*.tsx"]
    );
    assert!(!config.router.remove_index);
    assert_eq!(config.layout.absolute_patterns(), vec!["/layouts/*.tsx"]);
    assert_eq!(config.layout.root_id, "app");
    assert!(!config.layout.strict_mode);
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(config.logging.filter, "sylas=debug");

    let options = config.router.to_build_options();
    assert!(options.kebab_keep_digits);
    assert!(options.case_sensitive);
    assert!(!options.enable_catch_all);
}

#[test]
fn test_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sylas.toml");
    fs::write(&path, "title = [").unwrap();

    let err = SylasConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));

    assert_eq!(SylasConfig::load_or_default(&path), SylasConfig::default());
}

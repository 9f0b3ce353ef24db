//! Tests for loading configuration files.

use std::fs;
use strictly_tictactoe::{Config, Player};
use tempfile::TempDir;

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("engine.toml");
    fs::write(
        &path,
        r#"
[search]
early_exit = false

[play]
human_mark = "O"
show_stats = false
"#,
    )
    .expect("Failed to write TOML");

    let config = Config::from_file(&path).expect("Load failed");
    assert!(!*config.search().early_exit());
    assert_eq!(*config.play().human_mark(), Player::O);
    assert!(!*config.play().show_stats());
}

#[test]
fn test_missing_fields_use_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("engine.toml");
    fs::write(&path, "[play]\nshow_stats = false\n").expect("Failed to write TOML");

    let config = Config::from_file(&path).expect("Load failed");
    assert!(*config.search().early_exit());
    assert_eq!(*config.play().human_mark(), Player::X);
    assert!(!*config.play().show_stats());
}

#[test]
fn test_no_path_gives_defaults() {
    assert_eq!(Config::load(None).unwrap(), Config::default());
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"), "{err}");
}

#[test]
fn test_bad_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("engine.toml");
    fs::write(&path, "[search]\nearly_exit = \"maybe\"\n").expect("Failed to write TOML");

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
}

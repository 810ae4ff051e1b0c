//! 設定ファイルテスト

use taoyuan_address_finder::config::{Config, DEFAULT_LOOKUP_URL};
use tempfile::tempdir;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config.lookup_command, None);
    assert_eq!(config.lookup_url, DEFAULT_LOOKUP_URL);
    assert_eq!(config.query_interval_seconds, 5);
    assert_eq!(config.city_name, "桃園市");
    assert_eq!(config.pad_width, 50);
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        lookup_command: Some("python".into()),
        lookup_args: vec!["lookup.py".into(), "{query}".into()],
        lookup_timeout_seconds: 30,
        ..Default::default()
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.lookup_command.as_deref(), Some("python"));
    assert_eq!(loaded.lookup_args, vec!["lookup.py", "{query}"]);
    assert_eq!(loaded.lookup_timeout_seconds, 30);
}

/// 一部の項目だけの設定でも既定値で補う
#[test]
fn test_load_partial_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"query_interval_seconds": 1}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.query_interval_seconds, 1);
    assert_eq!(config.lookup_timeout_seconds, 20);
    assert!(config.open_after_run);
}

/// 不正なJSON
#[test]
fn test_load_invalid_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{").unwrap();

    assert!(Config::load_from(&path).is_err());
}

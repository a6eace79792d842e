use pretty_assertions::assert_eq;
use registry_fs::{ConfigStore, Error, NormalizedPath};
use rstest::rstest;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, PartialEq, Deserialize)]
struct Settings {
    start_prefix: String,
    retries: u32,
}

fn sample() -> Settings {
    Settings {
        start_prefix: "granted_registry_start".into(),
        retries: 2,
    }
}

#[rstest]
#[case("settings.toml", "start_prefix = \"granted_registry_start\"\nretries = 2\n")]
#[case("settings.json", r#"{"start_prefix": "granted_registry_start", "retries": 2}"#)]
#[case("settings.yaml", "start_prefix: granted_registry_start\nretries: 2\n")]
#[case("settings.yml", "start_prefix: granted_registry_start\nretries: 2\n")]
#[case("SETTINGS.TOML", "start_prefix = \"granted_registry_start\"\nretries = 2\n")]
fn test_load_by_extension(#[case] file_name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(file_name);
    fs::write(&file_path, content).unwrap();

    let loaded: Settings = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(loaded, sample());
}

#[test]
fn test_load_toml_written_by_hand() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("settings.toml");
    fs::write(&file_path, "start_prefix = \"custom_start\"\nretries = 5\n").unwrap();

    let loaded: Settings = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(loaded.start_prefix, "custom_start");
    assert_eq!(loaded.retries, 5);
}

#[test]
fn test_load_malformed_reports_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("settings.json");
    fs::write(&file_path, "{ not json").unwrap();

    let err = ConfigStore::new()
        .load::<Settings>(&NormalizedPath::new(&file_path))
        .unwrap_err();

    match err {
        Error::ConfigParse { format, .. } => assert_eq!(format, "JSON"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("settings.ini");
    fs::write(&file_path, "[x]").unwrap();

    let err = ConfigStore::new()
        .load::<Settings>(&NormalizedPath::new(&file_path))
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedFormat { extension } if extension == "ini"));
}

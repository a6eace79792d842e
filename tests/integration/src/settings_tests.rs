//! Sync settings loaded from each supported file format.

use pretty_assertions::assert_eq;
use registry_fs::NormalizedPath;
use registry_ini::IniFile;
use registry_sync::{RegistrySync, SyncSettings};
use registry_test_utils::TestConfig;
use rstest::rstest;

#[rstest]
#[case(
    "settings.toml",
    "collision_notice = \"# renamed\"\n\n[markers]\nstart_prefix = \"acme_start\"\nend_prefix = \"acme_end\"\n"
)]
#[case(
    "settings.json",
    r##"{"collision_notice": "# renamed", "markers": {"start_prefix": "acme_start", "end_prefix": "acme_end"}}"##
)]
#[case(
    "settings.yaml",
    "collision_notice: \"# renamed\"\nmarkers:\n  start_prefix: acme_start\n  end_prefix: acme_end\n"
)]
fn test_settings_drive_generated_block(#[case] file_name: &str, #[case] content: &str) {
    let config = TestConfig::with_content("[profile foo]\n");
    let settings_path = config.write_source(file_name, content);
    let settings = SyncSettings::load(&NormalizedPath::new(settings_path)).unwrap();

    let sync = RegistrySync::new(config.path()).with_settings(settings);
    sync.sync_registry(
        "github.com/org/repo",
        &IniFile::parse("[profile foo]\n").unwrap(),
        false,
    )
    .unwrap();

    assert_eq!(
        config.section_names(),
        vec![
            "profile foo",
            "acme_start github.com/org/repo",
            "profile repo.foo",
            "acme_end github.com/org/repo",
        ]
    );
    assert_eq!(
        config.parse().section("profile repo.foo").unwrap().comment(),
        "# renamed"
    );
}

#[test]
fn test_empty_settings_file_uses_defaults() {
    let config = TestConfig::new();
    let path = config.write_source("settings.toml", "");

    let settings = SyncSettings::load(&NormalizedPath::new(path)).unwrap();

    assert_eq!(settings, SyncSettings::default());
}

#[test]
fn test_blocks_from_other_prefixes_are_user_sections() {
    let config = TestConfig::with_content(
        "[granted_registry_start repoA]\n[profile x]\n[granted_registry_end repoA]\n",
    );
    let settings = SyncSettings {
        markers: registry_sync::MarkerFormat {
            start_prefix: "acme_start".into(),
            end_prefix: "acme_end".into(),
        },
        ..SyncSettings::default()
    };

    let listing = RegistrySync::new(config.path())
        .with_settings(settings)
        .list()
        .unwrap();

    assert!(listing.generated.is_empty());
    assert_eq!(listing.user.len(), 3);
}

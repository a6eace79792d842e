//! End-to-end tests across the registry crates
//!
//! These tests exercise the complete flow: registry file -> source parsing ->
//! block regeneration -> config file on disk.

use pretty_assertions::assert_eq;
use registry_fs::NormalizedPath;
use registry_ini::IniFile;
use registry_source::SourceUrl;
use registry_sync::{RegistrySource, RegistrySync, namespace_for_source};
use registry_test_utils::TestConfig;
use rstest::rstest;

/// A hand-maintained AWS config with comments and a multi-line value.
const USER_CONFIG: &str = "\
# personal settings
[default]
region = us-east-1
output = json

[profile dev]
# my own dev access
sso_start_url = https://example.awsapps.com/start
sso_role_name = Admin

[profile tooling]
s3 =
  max_concurrent_requests = 20
";

const TEAM_REGISTRY: &str = "\
[profile dev]
sso_start_url = https://example.awsapps.com/start
sso_role_name = Developer

[profile staging]
sso_role_name = Developer
";

const PLATFORM_REGISTRY: &str = "\
[profile prod]
sso_role_name = ReadOnly

[profile bad'name]
sso_role_name = Nope
";

fn write_registries(config: &TestConfig) -> Vec<RegistrySource> {
    let team = config.write_source("team.ini", TEAM_REGISTRY);
    let platform = config.write_source("platform.ini", PLATFORM_REGISTRY);
    vec![
        RegistrySource::load(
            "https://github.com/acme/aws-profiles/team",
            &NormalizedPath::new(team),
        )
        .unwrap(),
        RegistrySource::load(
            "https://github.com/acme/platform.git",
            &NormalizedPath::new(platform),
        )
        .unwrap(),
    ]
}

#[test]
fn test_full_lifecycle_preserves_user_content() {
    let config = TestConfig::with_content(USER_CONFIG);
    let sync = RegistrySync::new(config.path());
    let registries = write_registries(&config);

    let reports = sync.sync_all(&registries).unwrap();

    assert_eq!(
        config.section_names(),
        vec![
            "default",
            "profile dev",
            "profile tooling",
            "granted_registry_start https://github.com/acme/aws-profiles/team",
            "profile aws-profiles_team.dev",
            "profile staging",
            "granted_registry_end https://github.com/acme/aws-profiles/team",
            "granted_registry_start https://github.com/acme/platform.git",
            "profile prod",
            "granted_registry_end https://github.com/acme/platform.git",
        ]
    );
    assert_eq!(reports[0].renamed[0].renamed, "profile aws-profiles_team.dev");
    assert_eq!(reports[1].skipped, vec!["profile bad'name"]);

    // User sections keep their values and comments.
    let file = config.parse();
    let dev = file.section("profile dev").unwrap();
    assert_eq!(dev.get("sso_role_name"), Some("Admin"));
    assert_eq!(dev.entries()[0].comment, "# my own dev access");
    assert_eq!(
        file.section("profile aws-profiles_team.dev")
            .unwrap()
            .get("sso_role_name"),
        Some("Developer")
    );

    // Removing everything leaves the file exactly as the user wrote it.
    sync.remove_all().unwrap();
    assert_eq!(config.read(), USER_CONFIG);
}

#[test]
fn test_resync_is_stable() {
    let config = TestConfig::with_content(USER_CONFIG);
    let sync = RegistrySync::new(config.path());
    let registries = write_registries(&config);

    sync.sync_all(&registries).unwrap();
    let first = config.read();
    sync.sync_all(&registries).unwrap();

    assert_eq!(config.read(), first);
}

#[test]
fn test_single_registry_refresh_keeps_other_blocks() {
    let config = TestConfig::with_content(USER_CONFIG);
    let sync = RegistrySync::new(config.path());
    let registries = write_registries(&config);
    sync.sync_all(&registries).unwrap();

    let updated = IniFile::parse("[profile prod]\nsso_role_name = Admin\n").unwrap();
    sync.sync_registry("https://github.com/acme/platform.git", &updated, false)
        .unwrap();

    let file = config.parse();
    assert_eq!(
        file.section("profile prod").unwrap().get("sso_role_name"),
        Some("Admin")
    );
    assert!(file.has_section("profile staging"));
    assert_eq!(sync.list().unwrap().generated.len(), 7);
}

#[test]
fn test_remove_one_then_other() {
    let config = TestConfig::with_content(USER_CONFIG);
    let sync = RegistrySync::new(config.path());
    sync.sync_all(&write_registries(&config)).unwrap();

    let removed = sync
        .remove_registry("https://github.com/acme/aws-profiles/team")
        .unwrap();
    assert_eq!(removed.len(), 4);

    sync.remove_registry("https://github.com/acme/platform.git")
        .unwrap();
    assert_eq!(config.read(), USER_CONFIG);
}

#[test]
fn test_listing_serializes_to_json() {
    let config = TestConfig::with_content(USER_CONFIG);
    let sync = RegistrySync::new(config.path());
    sync.sync_registry(
        "repoA",
        &IniFile::parse("[profile x]\n").unwrap(),
        true,
    )
    .unwrap();

    let json = serde_json::to_value(sync.list().unwrap()).unwrap();

    assert_eq!(
        json["user"],
        serde_json::json!(["default", "profile dev", "profile tooling"])
    );
    assert_eq!(json["generated"][1], "profile x");
}

#[rstest]
#[case("https://github.com/acme/profiles", "acme", "profiles", "", "")]
#[case("git@github.com:acme/profiles.git", "acme", "profiles", "", "")]
#[case("github.com/acme/profiles/team/granted.yml", "acme", "profiles", "team", "granted.yml")]
fn test_source_url_components(
    #[case] source_id: &str,
    #[case] org: &str,
    #[case] repo: &str,
    #[case] subpath: &str,
    #[case] filename: &str,
) {
    let url = SourceUrl::parse(source_id).unwrap();
    assert_eq!(url.host, "github.com");
    assert_eq!(url.org, org);
    assert_eq!(url.repo, repo);
    assert_eq!(url.subpath, subpath);
    assert_eq!(url.filename, filename);
}

#[test]
fn test_namespace_matches_url_components() {
    assert_eq!(
        namespace_for_source("github.com/acme/profiles/team/granted.yml"),
        "profiles_team_granted.yml"
    );
}

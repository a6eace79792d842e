//! Synchronizer settings

use registry_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::marker::MarkerFormat;

/// Comment attached to the first start marker in the config file.
pub const AUTOGENERATED_NOTICE: &str = "\
# Profile registry autogenerated section. DO NOT EDIT.
# Sections between the granted_registry_start and granted_registry_end markers are rewritten on every sync, so manual edits are lost.
# To change these profiles, edit the registry repository and sync again.
# To stop syncing and remove this section, run 'registry remove <source>'.";

/// Comment prepended to a profile that was renamed to avoid a collision.
pub const COLLISION_NOTICE: &str = "# profile name has been prefixed due to duplication";

/// Header prefix of named profiles in AWS config files.
pub const PROFILE_PREFIX: &str = "profile ";

/// Settings for generated-block synchronization.
///
/// Every field has a default, so a settings file only needs the keys it
/// overrides:
///
/// ```toml
/// collision_notice = "# renamed by registry sync"
///
/// [markers]
/// start_prefix = "acme_registry_start"
/// end_prefix = "acme_registry_end"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    pub markers: MarkerFormat,
    pub autogenerated_notice: String,
    pub collision_notice: String,
    /// Stripped from section names before the legal-name check.
    pub profile_prefix: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            markers: MarkerFormat::default(),
            autogenerated_notice: AUTOGENERATED_NOTICE.to_string(),
            collision_notice: COLLISION_NOTICE.to_string(),
            profile_prefix: PROFILE_PREFIX.to_string(),
        }
    }
}

impl SyncSettings {
    /// Load settings from a TOML, JSON, or YAML file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// The comment for a renamed section: the collision notice, then the
    /// section's own comment on the following lines.
    ///
    /// With an existing comment the notice line ends in `. `, matching files
    /// written by earlier granted releases byte for byte.
    pub fn collision_comment(&self, existing: &str) -> String {
        if existing.is_empty() {
            self.collision_notice.clone()
        } else {
            format!("{}. \n{}", self.collision_notice, existing)
        }
    }

    /// The profile name a section header refers to.
    pub fn bare_profile_name<'a>(&self, section_name: &'a str) -> &'a str {
        section_name
            .strip_prefix(self.profile_prefix.as_str())
            .unwrap_or(section_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collision_comment_prepends_notice() {
        let settings = SyncSettings::default();
        assert_eq!(settings.collision_comment(""), COLLISION_NOTICE);
        assert_eq!(
            settings.collision_comment("# team profile"),
            format!("{COLLISION_NOTICE}. \n# team profile")
        );
    }

    #[test]
    fn bare_profile_name_strips_prefix_once() {
        let settings = SyncSettings::default();
        assert_eq!(settings.bare_profile_name("profile dev"), "dev");
        assert_eq!(settings.bare_profile_name("default"), "default");
        assert_eq!(settings.bare_profile_name("profile profile x"), "profile x");
    }
}

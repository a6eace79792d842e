//! In-memory removal and regeneration of generated blocks.
//!
//! These functions only edit an [`IniFile`]; loading and persisting is
//! done by [`RegistrySync`](crate::RegistrySync).

use std::collections::HashSet;

use registry_ini::{DEFAULT_SECTION, IniFile, is_legal_profile_name};

use crate::Result;
use crate::marker::{MarkerFormat, generated_sections};
use crate::namespace::{namespace_for_source, namespaced_section_name};
use crate::settings::SyncSettings;

/// A source profile that was inserted under a namespaced name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedProfile {
    pub original: String,
    pub renamed: String,
}

/// What a regeneration pass inserted for one registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegenerateReport {
    pub source_id: String,
    /// Sections inserted under their original names.
    pub created: Vec<String>,
    /// Sections inserted under a namespaced name because of a collision.
    pub renamed: Vec<RenamedProfile>,
    /// Source sections ignored because their names are not legal profile names.
    pub skipped: Vec<String>,
}

impl RegenerateReport {
    fn new(source_id: &str) -> Self {
        Self {
            source_id: source_id.to_string(),
            ..Self::default()
        }
    }

    /// Number of profile sections written into the block.
    pub fn profile_count(&self) -> usize {
        self.created.len() + self.renamed.len()
    }
}

/// Remove every generated section, across all registries.
///
/// Nothing is removed when the scan finds a single section: a lone stray
/// marker is left alone. Returns the removed section names.
pub fn remove_all_generated(file: &mut IniFile, markers: &MarkerFormat) -> Vec<String> {
    let generated = generated_sections(file, markers, None);
    if generated.len() <= 1 {
        tracing::debug!(found = generated.len(), "no generated block to remove");
        return Vec::new();
    }

    for name in &generated {
        file.delete_section(name);
    }
    tracing::info!(removed = generated.len(), "removed generated sections");
    generated
}

/// Remove the generated block(s) of a single registry.
///
/// Returns the removed section names; empty when the registry has no block.
pub fn remove_generated_for(
    file: &mut IniFile,
    markers: &MarkerFormat,
    source_id: &str,
) -> Vec<String> {
    let generated = generated_sections(file, markers, Some(source_id));
    for name in &generated {
        file.delete_section(name);
    }
    tracing::info!(source_id, removed = generated.len(), "removed registry sections");
    generated
}

/// Append a freshly generated block for `source_id` built from `source`.
///
/// Every non-default section of `source` whose bare profile name is legal is
/// copied between a new start and end marker. A section whose name already
/// existed in `target` before this pass is inserted as
/// `profile <namespace>.<name>` with the collision notice prepended to its
/// comment.
///
/// Existing blocks are not removed first; callers remove them to keep a
/// single block per registry.
///
/// # Errors
///
/// Fails when a section to be created already exists in `target`, for
/// example a namespaced name that is itself taken. `target` may then hold a
/// partial block and should be discarded.
pub fn regenerate_block(
    target: &mut IniFile,
    source_id: &str,
    source: &IniFile,
    is_first_block: bool,
    settings: &SyncSettings,
) -> Result<RegenerateReport> {
    tracing::debug!(source_id, "generating registry section");

    let existing: HashSet<String> = target
        .section_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let namespace = namespace_for_source(source_id);
    let mut report = RegenerateReport::new(source_id);

    let start = target.new_section(&settings.markers.start_marker(source_id))?;
    if is_first_block {
        start.set_comment(settings.autogenerated_notice.as_str());
    }

    for section in source.sections() {
        let name = section.name();
        if name == DEFAULT_SECTION {
            continue;
        }

        if !is_legal_profile_name(settings.bare_profile_name(name)) {
            tracing::warn!(section = name, source_id, "skipping section with illegal profile name");
            report.skipped.push(name.to_string());
            continue;
        }

        if existing.contains(name) {
            let renamed = namespaced_section_name(name, &namespace);
            tracing::debug!(
                section = name,
                namespace = %namespace,
                renamed = %renamed,
                "profile name duplication found, prefixing namespace to avoid collision"
            );
            let created = target.new_section(&renamed)?;
            created.copy_from(section);
            created.set_comment(settings.collision_comment(section.comment()));
            report.renamed.push(RenamedProfile {
                original: name.to_string(),
                renamed,
            });
        } else {
            target.new_section(name)?.copy_from(section);
            report.created.push(name.to_string());
        }
    }

    target.new_section(&settings.markers.end_marker(source_id))?;

    tracing::debug!(
        source_id,
        created = report.created.len(),
        renamed = report.renamed.len(),
        skipped = report.skipped.len(),
        "generated registry section"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(file: &IniFile) -> Vec<&str> {
        file.section_names()
            .into_iter()
            .filter(|n| *n != DEFAULT_SECTION)
            .collect()
    }

    #[test]
    fn regenerate_into_empty_document() {
        let mut target = IniFile::new();
        let source = IniFile::parse("[profile x]\nregion = a\n[profile y]\nregion = b\n").unwrap();

        let report =
            regenerate_block(&mut target, "repoA", &source, true, &SyncSettings::default()).unwrap();

        assert_eq!(
            names(&target),
            vec![
                "granted_registry_start repoA",
                "profile x",
                "profile y",
                "granted_registry_end repoA",
            ]
        );
        assert_eq!(report.created, vec!["profile x", "profile y"]);
        assert_eq!(
            target.section("granted_registry_start repoA").unwrap().comment(),
            SyncSettings::default().autogenerated_notice
        );
        assert_eq!(target.section("profile y").unwrap().get("region"), Some("b"));
    }

    #[test]
    fn later_blocks_have_no_notice() {
        let mut target = IniFile::new();
        let source = IniFile::parse("[profile x]\n").unwrap();

        regenerate_block(&mut target, "repoB", &source, false, &SyncSettings::default()).unwrap();

        assert_eq!(
            target.section("granted_registry_start repoB").unwrap().comment(),
            ""
        );
    }

    #[test]
    fn remove_all_ignores_single_stray_marker() {
        let mut file = IniFile::parse("[profile a]\n[granted_registry_start r]\n").unwrap();
        let before = file.clone();

        assert!(remove_all_generated(&mut file, &MarkerFormat::default()).is_empty());
        assert_eq!(file, before);
    }

    #[test]
    fn remove_generated_for_missing_registry_is_noop() {
        let mut file = IniFile::parse("[profile a]\nx = 1\n").unwrap();
        let before = file.clone();

        assert!(remove_generated_for(&mut file, &MarkerFormat::default(), "r").is_empty());
        assert_eq!(file, before);
    }
}

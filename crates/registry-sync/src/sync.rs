//! File-level synchronization operations.
//!
//! Each operation loads the config file once, edits it in memory, and saves
//! it once. A failure before the save leaves the file on disk untouched.

use registry_fs::NormalizedPath;
use registry_ini::IniFile;
use serde::Serialize;

use crate::block::{
    RegenerateReport, regenerate_block, remove_all_generated, remove_generated_for,
};
use crate::error::{Error, Result};
use crate::marker::{generated_sections, user_sections};
use crate::settings::SyncSettings;

/// A registry source identifier paired with its profile document.
#[derive(Debug, Clone)]
pub struct RegistrySource {
    pub source_id: String,
    pub document: IniFile,
}

impl RegistrySource {
    pub fn new(source_id: impl Into<String>, document: IniFile) -> Self {
        Self {
            source_id: source_id.into(),
            document,
        }
    }

    /// Load the profile document of a registry from `path`.
    pub fn load(source_id: impl Into<String>, path: &NormalizedPath) -> Result<Self> {
        let document = IniFile::load(path).map_err(|source| Error::Load {
            path: path.to_native(),
            source,
        })?;
        Ok(Self::new(source_id, document))
    }
}

/// Sections of a config file, split by ownership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    /// Markers and profiles inside generated blocks.
    pub generated: Vec<String>,
    /// Sections authored outside any generated block.
    pub user: Vec<String>,
}

/// Synchronizes registry blocks into one config file.
///
/// Callers must not run two operations against the same file concurrently.
#[derive(Debug, Clone)]
pub struct RegistrySync {
    config_path: NormalizedPath,
    settings: SyncSettings,
}

impl RegistrySync {
    pub fn new(config_path: impl Into<NormalizedPath>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: SyncSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: SyncSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn config_path(&self) -> &NormalizedPath {
        &self.config_path
    }

    pub fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    /// List generated and user-authored sections.
    pub fn list(&self) -> Result<Listing> {
        let file = self.load()?;
        Ok(Listing {
            generated: generated_sections(&file, &self.settings.markers, None),
            user: user_sections(&file, &self.settings.markers),
        })
    }

    /// Remove all generated content and persist.
    ///
    /// A config with only a single stray generated section is left as is.
    pub fn remove_all(&self) -> Result<Vec<String>> {
        let mut file = self.load()?;
        let removed = remove_all_generated(&mut file, &self.settings.markers);
        self.save(&file)?;
        Ok(removed)
    }

    /// Remove one registry's generated content and persist.
    pub fn remove_registry(&self, source_id: &str) -> Result<Vec<String>> {
        let mut file = self.load()?;
        let removed = remove_generated_for(&mut file, &self.settings.markers, source_id);
        self.save(&file)?;
        Ok(removed)
    }

    /// Replace one registry's block with one generated from `source`.
    ///
    /// The config file is created if it does not exist yet.
    pub fn sync_registry(
        &self,
        source_id: &str,
        source: &IniFile,
        is_first_block: bool,
    ) -> Result<RegenerateReport> {
        self.sync_one(source_id, source, Some(is_first_block))
    }

    /// Add or refresh one registry's block.
    ///
    /// The block carries the autogenerated notice unless a start marker of
    /// another registry still carries a comment after this registry's old
    /// block is removed.
    pub fn add_registry(&self, source_id: &str, source: &IniFile) -> Result<RegenerateReport> {
        self.sync_one(source_id, source, None)
    }

    fn sync_one(
        &self,
        source_id: &str,
        source: &IniFile,
        is_first_block: Option<bool>,
    ) -> Result<RegenerateReport> {
        let mut file = self.load_or_default()?;
        remove_generated_for(&mut file, &self.settings.markers, source_id);
        let is_first_block = is_first_block.unwrap_or_else(|| !self.has_notice(&file));
        let report = regenerate_block(&mut file, source_id, source, is_first_block, &self.settings)?;
        self.save(&file)?;

        tracing::info!(
            source_id,
            profiles = report.profile_count(),
            "synced registry"
        );
        Ok(report)
    }

    /// Regenerate every registry's block, in order, with a single save.
    ///
    /// All generated content is removed first; only the first registry's
    /// start marker carries the autogenerated notice.
    pub fn sync_all(&self, registries: &[RegistrySource]) -> Result<Vec<RegenerateReport>> {
        let mut file = self.load_or_default()?;
        remove_all_generated(&mut file, &self.settings.markers);

        let mut reports = Vec::with_capacity(registries.len());
        for (idx, registry) in registries.iter().enumerate() {
            remove_generated_for(&mut file, &self.settings.markers, &registry.source_id);
            reports.push(regenerate_block(
                &mut file,
                &registry.source_id,
                &registry.document,
                idx == 0,
                &self.settings,
            )?);
        }

        self.save(&file)?;
        tracing::info!(registries = reports.len(), "synced all registries");
        Ok(reports)
    }

    fn has_notice(&self, file: &IniFile) -> bool {
        file.sections()
            .iter()
            .any(|s| self.settings.markers.is_start(s.name(), None) && !s.comment().is_empty())
    }

    fn load(&self) -> Result<IniFile> {
        IniFile::load(&self.config_path).map_err(|source| Error::Load {
            path: self.config_path.to_native(),
            source,
        })
    }

    fn load_or_default(&self) -> Result<IniFile> {
        IniFile::load_or_default(&self.config_path).map_err(|source| Error::Load {
            path: self.config_path.to_native(),
            source,
        })
    }

    fn save(&self, file: &IniFile) -> Result<()> {
        file.save_to(&self.config_path).map_err(|source| Error::Save {
            path: self.config_path.to_native(),
            source,
        })
    }
}

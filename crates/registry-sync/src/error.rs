//! Error types for registry-sync

use std::path::PathBuf;

/// Result type for registry-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing registry blocks
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The config file could not be read or parsed
    #[error("Failed to load config at {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: registry_ini::Error,
    },

    /// The config file could not be written
    #[error("Failed to save config at {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: registry_ini::Error,
    },

    /// An in-memory document edit failed, e.g. a duplicate section name
    #[error(transparent)]
    Ini(#[from] registry_ini::Error),

    /// Sync settings could not be loaded
    #[error("Failed to load sync settings: {0}")]
    Settings(#[from] registry_fs::Error),
}

impl Error {
    /// Whether this error came from creating a section that already exists.
    pub fn is_duplicate_section(&self) -> bool {
        matches!(
            self,
            Self::Ini(registry_ini::Error::DuplicateSection { .. })
        )
    }
}

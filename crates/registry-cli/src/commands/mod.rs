//! Command implementations for registry-cli

pub mod list;
pub mod remove;
pub mod sync;

use std::path::Path;

use registry_fs::NormalizedPath;
use registry_sync::{RegistrySync, SyncSettings};

use crate::error::Result;

pub use list::run_list;
pub use remove::{run_remove, run_remove_all};
pub use sync::{run_add, run_sync};

/// Build the synchronizer for `config`, with settings from `settings` if given.
pub fn open(config: &Path, settings: Option<&Path>) -> Result<RegistrySync> {
    let sync = RegistrySync::new(NormalizedPath::new(config));
    match settings {
        Some(path) => {
            let settings = SyncSettings::load(&NormalizedPath::new(path))?;
            tracing::debug!(path = %path.display(), "loaded sync settings");
            Ok(sync.with_settings(settings))
        }
        None => Ok(sync),
    }
}

//! Generated-block management for profile registries in AWS config files.
//!
//! Profiles pulled from a registry are written into the user's config file
//! between marker sections, so the tool can later find, replace, or remove
//! exactly what it generated without touching user-authored sections:
//!
//! ```text
//! [profile my-own]                                  <- user section
//!
//! [granted_registry_start https://github.com/org/profiles]
//! [profile dev]                                     <- generated
//! [profile profiles.prod]                           <- generated, renamed
//! [granted_registry_end https://github.com/org/profiles]
//! ```
//!
//! # Modules
//!
//! - [`marker`]: marker naming and the linear block scanner
//! - [`namespace`]: namespaces from source identifiers, collision renaming
//! - [`block`]: in-memory removal and regeneration
//! - [`sync`]: load, edit, save operations on a config file
//! - [`settings`]: marker prefixes and notices

pub mod block;
pub mod error;
pub mod marker;
pub mod namespace;
pub mod settings;
pub mod sync;

pub use block::{
    RegenerateReport, RenamedProfile, regenerate_block, remove_all_generated, remove_generated_for,
};
pub use error::{Error, Result};
pub use marker::{MarkerFormat, Placement, classify, generated_sections, user_sections};
pub use namespace::{namespace_for_source, namespaced_section_name};
pub use settings::SyncSettings;
pub use sync::{Listing, RegistrySource, RegistrySync};

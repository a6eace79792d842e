//! Filesystem primitives for the profile registry synchronizer
//!
//! Provides normalized paths, locked atomic writes, and format-detected
//! loading of settings files.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;

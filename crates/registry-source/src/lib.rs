//! Parsing of profile registry source identifiers.
//!
//! A registry source is usually a git repository URL, optionally pointing
//! at a subdirectory and a specific registry file:
//!
//! ```text
//! https://github.com/org/profiles.git/team/dev/registry.yml
//!                    ^^^ ^^^^^^^^     ^^^^^^^^ ^^^^^^^^^^^^
//!                    org repo         subpath  filename
//! ```

pub mod error;
pub mod source_url;

pub use error::{Error, Result};
pub use source_url::SourceUrl;

//! Ordered, section-based INI documents for AWS-style config files.
//!
//! An [`IniFile`] keeps sections in file order, which is what lets callers
//! reason about contiguous runs of sections (such as generated blocks).
//! Section names are unique within a document; the reserved
//! [`DEFAULT_SECTION`] always sits at index 0 and holds keys that appear
//! before the first header.
//!
//! ```
//! use registry_ini::IniFile;
//!
//! let mut file = IniFile::parse("[profile dev]\nregion = us-east-1\n").unwrap();
//! file.new_section("profile prod").unwrap().set("region", "eu-west-1");
//!
//! assert_eq!(file.section_names(), vec!["DEFAULT", "profile dev", "profile prod"]);
//! ```

pub mod document;
pub mod error;
mod parser;
pub mod profile;
pub mod section;

pub use document::{DEFAULT_SECTION, IniFile};
pub use error::{Error, Result};
pub use profile::is_legal_profile_name;
pub use section::{Entry, Section};

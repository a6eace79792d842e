//! Marker sections and the generated-block scanner.
//!
//! A generated block is a contiguous run of sections bracketed by two
//! marker sections:
//! ```text
//! [granted_registry_start https://github.com/org/profiles]
//! [profile dev]
//! ...
//! [granted_registry_end https://github.com/org/profiles]
//! ```
//!
//! Scanning is a single linear pass with one "inside" flag. It does not
//! validate pairing: an end marker always closes the current region and is
//! counted as generated even when no region was open, and an unclosed start
//! marker leaves everything after it inside.

use registry_ini::{DEFAULT_SECTION, IniFile, Section};
use serde::{Deserialize, Serialize};

pub const REGISTRY_START_PREFIX: &str = "granted_registry_start";
pub const REGISTRY_END_PREFIX: &str = "granted_registry_end";

/// Separates a marker prefix from the registry source identifier.
pub const MARKER_SEPARATOR: char = ' ';

/// Prefixes used to name start and end marker sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerFormat {
    pub start_prefix: String,
    pub end_prefix: String,
}

impl Default for MarkerFormat {
    fn default() -> Self {
        Self {
            start_prefix: REGISTRY_START_PREFIX.to_string(),
            end_prefix: REGISTRY_END_PREFIX.to_string(),
        }
    }
}

impl MarkerFormat {
    pub fn start_marker(&self, source_id: &str) -> String {
        marker_name(&self.start_prefix, source_id)
    }

    pub fn end_marker(&self, source_id: &str) -> String {
        marker_name(&self.end_prefix, source_id)
    }

    pub fn is_start(&self, name: &str, source_id: Option<&str>) -> bool {
        matches_marker(name, &self.start_prefix, source_id)
    }

    pub fn is_end(&self, name: &str, source_id: Option<&str>) -> bool {
        matches_marker(name, &self.end_prefix, source_id)
    }
}

pub fn marker_name(prefix: &str, source_id: &str) -> String {
    format!("{prefix}{MARKER_SEPARATOR}{source_id}")
}

/// Whether `name` is a marker with the given prefix.
///
/// Without a source filter any name starting with `prefix` matches. With a
/// filter the name must be `prefix`, the separator, then exactly
/// `source_id`, so `.../a/b` never matches a marker for `.../a/b-extra`.
pub fn matches_marker(name: &str, prefix: &str, source_id: Option<&str>) -> bool {
    let Some(rest) = name.strip_prefix(prefix) else {
        return false;
    };
    match source_id {
        None => true,
        Some(id) => rest
            .strip_prefix(MARKER_SEPARATOR)
            .and_then(|r| r.strip_prefix(id))
            .is_some_and(|tail| tail.is_empty() || tail.starts_with(char::is_whitespace)),
    }
}

/// Where a section sits relative to generated blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Outside,
    StartMarker,
    Inside,
    EndMarker,
}

impl Placement {
    /// Markers and everything between them belong to a generated block.
    pub fn is_generated(self) -> bool {
        !matches!(self, Placement::Outside)
    }
}

/// Classify each section name in document order.
///
/// The default section is always [`Placement::Outside`]. A start marker seen
/// while already inside is classified as [`Placement::Inside`].
pub fn classify<'a>(
    names: impl IntoIterator<Item = &'a str>,
    markers: &MarkerFormat,
    source_id: Option<&str>,
) -> Vec<(&'a str, Placement)> {
    names
        .into_iter()
        .scan(false, |inside, name| {
            let placement = if name == DEFAULT_SECTION {
                Placement::Outside
            } else if !*inside && markers.is_start(name, source_id) {
                *inside = true;
                Placement::StartMarker
            } else if markers.is_end(name, source_id) {
                *inside = false;
                Placement::EndMarker
            } else if *inside {
                Placement::Inside
            } else {
                Placement::Outside
            };
            Some((name, placement))
        })
        .collect()
}

/// Names of every section belonging to a generated block, in document order.
///
/// With `source_id` only that registry's markers open and close blocks.
pub fn generated_sections(
    file: &IniFile,
    markers: &MarkerFormat,
    source_id: Option<&str>,
) -> Vec<String> {
    classify(file.sections().iter().map(Section::name), markers, source_id)
        .into_iter()
        .filter(|(_, placement)| placement.is_generated())
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Names of user-authored sections: not generated and not the default section.
pub fn user_sections(file: &IniFile, markers: &MarkerFormat) -> Vec<String> {
    classify(file.sections().iter().map(Section::name), markers, None)
        .into_iter()
        .filter(|(name, placement)| *placement == Placement::Outside && *name != DEFAULT_SECTION)
        .map(|(name, _)| name.to_string())
        .collect()
}

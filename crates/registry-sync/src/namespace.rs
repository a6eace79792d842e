//! Namespacing of colliding profile names.

use regex::Regex;
use registry_source::SourceUrl;
use std::sync::LazyLock;

/// Joins namespace components.
pub const NAMESPACE_SEPARATOR: &str = "_";

/// Everything up to the last `profile <ws>`, then the profile's own name.
static PROFILE_HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*profile\s+)(?P<name>[^\n\r]*)").expect("Invalid profile header regex")
});

/// Derive the namespace for a registry source identifier.
///
/// The namespace is the repository name, then the subpath and filename when
/// present, joined with `_`. An identifier that cannot be parsed yields an
/// empty namespace; namespacing is best-effort disambiguation, not
/// validation.
pub fn namespace_for_source(source_id: &str) -> String {
    match SourceUrl::parse(source_id) {
        Ok(url) => namespace_from_url(&url),
        Err(e) => {
            tracing::warn!(source_id, error = %e, "could not parse registry source; using empty namespace");
            String::new()
        }
    }
}

pub fn namespace_from_url(url: &SourceUrl) -> String {
    [url.repo.as_str(), url.subpath.as_str(), url.filename.as_str()]
        .into_iter()
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(NAMESPACE_SEPARATOR)
}

/// Rewrite a section name as `profile <namespace>.<name>`.
///
/// Only names containing `profile` followed by whitespace are rewritten;
/// text before the last such `profile` is dropped. Anything else is
/// returned unchanged.
pub fn namespaced_section_name(section_name: &str, namespace: &str) -> String {
    match PROFILE_HEADER_PATTERN
        .captures(section_name)
        .and_then(|caps| caps.name("name"))
    {
        Some(name) => format!("profile {namespace}.{}", name.as_str()),
        None => section_name.to_string(),
    }
}

//! Profile name validation

use regex::Regex;
use std::sync::LazyLock;

/// Characters that cannot appear in a usable AWS profile name.
///
/// Spaces are allowed: headers such as `sso-session corp` keep their kind
/// and name separated by one.
static ILLEGAL_PROFILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\\[\];'"]"#).expect("Invalid profile name regex"));

/// Whether `name` is usable as a profile name.
///
/// The name is the bare profile name, i.e. without the `profile ` prefix
/// that config-file headers carry.
pub fn is_legal_profile_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if ILLEGAL_PROFILE_CHARS.is_match(name) {
        tracing::debug!(name, "profile name contains illegal characters");
        return false;
    }
    true
}

//! Structured view of a registry source identifier

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, Result};

/// A registry source identifier broken into its components.
///
/// Accepted forms:
/// - `https://host/org/repo[.git][/sub/path][/file.yml]`
/// - `git@host:org/repo.git[/sub/path][/file.yml]`
/// - `host/org/repo[...]`, treated as `https://`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl {
    /// The identifier exactly as given, trimmed.
    pub provided: String,
    pub host: String,
    pub org: String,
    /// Repository name without a `.git` suffix.
    pub repo: String,
    /// Directory inside the repository, `/`-separated; empty when absent.
    pub subpath: String,
    /// Registry file name (`*.yml` / `*.yaml`); empty when absent.
    pub filename: String,
}

impl SourceUrl {
    pub fn parse(identifier: &str) -> Result<Self> {
        let provided = identifier.trim();
        let (host, path) = split_host_and_path(provided)?;

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let [org, repo, rest @ ..] = segments.as_slice() else {
            return Err(Error::MissingRepository {
                url: provided.to_string(),
            });
        };

        let repo = repo.strip_suffix(".git").unwrap_or(*repo);
        if repo.is_empty() {
            return Err(Error::MissingRepository {
                url: provided.to_string(),
            });
        }

        let (subpath, filename) = match rest.split_last() {
            Some((last, dirs)) if is_registry_file(last) => (dirs, *last),
            _ => (rest, ""),
        };

        Ok(Self {
            provided: provided.to_string(),
            host,
            org: (*org).to_string(),
            repo: repo.to_string(),
            subpath: subpath.join("/"),
            filename: filename.to_string(),
        })
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.provided)
    }
}

fn is_registry_file(segment: &str) -> bool {
    let lower = segment.to_ascii_lowercase();
    lower.ends_with(".yml") || lower.ends_with(".yaml")
}

fn split_host_and_path(provided: &str) -> Result<(String, String)> {
    if let Some((host, path)) = scp_like(provided) {
        return Ok((host.to_string(), path.to_string()));
    }

    let with_scheme = if provided.contains("://") {
        Cow::Borrowed(provided)
    } else {
        Cow::Owned(format!("https://{provided}"))
    };

    let parsed = ::url::Url::parse(&with_scheme).map_err(|e| Error::InvalidUrl {
        url: provided.to_string(),
        message: e.to_string(),
    })?;

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| Error::MissingHost {
            url: provided.to_string(),
        })?;

    Ok((host.to_string(), parsed.path().to_string()))
}

/// Split `user@host:path` into host and path.
fn scp_like(provided: &str) -> Option<(&str, &str)> {
    if provided.contains("://") {
        return None;
    }
    let (user_host, path) = provided.split_once(':')?;
    let (_, host) = user_host.split_once('@')?;
    if host.is_empty() || host.contains('/') {
        return None;
    }
    Some((host, path))
}

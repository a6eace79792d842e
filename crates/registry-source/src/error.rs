//! Error types for registry-source

/// Result type for registry-source operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a registry source identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid registry URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Registry URL has no host: {url}")]
    MissingHost { url: String },

    #[error("Registry URL must name an owner and a repository: {url}")]
    MissingRepository { url: String },
}

//! Error types for registry-ini

/// Result type for registry-ini operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in registry-ini operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] registry_fs::Error),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Section already exists: {name}")]
    DuplicateSection { name: String },

    #[error("Invalid section name {name:?}: {reason}")]
    InvalidSectionName { name: String, reason: String },
}

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Whether this error means the file being loaded does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Fs(e) if e.is_not_found())
    }
}

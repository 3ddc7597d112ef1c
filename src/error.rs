use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for release note generation
#[derive(Error, Debug)]
pub enum ReleaseNotesError {
    #[error("Missing credential: environment variable {var} is not set")]
    MissingCredential { var: String },

    #[error("No tags found in repository")]
    NoTagsFound,

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Invalid version in tag '{tag}': {reason}")]
    InvalidVersion { tag: String, reason: String },

    #[error("Summarization failed: {0}")]
    SummarizationFailed(String),

    #[error("I/O error on {}: {source}", .path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in git-release-notes
pub type Result<T> = std::result::Result<T, ReleaseNotesError>;

impl ReleaseNotesError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Config(msg.into())
    }

    /// Create a version error for the given tag
    pub fn invalid_version(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        ReleaseNotesError::InvalidVersion {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create a summarization error with context
    pub fn summarization(msg: impl Into<String>) -> Self {
        ReleaseNotesError::SummarizationFailed(msg.into())
    }

    /// Wrap an I/O error with the path it happened on
    pub fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReleaseNotesError::FileIo {
            path: path.into(),
            source,
        }
    }
}

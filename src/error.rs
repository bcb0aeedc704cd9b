//! Error types for script splitting

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while splitting a script into fragments
#[derive(Debug, Error)]
pub enum SplitError {
    /// Input has fewer lines than the header alone
    #[error("header ({header} lines) exceeds total lines ({total})")]
    InputTooShort { total: usize, header: usize },

    /// Body does not decompose into whole groups
    #[error("body ({body} lines) is not a multiple of group size ({group})")]
    MisalignedBody { body: usize, group: usize },

    /// Chunk count is zero, negative, or not a number
    #[error("invalid chunk count: {0}")]
    InvalidChunkCount(String),

    /// Header or group line count is not a positive integer
    #[error("invalid line layout: {origin} = {value:?} (expected a positive integer)")]
    InvalidLayout { origin: String, value: String },

    /// A written fragment did not match the input
    #[error("verification failed: {0}")]
    VerificationFailed(String),

    /// Failed to read the input script
    #[error("failed to read input {file}: {source}")]
    InputRead {
        file: PathBuf,
        source: std::io::Error,
    },

    /// Failed to stage a fragment
    #[error("failed to write fragment {file}: {source}")]
    FragmentWrite {
        file: PathBuf,
        source: std::io::Error,
    },

    /// Failed to move a staged fragment into place
    #[error("failed to persist fragment {file}: {source}")]
    FragmentPersist {
        file: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a written fragment back
    #[error("failed to read fragment {file}: {source}")]
    FragmentRead {
        file: PathBuf,
        source: std::io::Error,
    },

    /// I/O error occurred (catch-all for other I/O errors)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with SplitError
pub type Result<T> = std::result::Result<T, SplitError>;

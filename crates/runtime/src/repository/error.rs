//! Error types raised by repository implementations.

use std::path::PathBuf;

use thiserror::Error;

use super::codec::FormatError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("no saved character named {name:?}")]
    CharacterNotFound { name: String },

    /// The save exists but could not be read, or a write did not complete.
    #[error("save for {name:?} at {} is unusable: {source}", .path.display())]
    SaveCorrupted {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The save is readable but does not describe a valid character.
    #[error("invalid save data for {name:?}: {source}")]
    InvalidSaveData {
        name: String,
        #[source]
        source: FormatError,
    },

    #[error("character repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RepositoryError {
    pub(crate) fn not_found(name: &str) -> Self {
        Self::CharacterNotFound {
            name: name.to_string(),
        }
    }

    pub(crate) fn invalid(name: &str, source: impl Into<FormatError>) -> Self {
        Self::InvalidSaveData {
            name: name.to_string(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

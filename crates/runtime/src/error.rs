//! Errors surfaced by [`crate::CharacterService`].

use chronicle_core::{CharacterError, ErrorSeverity, GameError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error("item {name:?} is not in the catalog")]
    UnknownItem { name: String },
}

impl RuntimeError {
    /// Rule violation from the core, if this is one.
    pub fn as_character_error(&self) -> Option<&CharacterError> {
        match self {
            Self::Character(err) => Some(err),
            _ => None,
        }
    }

    /// How a caller should treat the failure.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Character(err) => err.severity(),
            Self::UnknownItem { .. } => ErrorSeverity::Recoverable,
            Self::Repository(RepositoryError::CharacterNotFound { .. }) => {
                ErrorSeverity::Recoverable
            }
            Self::Repository(RepositoryError::InvalidSaveData { .. }) => ErrorSeverity::Validation,
            Self::Repository(_) => ErrorSeverity::Internal,
        }
    }
}

//! Persistence and catalog plumbing around `chronicle-core`.
//!
//! Modules are organized by responsibility:
//! - [`repository`] saves and loads characters, as text files or in memory
//! - [`oracle`] serves item definitions to the core rules
//! - [`service`] combines both behind a name-based API
//! - [`config`] resolves where saves live
pub mod config;
pub mod error;
pub mod oracle;
pub mod repository;
pub mod service;

pub use config::StorageConfig;
pub use error::{Result, RuntimeError};
pub use oracle::ItemOracleImpl;
pub use repository::{
    CharacterRepository, FileCharacterRepository, FormatError, InMemoryCharacterRepository,
    RepositoryError,
};
pub use service::CharacterService;

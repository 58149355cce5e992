//! Repository layer for saved characters.
//!
//! Repositories hold data that changes during play. Static content such as
//! the item catalog is served by oracles instead.

pub mod codec;
mod error;
mod file;
mod memory;
mod traits;

pub use codec::FormatError;
pub use error::{RepositoryError, Result};
pub use file::FileCharacterRepository;
pub use memory::InMemoryCharacterRepository;
pub use traits::CharacterRepository;

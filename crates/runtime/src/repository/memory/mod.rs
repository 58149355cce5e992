//! In-memory repository implementations for tests and local runs.

mod character;

pub use character::InMemoryCharacterRepository;

//! In-memory CharacterRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chronicle_core::{Character, check_character};

use crate::repository::codec;
use crate::repository::{CharacterRepository, RepositoryError, Result};

/// In-memory implementation of CharacterRepository.
///
/// Saves are kept in their encoded text form, so a load exercises the same
/// decode and validation path as the file repository.
pub struct InMemoryCharacterRepository {
    saves: RwLock<BTreeMap<String, String>>,
}

impl InMemoryCharacterRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            saves: RwLock::new(BTreeMap::new()),
        }
    }

    /// Stores raw save text under `name` without checking it.
    pub fn insert_raw(&self, name: impl Into<String>, text: impl Into<String>) -> Result<()> {
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.insert(name.into(), text.into());
        Ok(())
    }
}

impl Default for InMemoryCharacterRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRepository for InMemoryCharacterRepository {
    fn save(&self, character: &Character) -> Result<()> {
        check_character(character).map_err(|e| RepositoryError::invalid(character.name(), e))?;
        self.insert_raw(character.name(), codec::encode(character))
    }

    fn load(&self, name: &str) -> Result<Character> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let text = saves
            .get(name)
            .ok_or_else(|| RepositoryError::not_found(name))?;
        codec::decode_named(name, text).map_err(|e| RepositoryError::invalid(name, e))
    }

    fn exists(&self, name: &str) -> bool {
        self.saves
            .read()
            .map(|saves| saves.contains_key(name))
            .unwrap_or(false)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(name))
    }

    fn list(&self) -> Result<Vec<String>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.keys().cloned().collect())
    }
}

//! Repository contract for saved characters.

use chronicle_core::Character;

use super::Result;

/// Durable store of characters keyed by name.
///
/// Implementations validate on both sides: `save` refuses a character that
/// breaks an invariant and `load` only returns characters that pass the
/// validator.
pub trait CharacterRepository: Send + Sync {
    /// Save a character, overwriting any previous save under the same name.
    fn save(&self, character: &Character) -> Result<()>;

    /// Load the character saved under `name`.
    fn load(&self, name: &str) -> Result<Character>;

    /// Check if a save exists for `name`.
    fn exists(&self, name: &str) -> bool;

    /// Delete the save for `name`; fails with `CharacterNotFound` if absent.
    fn delete(&self, name: &str) -> Result<()>;

    /// Names of all saved characters, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

//! Authoritative character state representation.
//!
//! This module owns the character record and its building blocks. Callers
//! read it freely but mutate it exclusively through the engines in
//! [`crate::engine`].
mod character;
mod class;
mod equipment;
mod inventory;

pub use character::{Character, CharacterRecord};
pub use class::CharacterClass;
pub use equipment::{EquipSlot, EquippedItem, Equipment};
pub use inventory::Inventory;

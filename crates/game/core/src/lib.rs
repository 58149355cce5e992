//! Character rules for a single-player text role-playing game.
//!
//! `chronicle-core` defines the character record, the class table, and the
//! rules that mutate it: experience and leveling, healing and death, gold,
//! inventory, equipment and shop trades. It performs no I/O; persistence and
//! catalog loading live in `chronicle-runtime` and `chronicle-content`.
//!
//! A typical flow: [`create_character`] produces a record, the methods added
//! by [`engine`] mutate it, and [`validate_character`] gates it before it is
//! written or after it is read back.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod factory;
pub mod state;
pub mod validation;

pub use config::{BaseStats, GameConfig};
pub use env::{EffectParseError, ItemDefinition, ItemEffect, ItemKind, ItemOracle, StatKind};
pub use error::{CharacterError, ErrorSeverity, GameError, ValidationError};
pub use factory::create_character;
pub use state::{
    Character, CharacterClass, CharacterRecord, EquipSlot, EquippedItem, Equipment, Inventory,
};
pub use validation::{check_character, validate_character, validate_name};

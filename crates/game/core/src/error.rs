//! Error types raised by the character rules.
//!
//! Every rejected mutation leaves the character untouched and reports one of
//! the [`CharacterError`] kinds. Schema problems found by the validator are
//! described by [`ValidationError`] and surface as
//! [`CharacterError::InvalidSaveData`].
//!
//! # Design Principles
//!
//! - **Type Safety**: each failure kind is its own variant, never a string
//! - **Severity Classification**: errors are categorized so callers can decide
//!   between "tell the player" and "this record is broken"

use crate::env::ItemKind;
use crate::state::EquipSlot;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the request was refused but the character is fine; the
///   player can try something else (buy a cheaper item, drop an item first)
/// - **Validation**: invalid input or a schema-violating record
/// - **Internal**: storage or bookkeeping failure outside the rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Refused by a game rule; retrying with different input may succeed.
    ///
    /// Examples: inventory full, not enough gold
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown class name, malformed save file
    Validation,

    /// Failure outside the game rules.
    ///
    /// Examples: disk write failed, lock poisoned
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a failure outside the rules.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all chronicle errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for presenting localized messages and for assertions in tests.
    fn error_code(&self) -> &'static str;
}

/// Failures reported by the factory, the mutation engines and the validator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    /// Class name is not one of Warrior, Mage, Rogue, Cleric.
    #[error("invalid character class '{name}'")]
    InvalidClass { name: String },

    /// Operation is forbidden while health is zero.
    #[error("{name} is dead")]
    CharacterDead { name: String },

    /// Inventory already holds the maximum number of items.
    #[error("inventory is full (max: {capacity})")]
    InventoryFull { capacity: usize },

    /// Item is not held in the inventory.
    #[error("item '{item}' not found in inventory")]
    ItemNotFound { item: String },

    /// Item record kind does not fit the requested use.
    #[error("item '{item}' is a {actual}, expected a {expected}")]
    InvalidItemType {
        item: String,
        expected: ItemKind,
        actual: ItemKind,
    },

    /// Spending more gold than the character owns.
    #[error("not enough gold (required: {required}, available: {available})")]
    InsufficientGold { required: u64, available: u32 },

    /// Record violates the character schema.
    #[error("invalid character data: {0}")]
    InvalidSaveData(#[from] ValidationError),
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        use CharacterError::*;
        match self {
            InvalidClass { .. } | InvalidSaveData(_) => ErrorSeverity::Validation,

            CharacterDead { .. }
            | InventoryFull { .. }
            | ItemNotFound { .. }
            | InvalidItemType { .. }
            | InsufficientGold { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use CharacterError::*;
        match self {
            InvalidClass { .. } => "CHARACTER_INVALID_CLASS",
            CharacterDead { .. } => "CHARACTER_DEAD",
            InventoryFull { .. } => "CHARACTER_INVENTORY_FULL",
            ItemNotFound { .. } => "CHARACTER_ITEM_NOT_FOUND",
            InvalidItemType { .. } => "CHARACTER_INVALID_ITEM_TYPE",
            InsufficientGold { .. } => "CHARACTER_INSUFFICIENT_GOLD",
            InvalidSaveData(_) => "CHARACTER_INVALID_SAVE_DATA",
        }
    }
}

/// Specific schema violations found by [`crate::validate_character`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is empty")]
    EmptyName,

    /// Name cannot be used as a save-slot key.
    #[error("name '{name}' {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("level must be at least 1")]
    ZeroLevel,

    #[error("max_health must be positive")]
    ZeroMaxHealth,

    #[error("health {health} exceeds max_health {max_health}")]
    HealthAboveMax { health: u32, max_health: u32 },

    #[error("inventory holds {len} items (max: {max})")]
    InventoryOverflow { len: usize, max: usize },

    /// List entry or equipped name that the save format cannot represent.
    #[error("{field} entry '{entry}' is empty or contains a comma or line break")]
    InvalidEntry { field: &'static str, entry: String },

    #[error("equipped {slot} '{item}' is not in the inventory")]
    EquippedItemNotHeld { slot: EquipSlot, item: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_refusals_are_recoverable() {
        let err = CharacterError::InventoryFull { capacity: 20 };
        assert!(err.severity().is_recoverable());
        assert_eq!(err.error_code(), "CHARACTER_INVENTORY_FULL");
    }

    #[test]
    fn schema_violations_are_validation_errors() {
        let err: CharacterError = ValidationError::ZeroLevel.into();
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(
            err.to_string(),
            "invalid character data: level must be at least 1"
        );
    }
}

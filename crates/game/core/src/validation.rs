//! Structural checks a character must pass before it is trusted.
//!
//! Numeric types and field presence are guaranteed by [`Character`] itself;
//! what remains are the cross-field invariants and the restrictions the
//! text save format places on names and list entries.

use crate::config::GameConfig;
use crate::error::{CharacterError, ValidationError};
use crate::state::Character;

/// Checks every character invariant.
///
/// Used as a gate after creation and after load, and by persistence before
/// every write.
pub fn validate_character(character: &Character) -> Result<(), CharacterError> {
    check_character(character).map_err(CharacterError::InvalidSaveData)
}

/// Same checks as [`validate_character`], reporting the bare [`ValidationError`].
pub fn check_character(character: &Character) -> Result<(), ValidationError> {
    validate_name(&character.name)?;

    if character.level < 1 {
        return Err(ValidationError::ZeroLevel);
    }
    if character.max_health == 0 {
        return Err(ValidationError::ZeroMaxHealth);
    }
    if character.health > character.max_health {
        return Err(ValidationError::HealthAboveMax {
            health: character.health,
            max_health: character.max_health,
        });
    }
    if character.inventory.len() > GameConfig::MAX_INVENTORY_SIZE {
        return Err(ValidationError::InventoryOverflow {
            len: character.inventory.len(),
            max: GameConfig::MAX_INVENTORY_SIZE,
        });
    }

    validate_entries("inventory", character.inventory.iter())?;
    validate_entries(
        "active_quests",
        character.active_quests.iter().map(String::as_str),
    )?;
    validate_entries(
        "completed_quests",
        character.completed_quests.iter().map(String::as_str),
    )?;

    for (slot, item) in character.equipment.iter() {
        validate_entries("equipment", [item.name.as_str()])?;
        if !character.inventory.contains(&item.name) {
            return Err(ValidationError::EquippedItemNotHeld {
                slot,
                item: item.name.clone(),
            });
        }
    }

    Ok(())
}

/// Checks that `name` can key a save slot.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let invalid = |reason| ValidationError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.trim() != name {
        return Err(invalid("has leading or trailing whitespace"));
    }
    if name.chars().any(|c| c.is_control()) {
        return Err(invalid("contains control characters"));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(invalid("is not a valid file name"));
    }
    if name.contains(',') {
        return Err(invalid("contains a comma"));
    }
    Ok(())
}

fn validate_entries<'a>(
    field: &'static str,
    entries: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    for entry in entries {
        if entry.is_empty() || entry.contains([',', '\n', '\r']) {
            return Err(ValidationError::InvalidEntry {
                field,
                entry: entry.to_string(),
            });
        }
    }
    Ok(())
}

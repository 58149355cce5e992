//! Character creation.

use crate::error::CharacterError;
use crate::state::{Character, CharacterClass};

/// Creates a new level 1 character from a user-supplied class name.
///
/// Fails with [`CharacterError::InvalidClass`] for anything other than
/// Warrior, Mage, Rogue or Cleric. The name is not checked here; run
/// [`crate::validate_character`] before trusting it as a save-slot key.
pub fn create_character(name: &str, class: &str) -> Result<Character, CharacterError> {
    let class = CharacterClass::parse(class)?;
    Ok(Character::new(name, class))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn new_characters_start_fresh() {
        for class in ["Warrior", "Mage", "Rogue", "Cleric"] {
            let character = create_character("Nim", class).unwrap();
            assert_eq!(character.health(), character.max_health());
            assert_eq!(character.level(), 1);
            assert_eq!(character.experience(), 0);
            assert_eq!(character.gold(), GameConfig::STARTING_GOLD);
            assert!(character.inventory().is_empty());
            assert!(character.active_quests().is_empty());
            assert!(character.completed_quests().is_empty());
            assert!(character.equipment().iter().next().is_none());
        }
    }

    #[test]
    fn class_table_is_applied() {
        let warrior = create_character("Aragon", "Warrior").unwrap();
        assert_eq!(warrior.class(), CharacterClass::Warrior);
        assert_eq!(warrior.max_health(), 120);
        assert_eq!(warrior.strength(), 15);
        assert_eq!(warrior.magic(), 5);
        assert_eq!(warrior.defense(), 5);

        let mage = create_character("Lyra", "mage").unwrap();
        assert_eq!(mage.max_health(), 80);
        assert_eq!(mage.magic(), 20);
    }

    #[test]
    fn unknown_class_is_rejected() {
        assert_eq!(
            create_character("Grim", "Necromancer"),
            Err(CharacterError::InvalidClass {
                name: "Necromancer".to_string()
            })
        );
    }
}

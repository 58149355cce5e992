//! Character classes.

use core::str::FromStr;

use crate::config::{BaseStats, GameConfig};
use crate::error::CharacterError;

/// Playable class, fixed at creation.
///
/// Parsing is ASCII case-insensitive so `"mage"` and `"Mage"` both resolve;
/// the canonical form (used in save files) is the capitalized variant name.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CharacterClass {
    /// Front-line fighter with the deepest health pool.
    Warrior,
    /// Spellcaster, fragile but with the highest magic.
    Mage,
    /// Balanced skirmisher.
    Rogue,
    /// Healer with solid health and magic.
    Cleric,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Rogue,
        CharacterClass::Cleric,
    ];

    /// Resolves a user-supplied class name.
    pub fn parse(name: &str) -> Result<Self, CharacterError> {
        Self::from_str(name.trim()).map_err(|_| CharacterError::InvalidClass {
            name: name.to_string(),
        })
    }

    pub const fn base_stats(self) -> BaseStats {
        GameConfig::base_stats(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case() {
        assert_eq!(CharacterClass::parse("warrior"), Ok(CharacterClass::Warrior));
        assert_eq!(CharacterClass::parse("CLERIC"), Ok(CharacterClass::Cleric));
        assert_eq!(CharacterClass::parse(" Rogue "), Ok(CharacterClass::Rogue));
    }

    #[test]
    fn parse_rejects_unknown_class() {
        let err = CharacterClass::parse("Necromancer").unwrap_err();
        assert_eq!(
            err,
            CharacterError::InvalidClass {
                name: "Necromancer".to_string()
            }
        );
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(CharacterClass::Mage.to_string(), "Mage");
        assert_eq!(CharacterClass::Rogue.as_ref(), "Rogue");
    }
}

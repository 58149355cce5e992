//! The character record.

use crate::config::GameConfig;
use crate::env::StatKind;
use crate::error::ValidationError;
use crate::state::{CharacterClass, EquipSlot, EquippedItem, Equipment, Inventory};
use crate::validation::check_character;

/// A player character.
///
/// Fields are only changed through the factory, the progression engine and
/// the inventory engine, so the invariants checked by
/// [`crate::validate_character`] hold after every successful call. `strength` and
/// `defense` are base values; equipment bonuses are added on read by
/// [`Character::effective_strength`] and [`Character::effective_defense`].
///
/// With the `serde` feature, a character serializes as its
/// [`CharacterRecord`] and deserializes through [`Character::from_record`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CharacterRecord", into = "CharacterRecord")
)]
pub struct Character {
    pub(crate) name: String,
    pub(crate) class: CharacterClass,
    pub(crate) level: u32,
    pub(crate) experience: u32,
    pub(crate) health: u32,
    pub(crate) max_health: u32,
    pub(crate) strength: u32,
    pub(crate) magic: u32,
    pub(crate) defense: u32,
    pub(crate) gold: u32,
    pub(crate) inventory: Inventory,
    pub(crate) equipment: Equipment,
    pub(crate) active_quests: Vec<String>,
    pub(crate) completed_quests: Vec<String>,
}

impl Character {
    /// Creates a level 1 character with the class base stats.
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        let base = GameConfig::base_stats(class);
        Self {
            name: name.into(),
            class,
            level: GameConfig::STARTING_LEVEL,
            experience: 0,
            health: base.health,
            max_health: base.health,
            strength: base.strength,
            magic: base.magic,
            defense: GameConfig::BASE_DEFENSE,
            gold: GameConfig::STARTING_GOLD,
            inventory: Inventory::empty(),
            equipment: Equipment::empty(),
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
        }
    }

    /// Rebuilds a character from a stored record.
    ///
    /// The result is validated; a record that breaks any invariant is
    /// rejected with the specific [`ValidationError`].
    pub fn from_record(record: CharacterRecord) -> Result<Self, ValidationError> {
        let character = Self {
            name: record.name,
            class: record.class,
            level: record.level,
            experience: record.experience,
            health: record.health,
            max_health: record.max_health,
            strength: record.strength,
            magic: record.magic,
            defense: record.defense,
            gold: record.gold,
            inventory: Inventory::from_items(record.inventory)?,
            equipment: Equipment {
                weapon: record.equipped_weapon,
                armor: record.equipped_armor,
            },
            active_quests: record.active_quests,
            completed_quests: record.completed_quests,
        };
        check_character(&character)?;
        Ok(character)
    }

    /// Flattens the character into its stored form.
    pub fn to_record(&self) -> CharacterRecord {
        CharacterRecord {
            name: self.name.clone(),
            class: self.class,
            level: self.level,
            health: self.health,
            max_health: self.max_health,
            strength: self.strength,
            magic: self.magic,
            defense: self.defense,
            experience: self.experience,
            gold: self.gold,
            inventory: self.inventory.as_slice().to_vec(),
            equipped_weapon: self.equipment.weapon.clone(),
            equipped_armor: self.equipment.armor.clone(),
            active_quests: self.active_quests.clone(),
            completed_quests: self.completed_quests.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Experience still needed to reach the next level.
    pub fn experience_to_next_level(&self) -> u32 {
        GameConfig::level_threshold(self.level).saturating_sub(self.experience)
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Base strength, without equipment.
    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn magic(&self) -> u32 {
        self.magic
    }

    /// Base defense, without equipment.
    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn effective_strength(&self) -> u32 {
        self.strength
            .saturating_add(self.equipment.bonus(StatKind::Strength))
    }

    pub fn effective_defense(&self) -> u32 {
        self.defense
            .saturating_add(self.equipment.bonus(StatKind::Defense))
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn equipped(&self, slot: EquipSlot) -> Option<&EquippedItem> {
        self.equipment.slot(slot)
    }

    pub fn active_quests(&self) -> &[String] {
        &self.active_quests
    }

    pub fn completed_quests(&self) -> &[String] {
        &self.completed_quests
    }

    /// Append access for the quest collaborator. Entries are opaque here;
    /// persistence re-validates them before writing.
    pub fn active_quests_mut(&mut self) -> &mut Vec<String> {
        &mut self.active_quests
    }

    pub fn completed_quests_mut(&mut self) -> &mut Vec<String> {
        &mut self.completed_quests
    }
}

impl TryFrom<CharacterRecord> for Character {
    type Error = ValidationError;

    fn try_from(record: CharacterRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

impl From<Character> for CharacterRecord {
    fn from(character: Character) -> Self {
        character.to_record()
    }
}

/// Fixed-schema stored form of a [`Character`].
///
/// Every field is required. Persistence formats decode into this struct and
/// hand it to [`Character::from_record`], which enforces the invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterRecord {
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
    pub defense: u32,
    pub experience: u32,
    pub gold: u32,
    pub inventory: Vec<String>,
    pub equipped_weapon: Option<EquippedItem>,
    pub equipped_armor: Option<EquippedItem>,
    pub active_quests: Vec<String>,
    pub completed_quests: Vec<String>,
}

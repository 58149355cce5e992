//! Text save format.
//!
//! One `KEY: VALUE` pair per line, lists comma-joined without escaping:
//!
//! ```text
//! NAME: Aragon
//! CLASS: Warrior
//! LEVEL: 3
//! HEALTH: 140
//! MAX_HEALTH: 140
//! STRENGTH: 19
//! MAGIC: 9
//! DEFENSE: 5
//! EXPERIENCE: 50
//! GOLD: 100
//! INVENTORY: Health Potion,Iron Sword
//! EQUIPPED_WEAPON: Iron Sword
//! WEAPON_BONUS: strength:5
//! EQUIPPED_ARMOR:
//! ARMOR_BONUS:
//! ACTIVE_QUESTS: rat_cellar
//! COMPLETED_QUESTS:
//! ```
//!
//! Keys are written in this order but may appear in any order when read.
//! Every key is required exactly once; blank lines are ignored. Decoded
//! records go through [`Character::from_record`], so anything that loads
//! also passes the validator.

use std::collections::HashMap;
use std::fmt::Write as _;

use chronicle_core::{
    Character, CharacterClass, CharacterRecord, EffectParseError, EquippedItem, ItemEffect,
    ValidationError,
};
use thiserror::Error;

const NAME: &str = "NAME";
const CLASS: &str = "CLASS";
const LEVEL: &str = "LEVEL";
const HEALTH: &str = "HEALTH";
const MAX_HEALTH: &str = "MAX_HEALTH";
const STRENGTH: &str = "STRENGTH";
const MAGIC: &str = "MAGIC";
const DEFENSE: &str = "DEFENSE";
const EXPERIENCE: &str = "EXPERIENCE";
const GOLD: &str = "GOLD";
const INVENTORY: &str = "INVENTORY";
const EQUIPPED_WEAPON: &str = "EQUIPPED_WEAPON";
const WEAPON_BONUS: &str = "WEAPON_BONUS";
const EQUIPPED_ARMOR: &str = "EQUIPPED_ARMOR";
const ARMOR_BONUS: &str = "ARMOR_BONUS";
const ACTIVE_QUESTS: &str = "ACTIVE_QUESTS";
const COMPLETED_QUESTS: &str = "COMPLETED_QUESTS";

/// Every key of the format, in write order.
pub const KEYS: [&str; 17] = [
    NAME,
    CLASS,
    LEVEL,
    HEALTH,
    MAX_HEALTH,
    STRENGTH,
    MAGIC,
    DEFENSE,
    EXPERIENCE,
    GOLD,
    INVENTORY,
    EQUIPPED_WEAPON,
    WEAPON_BONUS,
    EQUIPPED_ARMOR,
    ARMOR_BONUS,
    ACTIVE_QUESTS,
    COMPLETED_QUESTS,
];

/// Ways a readable save can violate the schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line {line}: expected 'KEY: VALUE', found {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: unknown field {key:?}")]
    UnknownField { line: usize, key: String },

    #[error("line {line}: duplicate field {key}")]
    DuplicateField { line: usize, key: &'static str },

    #[error("missing field {0}")]
    MissingField(&'static str),

    #[error("field {key}: {value:?} is not a non-negative integer")]
    InvalidNumber { key: &'static str, value: String },

    #[error("field CLASS: unknown class {0:?}")]
    InvalidClass(String),

    #[error("field {key}: {source}")]
    InvalidEffect {
        key: &'static str,
        #[source]
        source: EffectParseError,
    },

    #[error("field {key} is set but no item is equipped")]
    BonusWithoutItem { key: &'static str },

    #[error("save for {expected:?} holds character {found:?}")]
    NameMismatch { expected: String, found: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Renders a character in the text save format.
pub fn encode(character: &Character) -> String {
    let record = character.to_record();
    let mut out = String::new();

    let mut field = |key: &str, value: &dyn std::fmt::Display| {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{key}: {value}");
    };

    field(NAME, &record.name);
    field(CLASS, &record.class);
    field(LEVEL, &record.level);
    field(HEALTH, &record.health);
    field(MAX_HEALTH, &record.max_health);
    field(STRENGTH, &record.strength);
    field(MAGIC, &record.magic);
    field(DEFENSE, &record.defense);
    field(EXPERIENCE, &record.experience);
    field(GOLD, &record.gold);
    field(INVENTORY, &record.inventory.join(","));
    field(EQUIPPED_WEAPON, &slot_name(&record.equipped_weapon));
    field(WEAPON_BONUS, &slot_bonus(&record.equipped_weapon));
    field(EQUIPPED_ARMOR, &slot_name(&record.equipped_armor));
    field(ARMOR_BONUS, &slot_bonus(&record.equipped_armor));
    field(ACTIVE_QUESTS, &record.active_quests.join(","));
    field(COMPLETED_QUESTS, &record.completed_quests.join(","));

    out
}

fn slot_name(item: &Option<EquippedItem>) -> String {
    item.as_ref().map(|item| item.name.clone()).unwrap_or_default()
}

fn slot_bonus(item: &Option<EquippedItem>) -> String {
    item.as_ref()
        .and_then(|item| item.bonus)
        .map(|bonus| bonus.to_string())
        .unwrap_or_default()
}

/// Parses text produced by [`encode`] back into a validated character.
pub fn decode(text: &str) -> Result<Character, FormatError> {
    let fields = Fields::parse(text)?;

    let record = CharacterRecord {
        name: fields.get(NAME)?.to_string(),
        class: CharacterClass::parse(fields.get(CLASS)?)
            .map_err(|_| FormatError::InvalidClass(fields.raw(CLASS)))?,
        level: fields.number(LEVEL)?,
        health: fields.number(HEALTH)?,
        max_health: fields.number(MAX_HEALTH)?,
        strength: fields.number(STRENGTH)?,
        magic: fields.number(MAGIC)?,
        defense: fields.number(DEFENSE)?,
        experience: fields.number(EXPERIENCE)?,
        gold: fields.number(GOLD)?,
        inventory: fields.list(INVENTORY)?,
        equipped_weapon: fields.slot(EQUIPPED_WEAPON, WEAPON_BONUS)?,
        equipped_armor: fields.slot(EQUIPPED_ARMOR, ARMOR_BONUS)?,
        active_quests: fields.list(ACTIVE_QUESTS)?,
        completed_quests: fields.list(COMPLETED_QUESTS)?,
    };

    Ok(Character::from_record(record)?)
}

/// Decodes the save stored under `name`, which must also be the name inside it.
pub fn decode_named(name: &str, text: &str) -> Result<Character, FormatError> {
    let character = decode(text)?;
    if character.name() != name {
        return Err(FormatError::NameMismatch {
            expected: name.to_string(),
            found: character.name().to_string(),
        });
    }
    Ok(character)
}

/// Raw `KEY -> VALUE` view of a save file.
struct Fields<'a> {
    values: HashMap<&'static str, &'a str>,
}

impl<'a> Fields<'a> {
    fn parse(text: &'a str) -> Result<Self, FormatError> {
        let mut values = HashMap::with_capacity(KEYS.len());

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let (key, value) = line.split_once(':').ok_or_else(|| FormatError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            })?;

            let key = key.trim();
            let key = KEYS
                .iter()
                .copied()
                .find(|known| *known == key)
                .ok_or_else(|| FormatError::UnknownField {
                    line: line_no,
                    key: key.to_string(),
                })?;

            // Exactly one separator space belongs to the format, the rest is data.
            let value = value.strip_prefix(' ').unwrap_or(value);
            if values.insert(key, value).is_some() {
                return Err(FormatError::DuplicateField { line: line_no, key });
            }
        }

        Ok(Self { values })
    }

    fn get(&self, key: &'static str) -> Result<&'a str, FormatError> {
        self.values
            .get(key)
            .copied()
            .ok_or(FormatError::MissingField(key))
    }

    fn raw(&self, key: &'static str) -> String {
        self.values.get(key).map(|v| v.to_string()).unwrap_or_default()
    }

    fn number(&self, key: &'static str) -> Result<u32, FormatError> {
        let value = self.get(key)?;
        value.trim().parse().map_err(|_| FormatError::InvalidNumber {
            key,
            value: value.to_string(),
        })
    }

    fn list(&self, key: &'static str) -> Result<Vec<String>, FormatError> {
        let value = self.get(key)?;
        if value.is_empty() {
            return Ok(Vec::new());
        }
        Ok(value.split(',').map(str::to_string).collect())
    }

    fn slot(
        &self,
        name_key: &'static str,
        bonus_key: &'static str,
    ) -> Result<Option<EquippedItem>, FormatError> {
        let name = self.get(name_key)?;
        let bonus = self.get(bonus_key)?.trim();

        if name.is_empty() {
            if !bonus.is_empty() {
                return Err(FormatError::BonusWithoutItem { key: bonus_key });
            }
            return Ok(None);
        }

        let bonus = if bonus.is_empty() {
            None
        } else {
            Some(
                bonus
                    .parse::<ItemEffect>()
                    .map_err(|source| FormatError::InvalidEffect {
                        key: bonus_key,
                        source,
                    })?,
            )
        };
        Ok(Some(EquippedItem::new(name, bonus)))
    }
}

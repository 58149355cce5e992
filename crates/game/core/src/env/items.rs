//! Item catalog contract.
//!
//! Item records are owned by an external catalog; the rules only read them.
//! Effects arrive as `"<stat>:<amount>"` strings in catalog data and are
//! decoded into [`ItemEffect`] once, when the record is loaded.

use core::fmt;
use core::str::FromStr;

/// Read-only lookup of item records by name.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, name: &str) -> Option<ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<ItemDefinition>;
}

/// Catalog record for one item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<ItemEffect>,
    pub cost: u32,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, kind: ItemKind, effect: Option<ItemEffect>, cost: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            effect,
            cost,
        }
    }

    /// Gold paid to the seller: half the cost, rounded down.
    pub const fn sell_price(&self) -> u32 {
        self.cost / 2
    }
}

/// What an item is used for.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ItemKind {
    /// Used up on use (potions, tonics).
    Consumable,
    /// Goes into the weapon slot.
    Weapon,
    /// Goes into the armor slot.
    Armor,
}

/// Stat an item effect touches.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatKind {
    Health,
    Strength,
    Defense,
}

/// Decoded item effect, e.g. `health:20`.
///
/// Serialized in its string form so catalogs stay readable:
/// ```ron
/// (name: "Health Potion", kind: Consumable, effect: Some("health:20"), cost: 25)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ItemEffect {
    pub kind: StatKind,
    pub amount: u32,
}

impl ItemEffect {
    pub const fn new(kind: StatKind, amount: u32) -> Self {
        Self { kind, amount }
    }

    pub const fn health(amount: u32) -> Self {
        Self::new(StatKind::Health, amount)
    }

    pub const fn strength(amount: u32) -> Self {
        Self::new(StatKind::Strength, amount)
    }

    pub const fn defense(amount: u32) -> Self {
        Self::new(StatKind::Defense, amount)
    }
}

impl fmt::Display for ItemEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.amount)
    }
}

/// Malformed `"<stat>:<amount>"` string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid item effect '{input}': {reason}")]
pub struct EffectParseError {
    pub input: String,
    pub reason: &'static str,
}

impl FromStr for ItemEffect {
    type Err = EffectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason| EffectParseError {
            input: s.to_string(),
            reason,
        };

        let (stat, amount) = s.split_once(':').ok_or_else(|| fail("expected <stat>:<amount>"))?;
        let kind = StatKind::from_str(stat.trim()).map_err(|_| fail("unknown stat"))?;
        let amount = amount
            .trim()
            .parse::<u32>()
            .map_err(|_| fail("amount is not a non-negative integer"))?;

        Ok(Self { kind, amount })
    }
}

impl TryFrom<String> for ItemEffect {
    type Error = EffectParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemEffect> for String {
    fn from(effect: ItemEffect) -> Self {
        effect.to_string()
    }
}

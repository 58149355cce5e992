//! Equipment slots.
//!
//! Each slot remembers the item name together with the bonus it grants, so
//! effective stats can be recomputed without consulting the catalog and a
//! replaced item takes its bonus with it.

use crate::env::{ItemEffect, ItemKind, StatKind};

/// One of the two equipment slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum EquipSlot {
    Weapon,
    Armor,
}

impl EquipSlot {
    /// Item kind accepted by this slot.
    pub const fn accepts(self) -> ItemKind {
        match self {
            Self::Weapon => ItemKind::Weapon,
            Self::Armor => ItemKind::Armor,
        }
    }

    /// Slot an item of `kind` goes into; consumables have none.
    pub const fn for_kind(kind: ItemKind) -> Option<Self> {
        match kind {
            ItemKind::Weapon => Some(Self::Weapon),
            ItemKind::Armor => Some(Self::Armor),
            ItemKind::Consumable => None,
        }
    }
}

/// Item currently occupying a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub name: String,
    pub bonus: Option<ItemEffect>,
}

impl EquippedItem {
    pub fn new(name: impl Into<String>, bonus: Option<ItemEffect>) -> Self {
        Self {
            name: name.into(),
            bonus,
        }
    }
}

/// Equipment state for a character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    /// Currently equipped weapon.
    pub weapon: Option<EquippedItem>,

    /// Currently equipped armor.
    pub armor: Option<EquippedItem>,
}

impl Equipment {
    /// Creates empty equipment (no weapon or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: EquipSlot) -> Option<&EquippedItem> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Armor => self.armor.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<EquippedItem> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
        }
    }

    /// Puts `item` into `slot`, returning the previously equipped item if any.
    pub fn equip(&mut self, slot: EquipSlot, item: EquippedItem) -> Option<EquippedItem> {
        self.slot_mut(slot).replace(item)
    }

    /// Empties `slot`, returning the item that was in it.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<EquippedItem> {
        self.slot_mut(slot).take()
    }

    /// Empties every slot holding an item called `name`.
    pub fn unequip_named(&mut self, name: &str) -> Vec<EquipSlot> {
        let mut cleared = Vec::new();
        for slot in [EquipSlot::Weapon, EquipSlot::Armor] {
            let entry = self.slot_mut(slot);
            if entry.as_ref().is_some_and(|item| item.name == name) {
                *entry = None;
                cleared.push(slot);
            }
        }
        cleared
    }

    /// Sum of equipped bonuses applying to `stat`.
    pub fn bonus(&self, stat: StatKind) -> u32 {
        self.iter()
            .filter_map(|(_, item)| item.bonus)
            .filter(|effect| effect.kind == stat)
            .fold(0u32, |total, effect| total.saturating_add(effect.amount))
    }

    /// Occupied slots in weapon, armor order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, &EquippedItem)> {
        [
            (EquipSlot::Weapon, self.weapon.as_ref()),
            (EquipSlot::Armor, self.armor.as_ref()),
        ]
        .into_iter()
        .filter_map(|(slot, item)| item.map(|item| (slot, item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_for_kind() {
        for slot in [EquipSlot::Weapon, EquipSlot::Armor] {
            assert_eq!(EquipSlot::for_kind(slot.accepts()), Some(slot));
        }
        assert_eq!(EquipSlot::for_kind(ItemKind::Consumable), None);
    }

    #[test]
    fn equip_replaces_previous_item() {
        let mut equipment = Equipment::empty();
        let old = equipment.equip(
            EquipSlot::Weapon,
            EquippedItem::new("Rusty Sword", Some(ItemEffect::strength(2))),
        );
        assert!(old.is_none());

        let old = equipment.equip(
            EquipSlot::Weapon,
            EquippedItem::new("Iron Sword", Some(ItemEffect::strength(5))),
        );
        assert_eq!(old.map(|item| item.name), Some("Rusty Sword".to_string()));
        assert_eq!(equipment.bonus(StatKind::Strength), 5);
    }

    #[test]
    fn bonus_counts_effect_kind_not_slot() {
        let mut equipment = Equipment::empty();
        equipment.equip(
            EquipSlot::Weapon,
            EquippedItem::new("Warded Blade", Some(ItemEffect::defense(1))),
        );
        equipment.equip(
            EquipSlot::Armor,
            EquippedItem::new("Chain Mail", Some(ItemEffect::defense(4))),
        );
        assert_eq!(equipment.bonus(StatKind::Defense), 5);
        assert_eq!(equipment.bonus(StatKind::Strength), 0);
    }

    #[test]
    fn unequip_named_clears_matching_slots_only() {
        let mut equipment = Equipment::empty();
        equipment.equip(EquipSlot::Weapon, EquippedItem::new("Iron Sword", None));
        equipment.equip(EquipSlot::Armor, EquippedItem::new("Leather Armor", None));

        assert_eq!(equipment.unequip_named("Iron Sword"), vec![EquipSlot::Weapon]);
        assert!(equipment.weapon.is_none());
        assert!(equipment.armor.is_some());
    }
}

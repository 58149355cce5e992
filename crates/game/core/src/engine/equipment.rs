//! Weapon and armor slots.
//!
//! Equipping never edits base stats. The slot keeps the item's bonus and
//! effective stats add it on read, so swapping a sword for another replaces
//! its bonus instead of stacking both.

use crate::env::ItemDefinition;
use crate::error::CharacterError;
use crate::state::{Character, EquipSlot, EquippedItem};

impl Character {
    /// Equips a held item into `slot`, returning whatever was there before.
    pub fn equip(
        &mut self,
        slot: EquipSlot,
        item: &ItemDefinition,
    ) -> Result<Option<EquippedItem>, CharacterError> {
        self.ensure_held(&item.name)?;
        if item.kind != slot.accepts() {
            return Err(CharacterError::InvalidItemType {
                item: item.name.clone(),
                expected: slot.accepts(),
                actual: item.kind,
            });
        }
        Ok(self
            .equipment
            .equip(slot, EquippedItem::new(item.name.clone(), item.effect)))
    }

    pub fn equip_weapon(
        &mut self,
        item: &ItemDefinition,
    ) -> Result<Option<EquippedItem>, CharacterError> {
        self.equip(EquipSlot::Weapon, item)
    }

    pub fn equip_armor(
        &mut self,
        item: &ItemDefinition,
    ) -> Result<Option<EquippedItem>, CharacterError> {
        self.equip(EquipSlot::Armor, item)
    }

    /// Empties `slot`. The item stays in the inventory.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<EquippedItem> {
        self.equipment.unequip(slot)
    }

    pub fn unequip_weapon(&mut self) -> Option<EquippedItem> {
        self.unequip(EquipSlot::Weapon)
    }

    pub fn unequip_armor(&mut self) -> Option<EquippedItem> {
        self.unequip(EquipSlot::Armor)
    }
}

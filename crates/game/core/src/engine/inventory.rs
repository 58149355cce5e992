//! Inventory operations and consumables.

use crate::env::{ItemDefinition, ItemEffect, ItemKind, StatKind};
use crate::error::CharacterError;
use crate::state::Character;

impl Character {
    /// Appends `item` to the inventory.
    pub fn add_item(&mut self, item: &str) -> Result<(), CharacterError> {
        self.inventory.push(item)
    }

    /// Removes the first held `item`.
    ///
    /// If that was the last copy and it is equipped, the slot is cleared too.
    pub fn remove_item(&mut self, item: &str) -> Result<(), CharacterError> {
        if !self.inventory.remove_first(item) {
            return Err(CharacterError::ItemNotFound {
                item: item.to_string(),
            });
        }
        if !self.inventory.contains(item) {
            self.equipment.unequip_named(item);
        }
        Ok(())
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    pub fn item_count(&self, item: &str) -> usize {
        self.inventory.count(item)
    }

    pub(crate) fn ensure_held(&self, item: &str) -> Result<(), CharacterError> {
        if !self.has_item(item) {
            return Err(CharacterError::ItemNotFound {
                item: item.to_string(),
            });
        }
        Ok(())
    }

    /// Consumes one `item` and applies its effect.
    ///
    /// Health effects heal (clamped to `max_health`); strength and defense
    /// effects permanently raise the base stat. Returns the effect as
    /// actually applied, so a potion used at full health reports 0.
    pub fn use_item(
        &mut self,
        item: &ItemDefinition,
    ) -> Result<Option<ItemEffect>, CharacterError> {
        self.ensure_held(&item.name)?;
        if item.kind != ItemKind::Consumable {
            return Err(CharacterError::InvalidItemType {
                item: item.name.clone(),
                expected: ItemKind::Consumable,
                actual: item.kind,
            });
        }
        self.ensure_alive()?;

        let applied = item.effect.map(|effect| {
            let amount = match effect.kind {
                StatKind::Health => self.heal(effect.amount),
                StatKind::Strength => {
                    self.strength = self.strength.saturating_add(effect.amount);
                    effect.amount
                }
                StatKind::Defense => {
                    self.defense = self.defense.saturating_add(effect.amount);
                    effect.amount
                }
            };
            ItemEffect::new(effect.kind, amount)
        });

        self.remove_item(&item.name)?;
        Ok(applied)
    }
}

//! Character service: repository plus catalog behind one API.
//!
//! The core rules take item definitions; callers usually only have a name.
//! [`CharacterService`] resolves names through an [`ItemOracle`], applies the
//! rule, and reports notable outcomes through `tracing`.

use chronicle_core::{
    Character, EquipSlot, EquippedItem, ItemDefinition, ItemEffect, ItemOracle,
    create_character, validate_character,
};

use crate::error::{Result, RuntimeError};
use crate::repository::CharacterRepository;

pub struct CharacterService<R, O> {
    repository: R,
    items: O,
}

impl<R, O> CharacterService<R, O>
where
    R: CharacterRepository,
    O: ItemOracle,
{
    pub fn new(repository: R, items: O) -> Self {
        Self { repository, items }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn items(&self) -> &O {
        &self.items
    }

    /// Builds and validates a new character. Nothing is saved.
    pub fn create(&self, name: &str, class: &str) -> Result<Character> {
        let character = create_character(name, class)?;
        validate_character(&character)?;
        tracing::info!("Created {} {:?}", character.class(), character.name());
        Ok(character)
    }

    pub fn save(&self, character: &Character) -> Result<()> {
        Ok(self.repository.save(character)?)
    }

    pub fn load(&self, name: &str) -> Result<Character> {
        Ok(self.repository.load(name)?)
    }

    pub fn list(&self) -> Result<Vec<String>> {
        Ok(self.repository.list()?)
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        self.repository.delete(name)?;
        tracing::info!("Deleted character {:?}", name);
        Ok(())
    }

    /// Catalog entry for `name`.
    pub fn item(&self, name: &str) -> Result<ItemDefinition> {
        self.items
            .definition(name)
            .ok_or_else(|| RuntimeError::UnknownItem {
                name: name.to_string(),
            })
    }

    /// Buys one `item_name`, returning the gold left.
    pub fn purchase(&self, character: &mut Character, item_name: &str) -> Result<u32> {
        let item = self.item(item_name)?;
        let gold = character.purchase_item(&item)?;
        tracing::info!(
            "{} bought {} for {} gold ({} left)",
            character.name(),
            item.name,
            item.cost,
            gold
        );
        Ok(gold)
    }

    /// Sells one `item_name`, returning the gold received.
    pub fn sell(&self, character: &mut Character, item_name: &str) -> Result<u32> {
        let item = self.item(item_name)?;
        let price = character.sell_item(&item)?;
        tracing::info!("{} sold {} for {} gold", character.name(), item.name, price);
        Ok(price)
    }

    pub fn use_item(
        &self,
        character: &mut Character,
        item_name: &str,
    ) -> Result<Option<ItemEffect>> {
        let item = self.item(item_name)?;
        let effect = character.use_item(&item)?;
        tracing::debug!("{} used {}", character.name(), item.name);
        Ok(effect)
    }

    /// Equips `item_name` into the slot matching its kind.
    pub fn equip(
        &self,
        character: &mut Character,
        item_name: &str,
    ) -> Result<Option<EquippedItem>> {
        let item = self.item(item_name)?;
        // Consumables are offered to the weapon slot, which refuses them.
        let slot = EquipSlot::for_kind(item.kind).unwrap_or(EquipSlot::Weapon);
        let previous = character.equip(slot, &item)?;
        tracing::debug!("{} equipped {} as {}", character.name(), item.name, slot);
        Ok(previous)
    }

    /// Awards experience, returning the number of levels gained.
    pub fn award_experience(&self, character: &mut Character, amount: u32) -> Result<u32> {
        let levels = character.gain_experience(amount)?;
        if levels > 0 {
            tracing::info!(
                "{} reached level {} (+{})",
                character.name(),
                character.level(),
                levels
            );
        }
        Ok(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::ItemOracleImpl;
    use crate::repository::{InMemoryCharacterRepository, RepositoryError};
    use chronicle_core::{CharacterError, ItemKind, ValidationError};

    fn service() -> CharacterService<InMemoryCharacterRepository, ItemOracleImpl> {
        let items = ItemOracleImpl::from_definitions([
            ItemDefinition::new(
                "Health Potion",
                ItemKind::Consumable,
                Some(ItemEffect::health(20)),
                25,
            ),
            ItemDefinition::new("Iron Sword", ItemKind::Weapon, Some(ItemEffect::strength(5)), 50),
            ItemDefinition::new("Chain Mail", ItemKind::Armor, Some(ItemEffect::defense(6)), 90),
        ]);
        CharacterService::new(InMemoryCharacterRepository::new(), items)
    }

    #[test]
    fn create_rejects_unusable_name() {
        let service = service();
        assert!(matches!(
            service.create("", "Warrior"),
            Err(RuntimeError::Character(CharacterError::InvalidSaveData(
                ValidationError::EmptyName
            )))
        ));
        assert!(matches!(
            service.create("Aragon", "Necromancer"),
            Err(RuntimeError::Character(CharacterError::InvalidClass { .. }))
        ));
    }

    #[test]
    fn unknown_items_are_reported() {
        let service = service();
        let mut hero = service.create("Aragon", "Warrior").unwrap();
        assert!(matches!(
            service.purchase(&mut hero, "Vorpal Blade"),
            Err(RuntimeError::UnknownItem { .. })
        ));
        assert_eq!(hero.gold(), 100);
    }

    #[test]
    fn shop_and_equip_by_name() {
        let service = service();
        let mut hero = service.create("Aragon", "Warrior").unwrap();

        assert_eq!(service.purchase(&mut hero, "Iron Sword").unwrap(), 50);
        assert_eq!(service.equip(&mut hero, "Iron Sword").unwrap(), None);
        assert_eq!(hero.effective_strength(), hero.strength() + 5);

        assert_eq!(service.sell(&mut hero, "Iron Sword").unwrap(), 25);
        assert_eq!(hero.gold(), 75);
        assert!(hero.equipped(EquipSlot::Weapon).is_none());
    }

    #[test]
    fn consumables_cannot_be_equipped() {
        let service = service();
        let mut hero = service.create("Aragon", "Warrior").unwrap();
        service.purchase(&mut hero, "Health Potion").unwrap();

        assert!(matches!(
            service.equip(&mut hero, "Health Potion"),
            Err(RuntimeError::Character(CharacterError::InvalidItemType {
                actual: ItemKind::Consumable,
                ..
            }))
        ));
    }

    #[test]
    fn persistence_passes_through() {
        let service = service();
        let mut hero = service.create("Aragon", "Warrior").unwrap();
        assert_eq!(service.award_experience(&mut hero, 100).unwrap(), 1);

        service.save(&hero).unwrap();
        assert_eq!(service.list().unwrap(), vec!["Aragon"]);
        assert_eq!(service.load("Aragon").unwrap(), hero);

        service.delete("Aragon").unwrap();
        assert!(matches!(
            service.load("Aragon"),
            Err(RuntimeError::Repository(RepositoryError::CharacterNotFound { .. }))
        ));
    }
}

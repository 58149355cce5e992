//! Buying and selling.

use crate::env::ItemDefinition;
use crate::error::CharacterError;
use crate::state::Character;

impl Character {
    /// Buys one `item` at full cost.
    ///
    /// Returns the gold left. Nothing changes if the character cannot afford
    /// it or has no room for it.
    pub fn purchase_item(&mut self, item: &ItemDefinition) -> Result<u32, CharacterError> {
        if self.gold < item.cost {
            return Err(CharacterError::InsufficientGold {
                required: u64::from(item.cost),
                available: self.gold,
            });
        }
        self.add_item(&item.name)?;
        self.gold -= item.cost;
        Ok(self.gold)
    }

    /// Sells one held `item` for half its cost, rounded down.
    ///
    /// Returns the gold received.
    pub fn sell_item(&mut self, item: &ItemDefinition) -> Result<u32, CharacterError> {
        self.remove_item(&item.name)?;
        let price = item.sell_price();
        self.gold = self.gold.saturating_add(price);
        Ok(price)
    }
}

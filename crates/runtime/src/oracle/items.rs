//! Minimal [`chronicle_core::ItemOracle`] backed by an in-memory map.
use chronicle_core::{ItemDefinition, ItemOracle};
use std::collections::HashMap;

/// ItemOracle implementation with static item definitions
pub struct ItemOracleImpl {
    definitions: HashMap<String, ItemDefinition>,
}

impl ItemOracleImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Build from a loaded catalog. Later duplicates replace earlier ones.
    pub fn from_definitions(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut oracle = Self::new();
        for def in definitions {
            oracle.add_definition(def);
        }
        oracle
    }

    /// Add an item definition
    pub fn add_definition(&mut self, def: ItemDefinition) {
        self.definitions.insert(def.name.clone(), def);
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for ItemOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemOracle for ItemOracleImpl {
    fn definition(&self, name: &str) -> Option<ItemDefinition> {
        self.definitions.get(name).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        let mut all: Vec<_> = self.definitions.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_core::{ItemEffect, ItemKind};

    #[test]
    fn looks_up_by_exact_name() {
        let oracle = ItemOracleImpl::from_definitions([
            ItemDefinition::new("Iron Sword", ItemKind::Weapon, Some(ItemEffect::strength(5)), 50),
            ItemDefinition::new("Health Potion", ItemKind::Consumable, Some(ItemEffect::health(20)), 25),
        ]);

        assert_eq!(oracle.len(), 2);
        assert_eq!(oracle.definition("Iron Sword").unwrap().cost, 50);
        assert!(oracle.definition("iron sword").is_none());

        let names: Vec<_> = oracle.all_definitions().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Health Potion", "Iron Sword"]);
    }
}

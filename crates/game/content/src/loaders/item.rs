//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use chronicle_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// Effect strings are decoded here, so a bad `"<stat>:<amount>"` value is
    /// reported as a load error. Item names must be unique and usable as
    /// inventory entries (non-empty, no commas or line breaks).
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load item catalog {}: {}", path.display(), e))
    }

    /// Parse catalog RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for item in &catalog.items {
            if item.name.is_empty() || item.name.contains([',', '\n', '\r']) {
                anyhow::bail!("Invalid item name {:?}", item.name);
            }
            if !seen.insert(item.name.as_str()) {
                anyhow::bail!("Duplicate item name {:?}", item.name);
            }
        }

        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_core::{ItemEffect, ItemKind};

    #[test]
    fn parses_effect_strings() {
        let items = ItemLoader::parse(
            r#"(items: [
                (name: "Health Potion", kind: Consumable, effect: Some("health:20"), cost: 25),
                (name: "Lucky Coin", kind: Consumable, cost: 1),
            ])"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ItemKind::Consumable);
        assert_eq!(items[0].effect, Some(ItemEffect::health(20)));
        assert_eq!(items[1].effect, None);
    }

    #[test]
    fn rejects_bad_effect() {
        let result = ItemLoader::parse(
            r#"(items: [(name: "Odd Stone", kind: Consumable, effect: Some("luck:7"), cost: 1)])"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = ItemLoader::parse(
            r#"(items: [
                (name: "Iron Sword", kind: Weapon, effect: Some("strength:5"), cost: 50),
                (name: "Iron Sword", kind: Weapon, effect: Some("strength:6"), cost: 55),
            ])"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Duplicate"), "{err}");
    }
}

//! Content factory for locating and loading data files.

use std::path::{Path, PathBuf};

use chronicle_core::ItemDefinition;

use crate::loaders::{ItemLoader, LoadResult};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory for the shipped data directory.
    ///
    /// Uses `CONTENT_DATA_DIR` when set, otherwise this crate's `data/`
    /// directory.
    pub fn default_paths() -> Self {
        match std::env::var_os("CONTENT_DATA_DIR") {
            Some(dir) => Self::new(dir),
            None => Self::new(Self::bundled_data_dir()),
        }
    }

    /// The `data/` directory shipped with this crate.
    pub fn bundled_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicle_core::{ItemEffect, ItemKind};

    #[test]
    fn bundled_catalog_loads() {
        let items = ContentFactory::new(ContentFactory::bundled_data_dir())
            .load_items()
            .unwrap();

        let potion = items
            .iter()
            .find(|item| item.name == "Health Potion")
            .unwrap();
        assert_eq!(potion.kind, ItemKind::Consumable);
        assert_eq!(potion.effect, Some(ItemEffect::health(20)));

        for kind in [ItemKind::Consumable, ItemKind::Weapon, ItemKind::Armor] {
            assert!(items.iter().any(|item| item.kind == kind), "{kind}");
        }
    }

    #[test]
    fn missing_directory_is_an_error() {
        let factory = ContentFactory::new("/nonexistent/chronicle-data");
        assert!(factory.load_items().is_err());
    }
}

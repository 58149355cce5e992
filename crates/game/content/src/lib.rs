//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON data
//! files. Today that is the item catalog (`data/items.ron`); the catalog is
//! consumed through the runtime's item oracle and never appears in a save.
//!
//! Loaders use chronicle-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, ItemCatalog, ItemLoader};

//! Bounded inventory.
//!
//! Items are stored by name in pickup order. Duplicates are separate entries
//! and each one counts against the capacity.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::{CharacterError, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub(crate) items: ArrayVec<String, { GameConfig::MAX_INVENTORY_SIZE }>,
}

impl Inventory {
    pub const CAPACITY: usize = GameConfig::MAX_INVENTORY_SIZE;

    pub fn empty() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    /// Builds an inventory from stored entries, rejecting lists over capacity.
    pub fn from_items(items: Vec<String>) -> Result<Self, ValidationError> {
        if items.len() > Self::CAPACITY {
            return Err(ValidationError::InventoryOverflow {
                len: items.len(),
                max: Self::CAPACITY,
            });
        }
        Ok(Self {
            items: items.into_iter().collect(),
        })
    }

    pub(crate) fn push(&mut self, item: &str) -> Result<(), CharacterError> {
        self.items
            .try_push(item.to_string())
            .map_err(|_| CharacterError::InventoryFull {
                capacity: Self::CAPACITY,
            })
    }

    /// Removes the first entry called `item`. Returns false if none is held.
    pub(crate) fn remove_first(&mut self, item: &str) -> bool {
        match self.items.iter().position(|held| held == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|held| held == item)
    }

    pub fn count(&self, item: &str) -> usize {
        self.items.iter().filter(|held| *held == item).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

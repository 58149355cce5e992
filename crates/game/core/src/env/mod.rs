//! Traits describing read-only game data.
//!
//! Oracles expose static content the rules consult but never mutate. The
//! item catalog is the only one the character rules need.
mod items;

pub use items::{EffectParseError, ItemDefinition, ItemEffect, ItemKind, ItemOracle, StatKind};

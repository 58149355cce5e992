//! Rules that mutate a [`crate::Character`].
//!
//! Each submodule adds an `impl Character` block for one concern:
//! - [`progression`]: experience and level-ups, healing, damage, gold, revival
//! - [`inventory`]: carrying, dropping and consuming items
//! - [`equipment`]: weapon and armor slots
//! - [`shop`]: buying and selling against catalog prices
//!
//! Every operation either succeeds with all invariants intact or fails with
//! a [`crate::CharacterError`] leaving the character untouched.
pub mod equipment;
pub mod inventory;
pub mod progression;
pub mod shop;

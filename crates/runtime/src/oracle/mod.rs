//! Runtime implementations of the `chronicle-core` oracle traits.
//!
//! Oracle data is immutable at runtime; characters live in repositories.
mod items;

pub use items::ItemOracleImpl;

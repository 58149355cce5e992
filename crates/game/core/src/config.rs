use crate::state::CharacterClass;

/// Rule constants shared by the factory and the mutation engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of item entries a character can carry (duplicates count).
    pub const MAX_INVENTORY_SIZE: usize = 20;

    // ===== progression =====
    /// Experience needed to leave level `n` is `n * LEVEL_XP_BASE`.
    pub const LEVEL_XP_BASE: u32 = 100;
    pub const LEVEL_UP_MAX_HEALTH: u32 = 10;
    pub const LEVEL_UP_STRENGTH: u32 = 2;
    pub const LEVEL_UP_MAGIC: u32 = 2;

    // ===== character creation =====
    pub const STARTING_LEVEL: u32 = 1;
    pub const STARTING_GOLD: u32 = 100;
    pub const BASE_DEFENSE: u32 = 5;

    /// Experience required to advance from `level` to `level + 1`.
    pub const fn level_threshold(level: u32) -> u32 {
        level.saturating_mul(Self::LEVEL_XP_BASE)
    }

    /// Base stat line for a freshly created character of `class`.
    pub const fn base_stats(class: CharacterClass) -> BaseStats {
        match class {
            CharacterClass::Warrior => BaseStats::new(120, 15, 5),
            CharacterClass::Mage => BaseStats::new(80, 8, 20),
            CharacterClass::Rogue => BaseStats::new(90, 12, 10),
            CharacterClass::Cleric => BaseStats::new(100, 10, 15),
        }
    }
}

/// Per-class starting values. Defense is uniform and lives in [`GameConfig::BASE_DEFENSE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseStats {
    pub health: u32,
    pub strength: u32,
    pub magic: u32,
}

impl BaseStats {
    pub const fn new(health: u32, strength: u32, magic: u32) -> Self {
        Self {
            health,
            strength,
            magic,
        }
    }
}

//! Experience, health and gold arithmetic.

use crate::config::GameConfig;
use crate::error::CharacterError;
use crate::state::Character;

impl Character {
    /// True when health has reached zero.
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub(crate) fn ensure_alive(&self) -> Result<(), CharacterError> {
        if self.is_dead() {
            return Err(CharacterError::CharacterDead {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Awards experience and applies every level-up it pays for.
    ///
    /// Each level costs `level * LEVEL_XP_BASE`; the cost is subtracted, the
    /// level goes up, stats grow and health is refilled. Returns the number
    /// of levels gained. A dead character cannot gain experience and is left
    /// untouched.
    ///
    /// Banked experience saturates at `u32::MAX` before level-ups are
    /// applied; any excess over that is dropped.
    pub fn gain_experience(&mut self, amount: u32) -> Result<u32, CharacterError> {
        self.ensure_alive()?;

        self.experience = self.experience.saturating_add(amount);

        let mut levels_gained = 0;
        // Thresholds are at least LEVEL_XP_BASE, so experience strictly shrinks.
        while self.experience >= GameConfig::level_threshold(self.level) {
            self.experience -= GameConfig::level_threshold(self.level);
            self.level_up();
            levels_gained += 1;
        }
        Ok(levels_gained)
    }

    fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.max_health = self
            .max_health
            .saturating_add(GameConfig::LEVEL_UP_MAX_HEALTH);
        self.strength = self.strength.saturating_add(GameConfig::LEVEL_UP_STRENGTH);
        self.magic = self.magic.saturating_add(GameConfig::LEVEL_UP_MAGIC);
        self.health = self.max_health;
    }

    /// Restores up to `amount` health, never past `max_health`.
    ///
    /// Returns the health actually restored. Healing does not bring back the
    /// dead: on a dead character this is a no-op returning 0.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.is_dead() {
            return 0;
        }
        let healed = amount.min(self.max_health - self.health);
        self.health += healed;
        healed
    }

    /// Removes up to `amount` health, stopping at zero.
    ///
    /// Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.health);
        self.health -= taken;
        taken
    }

    /// Adds (or, with a negative amount, spends) gold.
    ///
    /// Returns the new total. Spending more than the character owns fails
    /// with [`CharacterError::InsufficientGold`] and changes nothing. Credits
    /// saturate: a total above `u32::MAX` is stored as `u32::MAX`.
    pub fn add_gold(&mut self, amount: i64) -> Result<u32, CharacterError> {
        // Gold is non-negative, so only a positive amount can overflow.
        let total = i64::from(self.gold)
            .checked_add(amount)
            .unwrap_or(i64::MAX);
        if total < 0 {
            return Err(CharacterError::InsufficientGold {
                required: amount.unsigned_abs(),
                available: self.gold,
            });
        }
        self.gold = u32::try_from(total).unwrap_or(u32::MAX);
        Ok(self.gold)
    }

    /// Brings a dead character back at half health (rounded down), but never
    /// below 1 so the revived character is alive.
    ///
    /// Returns false, changing nothing, if the character is alive.
    pub fn revive(&mut self) -> bool {
        if !self.is_dead() {
            return false;
        }
        self.health = (self.max_health / 2).max(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::error::CharacterError;
    use crate::state::{Character, CharacterClass};

    fn warrior() -> Character {
        Character::new("Aragon", CharacterClass::Warrior)
    }

    #[test]
    fn single_level_up_keeps_remainder() {
        let mut hero = warrior();
        hero.take_damage(30);

        assert_eq!(hero.gain_experience(130), Ok(1));
        assert_eq!(hero.level(), 2);
        assert_eq!(hero.experience(), 30);
        assert_eq!(hero.max_health(), 130);
        assert_eq!(hero.health(), hero.max_health());
        assert_eq!(hero.strength(), 17);
        assert_eq!(hero.magic(), 7);
    }

    #[test]
    fn below_threshold_only_accumulates() {
        let mut hero = warrior();
        assert_eq!(hero.gain_experience(99), Ok(0));
        assert_eq!(hero.level(), 1);
        assert_eq!(hero.experience(), 99);
        assert_eq!(hero.experience_to_next_level(), 1);
    }

    #[test]
    fn large_award_cascades_through_levels() {
        let mut hero = warrior();
        // 100 (1→2) + 200 (2→3) + 300 (3→4) + 5 left over
        assert_eq!(hero.gain_experience(605), Ok(3));
        assert_eq!(hero.level(), 4);
        assert_eq!(hero.experience(), 5);
        assert_eq!(hero.max_health(), 150);
        assert_eq!(hero.health(), 150);
    }

    #[test]
    fn dead_character_cannot_gain_experience() {
        let mut hero = warrior();
        hero.take_damage(500);
        let before = hero.clone();

        assert_eq!(
            hero.gain_experience(50),
            Err(CharacterError::CharacterDead {
                name: "Aragon".to_string()
            })
        );
        assert_eq!(hero, before);
    }

    #[test]
    fn heal_clamps_to_max_health() {
        let mut hero = warrior();
        hero.take_damage(20);
        assert_eq!(hero.heal(50), 20);
        assert_eq!(hero.health(), 120);
        assert_eq!(hero.heal(10), 0);
    }

    #[test]
    fn heal_does_not_raise_the_dead() {
        let mut hero = warrior();
        hero.take_damage(120);
        assert_eq!(hero.heal(40), 0);
        assert!(hero.is_dead());
    }

    #[test]
    fn damage_stops_at_zero() {
        let mut hero = warrior();
        assert_eq!(hero.take_damage(200), 120);
        assert_eq!(hero.health(), 0);
        assert!(hero.is_dead());
    }

    #[test]
    fn gold_never_goes_negative() {
        let mut hero = warrior();
        let gold = i64::from(hero.gold());

        assert_eq!(
            hero.add_gold(-gold - 1),
            Err(CharacterError::InsufficientGold {
                required: 101,
                available: 100
            })
        );
        assert_eq!(hero.gold(), 100);

        assert_eq!(hero.add_gold(-gold), Ok(0));
        assert_eq!(hero.add_gold(35), Ok(35));
    }

    #[test]
    fn gold_saturates_on_huge_credit() {
        let mut hero = warrior();
        assert_eq!(hero.add_gold(i64::MAX), Ok(u32::MAX));
        assert_eq!(hero.gold(), u32::MAX);
        assert_eq!(hero.add_gold(1), Ok(u32::MAX));

        assert_eq!(
            hero.add_gold(i64::MIN),
            Err(CharacterError::InsufficientGold {
                required: i64::MIN.unsigned_abs(),
                available: u32::MAX
            })
        );
        assert_eq!(hero.gold(), u32::MAX);
    }

    #[test]
    fn experience_saturates_before_levelling() {
        let mut hero = warrior();
        let first = hero.gain_experience(u32::MAX).unwrap();
        assert!(first > 0);
        assert_eq!(hero.level(), 1 + first);
        assert!(hero.experience() < GameConfig::level_threshold(hero.level()));

        let second = hero.gain_experience(u32::MAX).unwrap();
        assert!(second > 0);
        assert_eq!(hero.level(), 1 + first + second);
        assert!(hero.experience() < GameConfig::level_threshold(hero.level()));
    }

    #[test]
    fn revive_only_affects_the_dead() {
        let mut hero = warrior();
        hero.take_damage(10);
        let before = hero.clone();
        assert!(!hero.revive());
        assert_eq!(hero, before);

        hero.take_damage(500);
        assert!(hero.revive());
        assert_eq!(hero.health(), 60);
    }

    #[test]
    fn revive_leaves_at_least_one_health() {
        let mut hero = warrior();
        hero.max_health = 1;
        hero.health = 0;

        assert!(hero.revive());
        assert_eq!(hero.health(), 1);
        assert!(!hero.is_dead());
    }
}

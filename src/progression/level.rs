//! Experience curve and level-derived unlocks.
//!
//! The level is never stored - it is recomputed from experience on
//! every query so the two can never drift apart.

use serde::{Deserialize, Serialize};

/// Hard level cap.
pub const MAX_LEVEL: u32 = 1000;

/// Quick slots unlock at this level.
pub const SLOT_UNLOCK_LEVEL: u32 = 5;

/// Power casts (double effect) unlock at this level.
pub const POWER_CAST_LEVEL: u32 = 10;

/// Compute the level reached for a given experience total.
///
/// Starting at level 1 with a 100 XP threshold, each level-up grows the
/// threshold by `level * 100` and the cumulative total by the new
/// threshold. Strictly increasing and superlinear: the first level-ups
/// sit at 100, 300, 600, 1000, 1500 cumulative XP.
pub fn level_for_experience(experience: i64) -> u32 {
    let mut level: u32 = 1;
    let mut threshold: i64 = 100;
    let mut total: i64 = threshold;
    while level < MAX_LEVEL && experience >= total {
        level += 1;
        threshold += i64::from(level) * 100;
        total += threshold;
    }
    level
}

/// Damage resistance multiplier granted by the given level.
pub fn damage_resistance(level: u32) -> f32 {
    1.0 + (level.saturating_sub(1)) as f32 * 0.005
}

/// True if the player can instantly kill opponents.
pub fn has_one_hit_kill(level: u32) -> bool {
    level >= MAX_LEVEL
}

/// Maximum quick slots per arm for the given level.
pub fn max_arm_slots(level: u32) -> usize {
    (3 + (level / 10) * 3) as usize
}

/// Experience awarded for a match of the given length. Longer matches
/// pay double past 30 seconds and double again past 90.
pub fn match_experience(match_length_seconds: f32) -> i64 {
    let mut xp = match_length_seconds.round() as i64;
    if match_length_seconds > 30.0 {
        xp *= 2;
    }
    if match_length_seconds > 90.0 {
        xp *= 2;
    }
    xp
}

/// A player's experience counter. Monotonic in normal play; penalties
/// may subtract but the total never goes below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    experience: i64,
}

impl Progression {
    pub fn new(experience: i64) -> Self {
        Self {
            experience: experience.max(0),
        }
    }

    pub fn experience(&self) -> i64 {
        self.experience
    }

    /// Add (possibly negative) experience, floor-clamped at zero.
    /// Returns the new level so callers can detect level-ups.
    pub fn add_experience(&mut self, amount: i64) -> u32 {
        self.experience = (self.experience + amount).max(0);
        self.level()
    }

    pub fn level(&self) -> u32 {
        level_for_experience(self.experience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds_match_curve() {
        assert_eq!(level_for_experience(0), 1);
        assert_eq!(level_for_experience(99), 1);
        assert_eq!(level_for_experience(100), 2);
        assert_eq!(level_for_experience(299), 2);
        assert_eq!(level_for_experience(300), 3);
        assert_eq!(level_for_experience(599), 3);
        assert_eq!(level_for_experience(600), 4);
        assert_eq!(level_for_experience(999), 4);
        assert_eq!(level_for_experience(1000), 5);
        assert_eq!(level_for_experience(1499), 5);
        assert_eq!(level_for_experience(1500), 6);
    }

    #[test]
    fn level_is_monotonic() {
        let mut last = 0;
        for xp in (0..20_000).step_by(37) {
            let level = level_for_experience(xp);
            assert!(level >= last, "level dropped at {xp} xp");
            last = level;
        }
    }

    #[test]
    fn level_caps_at_max() {
        assert_eq!(level_for_experience(i64::MAX), MAX_LEVEL);
    }

    #[test]
    fn arm_slot_capacity() {
        assert_eq!(max_arm_slots(1), 3);
        assert_eq!(max_arm_slots(9), 3);
        assert_eq!(max_arm_slots(10), 6);
        assert_eq!(max_arm_slots(25), 6);
        assert_eq!(max_arm_slots(30), 9);
    }

    #[test]
    fn experience_never_goes_negative() {
        let mut progression = Progression::new(50);
        progression.add_experience(-200);
        assert_eq!(progression.experience(), 0);
        assert_eq!(progression.level(), 1);
    }

    #[test]
    fn damage_resistance_scales_with_level() {
        assert_eq!(damage_resistance(1), 1.0);
        assert!((damage_resistance(11) - 1.05).abs() < 1e-6);
        assert!(!has_one_hit_kill(999));
        assert!(has_one_hit_kill(1000));
    }

    #[test]
    fn match_experience_doubles_twice() {
        assert_eq!(match_experience(20.0), 20);
        assert_eq!(match_experience(31.0), 62);
        assert_eq!(match_experience(91.0), 364);
    }
}

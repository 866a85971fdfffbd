//! Companion hound components and tier stats.

use bevy::prelude::*;

use crate::tokens::HoundTier;

impl HoundTier {
    /// Damage inflicted per attack.
    pub fn attack_damage(self) -> f32 {
        match self {
            HoundTier::Minor => 10.0,
            HoundTier::Greater => 20.0,
            HoundTier::Dire => 30.0,
        }
    }

    /// Maximum health for the tier.
    pub fn max_health(self) -> f32 {
        match self {
            HoundTier::Minor => 50.0,
            HoundTier::Greater => 100.0,
            HoundTier::Dire => 150.0,
        }
    }
}

/// A spawned hound. The owner is a weak reference - the caster may
/// despawn independently, so users check it still exists.
#[derive(Component, Debug)]
pub struct Companion {
    pub owner: Entity,
    pub tier: HoundTier,
}

/// Companion bookkeeping on the caster. `active` holds the one live
/// hound this caster may own at a time.
#[derive(Component, Debug, Default)]
pub struct CompanionOwner {
    pub active: Option<Entity>,
}

/// Hit points for entities that can die.
#[derive(Component, Debug)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Marker for entities that have died (prevents duplicate death events).
#[derive(Component)]
pub struct Dead;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_stat_table() {
        assert_eq!(HoundTier::Minor.attack_damage(), 10.0);
        assert_eq!(HoundTier::Minor.max_health(), 50.0);
        assert_eq!(HoundTier::Greater.attack_damage(), 20.0);
        assert_eq!(HoundTier::Greater.max_health(), 100.0);
        assert_eq!(HoundTier::Dire.attack_damage(), 30.0);
        assert_eq!(HoundTier::Dire.max_health(), 150.0);
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut health = Health::new(50.0);
        assert_eq!(health.take_damage(60.0), 50.0);
        assert!(health.is_dead());
        assert_eq!(health.current, 0.0);
    }
}

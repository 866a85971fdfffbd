//! Casting-related components shared by the casting and player systems.

use bevy::prelude::*;

use crate::tokens::Element;

/// Walk speed with the layered modifiers casting applies to it.
///
/// Water and Electricity casts compound `permanent_factor`; levitation
/// adds a flat bonus; the Speedy robe burst multiplies the result.
#[derive(Component, Debug, Clone)]
pub struct WalkSpeed {
    pub base: f32,
    pub permanent_factor: f32,
    pub levitation_bonus: f32,
    pub burst_factor: f32,
}

impl Default for WalkSpeed {
    fn default() -> Self {
        Self {
            base: 600.0,
            permanent_factor: 1.0,
            levitation_bonus: 0.0,
            burst_factor: 1.0,
        }
    }
}

impl WalkSpeed {
    pub fn effective(&self) -> f32 {
        (self.base * self.permanent_factor + self.levitation_bonus) * self.burst_factor
    }
}

/// How long a Freeze or Water reaction pins the opponent in place.
pub const IMMOBILIZE_SECONDS: f32 = 3.0;

/// Movement disabled by a Freeze or Water reaction. Thaws when the
/// timer runs out.
#[derive(Component, Debug)]
pub struct Immobilized {
    pub remaining: f32,
}

impl Default for Immobilized {
    fn default() -> Self {
        Self {
            remaining: IMMOBILIZE_SECONDS,
        }
    }
}

/// Non-owning reference to the current opponent. The referenced entity
/// may despawn independently, so every use checks it still exists.
#[derive(Component, Debug, Default)]
pub struct LockedOpponent {
    pub target: Option<Entity>,
}

/// Visible barrier state toggled by Shield casts.
#[derive(Component, Debug, Default)]
pub struct ShieldBarrier {
    pub visible: bool,
}

/// A spell projectile in flight.
#[derive(Component, Debug)]
pub struct SpellProjectile {
    pub element: Element,
    pub power: f32,
}

/// Despawns the entity when it expires.
#[derive(Component, Debug)]
pub struct Lifetime {
    pub remaining: f32,
}

/// Present while the Speedy robe burst is active; remembers the scale
/// to restore on release.
#[derive(Component, Debug)]
pub struct SpeedyBurst {
    pub original_scale: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_speed_layers_compose() {
        let speed = WalkSpeed {
            base: 600.0,
            permanent_factor: 0.95,
            levitation_bonus: 30.0,
            burst_factor: 3.0,
        };
        assert!((speed.effective() - (600.0 * 0.95 + 30.0) * 3.0).abs() < 1e-3);
    }
}

//! Effect resolution - maps a resolved Effect-token cast onto the
//! projectile to spawn, the caster's own movement reaction, and the
//! status effect applied to a locked opponent.
//!
//! Pure: the function only computes the resolution. Systems apply it
//! to the world. The three outputs act on disjoint state, so
//! application order does not matter.

use bevy::prelude::*;

use crate::tokens::Element;

/// Lower bound on the area stat at cast time.
pub const MIN_SPELL_AREA: f32 = 0.5;
/// Upper bound on the area stat at cast time.
pub const MAX_SPELL_AREA: f32 = 3.0;

/// Base projectile speed before the power contribution.
pub const BASE_LAUNCH_SPEED: f32 = 1000.0;

/// Power scaling applied by the Speedy robe burst.
const SPEEDY_CAST_FACTOR: f32 = 0.1;

/// Descriptor for the projectile a cast spawns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpec {
    pub power: f32,
    /// Clamped to `[MIN_SPELL_AREA, MAX_SPELL_AREA]`
    pub area: f32,
    pub element: Element,
}

impl ProjectileSpec {
    /// Launch speed along the caster's facing.
    pub fn launch_speed(&self) -> f32 {
        BASE_LAUNCH_SPEED + self.power * 100.0
    }

    /// Visual scale derived from the clamped area.
    pub fn visual_scale(&self) -> f32 {
        self.area
    }
}

/// Movement applied to the caster, in caster-local space
/// (-Z forward, +Y up).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelfMotion {
    #[default]
    None,
    /// One-shot impulse
    Impulse(Vec3),
    /// Permanent walk-speed multiplier (compounds across casts)
    WalkSpeedFactor(f32),
    /// Large launch (explosions throw the caster backward and up)
    Launch(Vec3),
}

/// Status effect applied to the locked opponent, if one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpponentReaction {
    /// Cosmetic only
    #[default]
    None,
    /// Movement disabled (Freeze, Water)
    Immobilize,
    /// Launched upward and knocked down (Electricity)
    Knockdown,
    /// Launched radially away from the caster, knocked down (Explosion)
    RadialLaunch,
}

/// Everything a resolved Effect cast does to the world.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellResolution {
    pub projectile: ProjectileSpec,
    pub self_motion: SelfMotion,
    pub opponent: OpponentReaction,
}

/// Resolve an Effect-token cast.
///
/// The robe's attack bonus adds to power; a power cast doubles it; an
/// active Speedy burst then scales both power and area to a tenth.
pub fn resolve_effect(
    element: Element,
    power: f32,
    area: f32,
    robe_attack_bonus: f32,
    power_cast: bool,
    speedy_active: bool,
) -> SpellResolution {
    let mut power = power + robe_attack_bonus;
    if power_cast {
        power *= 2.0;
    }
    let mut area = area;
    if speedy_active {
        power *= SPEEDY_CAST_FACTOR;
        area *= SPEEDY_CAST_FACTOR;
    }

    let self_motion = match element {
        Element::Earth => SelfMotion::Impulse(Vec3::new(0.0, -300.0, 0.0)),
        Element::Air => SelfMotion::Impulse(Vec3::new(0.0, 300.0, 0.0)),
        Element::Fire => SelfMotion::Impulse(Vec3::new(0.0, 0.0, 250.0)),
        Element::Water => SelfMotion::WalkSpeedFactor(0.95),
        Element::Electricity => SelfMotion::WalkSpeedFactor(1.05),
        Element::Explosion => SelfMotion::Launch(Vec3::new(0.0, 400.0, 600.0)),
        Element::Freeze | Element::Weapon => SelfMotion::None,
    };

    let opponent = match element {
        Element::Freeze | Element::Water => OpponentReaction::Immobilize,
        Element::Electricity => OpponentReaction::Knockdown,
        Element::Explosion => OpponentReaction::RadialLaunch,
        Element::Fire | Element::Weapon | Element::Earth | Element::Air => OpponentReaction::None,
    };

    SpellResolution {
        projectile: ProjectileSpec {
            power,
            area: area.clamp(MIN_SPELL_AREA, MAX_SPELL_AREA),
            element,
        },
        self_motion,
        opponent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_clamps_at_cast_time() {
        let big = resolve_effect(Element::Fire, 1.0, 100.0, 0.0, false, false);
        assert_eq!(big.projectile.area, MAX_SPELL_AREA);
        let small = resolve_effect(Element::Fire, 1.0, 0.1, 0.0, false, false);
        assert_eq!(small.projectile.area, MIN_SPELL_AREA);
    }

    #[test]
    fn launch_speed_scales_with_power() {
        let resolution = resolve_effect(Element::Weapon, 5.0, 1.0, 0.0, false, false);
        assert_eq!(resolution.projectile.launch_speed(), 1500.0);
    }

    #[test]
    fn robe_bonus_and_power_cast_stack() {
        let resolution = resolve_effect(Element::Fire, 5.0, 1.0, 3.0, true, false);
        assert_eq!(resolution.projectile.power, 16.0);
    }

    #[test]
    fn speedy_burst_weakens_the_cast() {
        let resolution = resolve_effect(Element::Fire, 10.0, 2.0, 0.0, false, true);
        assert!((resolution.projectile.power - 1.0).abs() < 1e-6);
        assert!((resolution.projectile.area - 0.5).abs() < 1e-6); // 0.2 clamped up
    }

    #[test]
    fn element_reactions_match_rules() {
        assert_eq!(
            resolve_effect(Element::Freeze, 1.0, 1.0, 0.0, false, false).opponent,
            OpponentReaction::Immobilize
        );
        assert_eq!(
            resolve_effect(Element::Water, 1.0, 1.0, 0.0, false, false).opponent,
            OpponentReaction::Immobilize
        );
        assert_eq!(
            resolve_effect(Element::Electricity, 1.0, 1.0, 0.0, false, false).opponent,
            OpponentReaction::Knockdown
        );
        assert_eq!(
            resolve_effect(Element::Explosion, 1.0, 1.0, 0.0, false, false).opponent,
            OpponentReaction::RadialLaunch
        );
        assert_eq!(
            resolve_effect(Element::Fire, 1.0, 1.0, 0.0, false, false).opponent,
            OpponentReaction::None
        );
    }

    #[test]
    fn permanent_speed_elements() {
        assert_eq!(
            resolve_effect(Element::Water, 1.0, 1.0, 0.0, false, false).self_motion,
            SelfMotion::WalkSpeedFactor(0.95)
        );
        assert_eq!(
            resolve_effect(Element::Electricity, 1.0, 1.0, 0.0, false, false).self_motion,
            SelfMotion::WalkSpeedFactor(1.05)
        );
        assert_eq!(
            resolve_effect(Element::Weapon, 1.0, 1.0, 0.0, false, false).self_motion,
            SelfMotion::None
        );
    }
}

//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. The casting systems
//! send `CastResolvedEvent`s when a wind-up completes, and the effect
//! application systems react to them without the two being coupled.

use bevy::prelude::*;

use crate::casting::Arm;
use crate::tokens::Token;

/// Sent when an arm's wind-up completes and the selected token resolves.
#[derive(Event)]
pub struct CastResolvedEvent {
    /// The casting character
    pub caster: Entity,
    /// Which arm finished its wind-up
    pub arm: Arm,
    /// The token that was selected when the wind-up completed
    pub token: Token,
    /// Whether this was a power cast (level 10+ double effect)
    pub power_cast: bool,
}

/// Sent when a character is knocked down by an Electricity or Explosion
/// reaction. Clears in-progress wind-ups on the target.
#[derive(Event)]
pub struct KnockdownEvent {
    /// Character entering the knocked-down state
    pub target: Entity,
}

/// Sent by the companion death system so the owner can resummon.
#[derive(Event)]
pub struct CompanionKilledEvent {
    /// The companion that died
    pub companion: Entity,
    /// Its owning caster (may no longer exist)
    pub owner: Entity,
}

/// Sent when a player's level increases after gaining experience.
#[derive(Event)]
pub struct LevelUpEvent {
    /// The player entity
    pub player: Entity,
    /// New level
    pub new_level: u32,
}

/// Sent when a character performs their equipped taunt.
#[derive(Event)]
pub struct TauntEvent {
    /// The taunting character
    pub source: Entity,
    /// Censored taunt text ready for display
    pub message: String,
}

/// Hook for the animation layer: play the facial-expression cue
/// configured for the cast element. Fire-and-forget.
#[derive(Event)]
pub struct FacialCueEvent {
    pub caster: Entity,
    pub element: crate::tokens::Element,
}

/// Cosmetic flavor text (tie-dye robe fire casts, robe specials).
/// Non-blocking; display is someone else's problem.
#[derive(Event)]
pub struct FlavorMessageEvent {
    pub source: Entity,
    pub message: String,
}

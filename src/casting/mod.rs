//! Casting module - quick slots, wind-up state machine, effect
//! resolution, persistent abilities, and robe specials.

pub mod components;
pub mod loadout;
pub mod plugin;
pub mod resolver;
pub mod state;
pub mod systems;

pub use components::*;
pub use loadout::{Arm, ArmSlots, Loadout};
pub use plugin::CastingPlugin;
pub use resolver::{
    resolve_effect, OpponentReaction, ProjectileSpec, SelfMotion, SpellResolution,
    MAX_SPELL_AREA, MIN_SPELL_AREA,
};
pub use state::{
    ArmState, CastController, PersistentAbility, PressOutcome, KNOCKDOWN_SECONDS, WIND_UP_SECONDS,
};

//! Wizard War - a multiplayer arena spell-fighting game in Bevy.
//!
//! Players assemble spells from collectible tokens, cast them from two
//! independent arms, wager tokens on matches, and summon hound
//! companions.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events
//! - **Tokens**: The token catalog spells are built from
//! - **Casting**: Quick slots, wind-up state machine, spell effects
//! - **Progression**: XP, levels, level-gated unlocks
//! - **Wager**: Bet escrow and arena pools
//! - **Companion**: Summoned hound allies
//! - **Player**: Profile record, movement, the castle store
//! - **World**: Combat environment selection
//! - **Persistence**: Save slots

pub mod casting;
pub mod companion;
pub mod core;
pub mod persistence;
pub mod player;
pub mod progression;
pub mod tokens;
pub mod wager;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct WizardWarPlugin;

impl Plugin for WizardWarPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Casting systems
            .add_plugins(casting::CastingPlugin)

            // Progression systems
            .add_plugins(progression::ProgressionPlugin)

            // Wager systems
            .add_plugins(wager::WagerPlugin)

            // Companion systems
            .add_plugins(companion::CompanionPlugin)

            // World systems
            .add_plugins(world::WorldPlugin)

            // Persistence systems
            .add_plugins(persistence::PersistencePlugin);
    }
}

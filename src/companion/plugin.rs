//! Companion plugin - hound summoning and lifecycle.

use bevy::prelude::*;

use super::systems;

/// Companion plugin - handles all hound systems.
pub struct CompanionPlugin;

impl Plugin for CompanionPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_companion_systems(app);
    }
}

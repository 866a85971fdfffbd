//! Casting plugin - loadouts, the cast state machine, and spell effects.

use bevy::prelude::*;

use super::systems;

/// Casting plugin - handles all spell-casting systems.
pub struct CastingPlugin;

impl Plugin for CastingPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_casting_systems(app);
    }
}

//! World plugin - combat environment lifecycle.

use bevy::prelude::*;

use super::environments::{cleanup_environment, spawn_random_environment};
use crate::core::GameState;

/// World plugin - spawns an arena per match.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InMatch), spawn_random_environment)
            .add_systems(OnExit(GameState::InMatch), cleanup_environment);
    }
}

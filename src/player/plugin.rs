//! Player plugin - profile data, movement glue, and the store.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{spawn_caster, Player};
use super::profile::PlayerProfile;
use super::store::{load_robe_definitions, RobeRegistry};
use crate::casting::{Immobilized, WalkSpeed};
use crate::core::GameState;

/// Player plugin - local player entity and store data.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RobeRegistry>()
            .add_systems(Startup, load_robe_definitions)
            .add_systems(OnEnter(GameState::Hub), spawn_local_player)
            .add_systems(
                Update,
                player_movement.run_if(in_state(GameState::InMatch)),
            );
    }
}

/// Spawn the local caster the first time the hub loads.
fn spawn_local_player(mut commands: Commands, existing: Query<(), With<Player>>) {
    if !existing.is_empty() {
        return;
    }
    let entity = spawn_caster(&mut commands, Vec3::new(0.0, 1.0, 0.0), PlayerProfile::default());
    info!("Spawned local player {:?}", entity);
}

/// WASD movement scaled by the layered walk-speed modifiers. Movement
/// is suppressed entirely while immobilized.
fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&Transform, &WalkSpeed, &mut Velocity, Option<&Immobilized>), With<Player>>,
) {
    let Ok((transform, walk_speed, mut velocity, immobilized)) = query.get_single_mut() else {
        return;
    };

    if immobilized.is_some() {
        velocity.linvel.x = 0.0;
        velocity.linvel.z = 0.0;
        return;
    }

    let mut direction = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction.x += 1.0;
    }
    if direction != Vec3::ZERO {
        direction = direction.normalize();
    }

    let yaw = transform.rotation.to_euler(EulerRot::YXZ).0;
    let movement = Quat::from_rotation_y(yaw) * direction;

    // Walk speed is in engine units per second; scale down to world
    // units for the physics velocity
    let horizontal = movement * walk_speed.effective() * 0.01;
    velocity.linvel.x = horizontal.x;
    velocity.linvel.z = horizontal.z;
}

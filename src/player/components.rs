//! Player entity spawning.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::profile::PlayerProfile;
use crate::casting::{CastController, Loadout, LockedOpponent, ShieldBarrier, WalkSpeed};
use crate::companion::CompanionOwner;

/// Marker component for the local player entity.
#[derive(Component)]
pub struct Player;

/// Spawn a caster with the full set of gameplay components.
pub fn spawn_caster(commands: &mut Commands, position: Vec3, profile: PlayerProfile) -> Entity {
    commands
        .spawn((
            Player,
            profile,
            CastController::default(),
            Loadout::default(),
            WalkSpeed::default(),
            LockedOpponent::default(),
            ShieldBarrier::default(),
            CompanionOwner::default(),
            Transform::from_translation(position),
            GlobalTransform::default(),
            Visibility::default(),
            RigidBody::Dynamic,
            LockedAxes::ROTATION_LOCKED,
            Collider::capsule_y(0.8, 0.35),
            Velocity::default(),
        ))
        .id()
}

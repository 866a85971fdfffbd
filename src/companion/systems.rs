//! Companion systems - summoning, dismissal, and death handling.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::components::{Companion, CompanionOwner, Dead, Health};
use crate::casting::WalkSpeed;
use crate::core::CompanionKilledEvent;
use crate::player::PlayerProfile;
use crate::tokens::HoundTier;

/// Request to spawn a hound for this caster. `tier: None` uses the
/// caster's selected companion.
#[derive(Event)]
pub struct SummonCompanionEvent {
    pub owner: Entity,
    pub tier: Option<HoundTier>,
}

/// Remove the caster's hound from the field without a respawn.
#[derive(Event)]
pub struct DismissCompanionEvent {
    pub owner: Entity,
}

/// Configure companion systems.
pub fn setup_companion_systems(app: &mut App) {
    app.add_event::<SummonCompanionEvent>()
        .add_event::<DismissCompanionEvent>()
        .add_systems(
            Update,
            (
                summon_companions,
                dismiss_companions,
                check_companion_deaths,
                handle_companion_killed,
            )
                .chain(),
        );
}

/// Spawn requested hounds. A caster owns at most one live companion:
/// summoning replaces any existing one.
fn summon_companions(
    mut commands: Commands,
    mut events: EventReader<SummonCompanionEvent>,
    mut owners: Query<(&Transform, &mut CompanionOwner, &PlayerProfile)>,
) {
    for event in events.read() {
        let Ok((transform, mut owner, profile)) = owners.get_mut(event.owner) else {
            continue;
        };
        let Some(tier) = event.tier.or(profile.selected_hound) else {
            continue;
        };

        if let Some(previous) = owner.active.take() {
            commands.entity(previous).despawn_recursive();
        }

        let position = transform.translation + transform.forward().as_vec3() * 2.0;
        let hound = commands
            .spawn((
                Companion {
                    owner: event.owner,
                    tier,
                },
                Health::new(tier.max_health()),
                WalkSpeed::default(),
                Transform::from_translation(position),
                GlobalTransform::default(),
                Visibility::default(),
                RigidBody::Dynamic,
                LockedAxes::ROTATION_LOCKED,
                Collider::capsule_y(0.4, 0.3),
            ))
            .id();

        owner.active = Some(hound);
        info!("Summoned {:?} hound for {:?}", tier, event.owner);
    }
}

/// Despawn dismissed hounds. No respawn follows a dismissal.
fn dismiss_companions(
    mut commands: Commands,
    mut events: EventReader<DismissCompanionEvent>,
    mut owners: Query<&mut CompanionOwner>,
) {
    for event in events.read() {
        let Ok(mut owner) = owners.get_mut(event.owner) else {
            continue;
        };
        if let Some(hound) = owner.active.take() {
            commands.entity(hound).despawn_recursive();
        }
    }
}

/// Detect dead hounds and notify their owners.
fn check_companion_deaths(
    mut commands: Commands,
    query: Query<(Entity, &Health, &Companion), Without<Dead>>,
    mut killed_events: EventWriter<CompanionKilledEvent>,
) {
    for (entity, health, companion) in query.iter() {
        if health.is_dead() {
            commands.entity(entity).insert(Dead);
            killed_events.send(CompanionKilledEvent {
                companion: entity,
                owner: companion.owner,
            });
            commands.entity(entity).despawn_recursive();
        }
    }
}

/// React to a hound's death: if the owner still has a companion
/// selected, a backup spawns automatically.
fn handle_companion_killed(
    mut events: EventReader<CompanionKilledEvent>,
    mut owners: Query<(&mut CompanionOwner, &PlayerProfile)>,
    mut summon_events: EventWriter<SummonCompanionEvent>,
) {
    for event in events.read() {
        // The owner may be gone by the time the hound dies
        let Ok((mut owner, profile)) = owners.get_mut(event.owner) else {
            continue;
        };
        if owner.active == Some(event.companion) {
            owner.active = None;
        }
        if profile.selected_hound.is_some() {
            summon_events.send(SummonCompanionEvent {
                owner: event.owner,
                tier: None,
            });
        }
    }
}

//! Combat environments - a random arena is chosen for each match.

use bevy::prelude::*;
use rand::seq::SliceRandom;

/// The arenas matches can take place in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatEnvironment {
    Dungeon,
    Forest,
    ShrinkingIsland,
    Colosseum,
    MountainTop,
}

impl CombatEnvironment {
    pub const ALL: [CombatEnvironment; 5] = [
        CombatEnvironment::Dungeon,
        CombatEnvironment::Forest,
        CombatEnvironment::ShrinkingIsland,
        CombatEnvironment::Colosseum,
        CombatEnvironment::MountainTop,
    ];
}

/// Marker for the currently active environment root entity.
#[derive(Component)]
pub struct ActiveEnvironment {
    pub environment: CombatEnvironment,
}

/// Pick and spawn a random environment when a match starts. The
/// previous one is torn down first.
pub fn spawn_random_environment(
    mut commands: Commands,
    previous: Query<Entity, With<ActiveEnvironment>>,
) {
    for entity in previous.iter() {
        commands.entity(entity).despawn_recursive();
    }

    let mut rng = rand::thread_rng();
    let Some(&environment) = CombatEnvironment::ALL.choose(&mut rng) else {
        return;
    };

    info!("Spawning combat environment: {:?}", environment);
    commands.spawn((
        ActiveEnvironment { environment },
        Transform::default(),
        GlobalTransform::default(),
        Visibility::default(),
    ));
}

/// Tear the environment down when the match ends.
pub fn cleanup_environment(
    mut commands: Commands,
    previous: Query<Entity, With<ActiveEnvironment>>,
) {
    for entity in previous.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

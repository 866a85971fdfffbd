//! Persistence plugin - the ECS seam over the save-slot functions.
//!
//! Gameplay callers fire save/load events and move on; failures are
//! logged, never escalated.

use bevy::prelude::*;
use std::path::PathBuf;

use super::save::{load_player, save_player};
use crate::player::PlayerProfile;

/// Where save slots live on disk.
#[derive(Resource)]
pub struct SaveDirectory(pub PathBuf);

impl Default for SaveDirectory {
    fn default() -> Self {
        Self(PathBuf::from("saves"))
    }
}

/// Request to persist a player's record to a slot.
#[derive(Event)]
pub struct SavePlayerEvent {
    pub player: Entity,
    pub slot_name: String,
}

/// Request to restore a player's record from a slot.
#[derive(Event)]
pub struct LoadPlayerEvent {
    pub player: Entity,
    pub slot_name: String,
}

/// Persistence plugin - save/load request handling.
pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SaveDirectory>()
            .add_event::<SavePlayerEvent>()
            .add_event::<LoadPlayerEvent>()
            .add_systems(Update, (handle_save_requests, handle_load_requests));
    }
}

fn handle_save_requests(
    mut events: EventReader<SavePlayerEvent>,
    directory: Res<SaveDirectory>,
    profiles: Query<&PlayerProfile>,
) {
    for event in events.read() {
        let Ok(profile) = profiles.get(event.player) else {
            continue;
        };
        match save_player(profile, &event.slot_name, &directory.0) {
            Ok(()) => info!("Saved player {:?} to slot '{}'", event.player, event.slot_name),
            Err(e) => error!("Failed to save slot '{}': {}", event.slot_name, e),
        }
    }
}

fn handle_load_requests(
    mut events: EventReader<LoadPlayerEvent>,
    directory: Res<SaveDirectory>,
    mut profiles: Query<&mut PlayerProfile>,
) {
    for event in events.read() {
        let Ok(mut profile) = profiles.get_mut(event.player) else {
            continue;
        };
        match load_player(&event.slot_name, &directory.0) {
            Ok(data) => {
                data.apply_to(&mut profile);
                info!("Loaded slot '{}' into {:?}", event.slot_name, event.player);
            }
            Err(e) => error!("Failed to load slot '{}': {}", event.slot_name, e),
        }
    }
}

//! Progression plugin - experience awards and level-up notification.

use bevy::prelude::*;

use crate::core::LevelUpEvent;
use crate::player::PlayerProfile;

use super::level::match_experience;

/// Request to grant a player experience for a finished match.
#[derive(Event)]
pub struct MatchXpEvent {
    pub player: Entity,
    pub match_length_seconds: f32,
}

/// Progression plugin - applies experience awards.
pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MatchXpEvent>()
            .add_systems(Update, award_match_xp);
    }
}

/// Apply match XP awards and announce level-ups.
fn award_match_xp(
    mut xp_events: EventReader<MatchXpEvent>,
    mut level_up_events: EventWriter<LevelUpEvent>,
    mut profiles: Query<&mut PlayerProfile>,
) {
    for event in xp_events.read() {
        let Ok(mut profile) = profiles.get_mut(event.player) else {
            continue;
        };

        let before = profile.progression.level();
        let after = profile
            .progression
            .add_experience(match_experience(event.match_length_seconds));

        if after > before {
            info!("Player {:?} reached level {}", event.player, after);
            level_up_events.send(LevelUpEvent {
                player: event.player,
                new_level: after,
            });
        }
    }
}

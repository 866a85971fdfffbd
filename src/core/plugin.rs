//! Core plugin that sets up game states, events, and fundamental systems.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, Hub, InMatch, etc.)
/// - Global events (CastResolvedEvent, KnockdownEvent, etc.)
/// - Basic game flow systems
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<CastResolvedEvent>()
            .add_event::<KnockdownEvent>()
            .add_event::<CompanionKilledEvent>()
            .add_event::<LevelUpEvent>()
            .add_event::<FacialCueEvent>()
            .add_event::<TauntEvent>()
            .add_event::<FlavorMessageEvent>()

            // Loading state - transition to the hub once data files load
            .add_systems(OnEnter(GameState::Loading), transition_to_hub)

            // Pause/unpause with Escape key
            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(GameState::InMatch).or(in_state(GameState::Paused))),
            );
    }
}

/// Transition from Loading to the castle hub.
///
/// Data registries load in Startup systems, so by the time this state
/// runs its OnEnter schedule they are already populated.
fn transition_to_hub(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Hub);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            GameState::InMatch => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::InMatch),
            _ => {}
        }
    }
}

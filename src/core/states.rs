//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Casting and
//! wager systems only run during a match, while the store and save
//! slots are available from the castle hub.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while data files (robes) load
/// - `Hub` is the player's castle: store, loadout editing, save slots
/// - `InMatch` is active combat (bet match or arena battle)
/// - `Paused` freezes gameplay but keeps the world visible
/// - `GameOver` when the player is eliminated
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Castle hub - store, loadout, companion selection
    Hub,
    /// Active combat match
    InMatch,
    /// Game is paused (overlay on gameplay)
    Paused,
    /// Player has been eliminated
    GameOver,
}

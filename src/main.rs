//! Wizard War - Entry Point
//!
//! Controls:
//! - WASD: Move
//! - Left/Right mouse: Cast left/right arm
//! - Q/E: Power cast (level 10+)
//! - Z/X: Cycle quick slots
//! - T: Taunt
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Wizard War".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())

        // Our game plugin
        .add_plugins(wizard_war::WizardWarPlugin)

        .run();
}

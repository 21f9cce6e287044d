//! Gridfire - Entry Point
//!
//! A small grid-based first-person shooter.
//!
//! Controls:
//! - WASD / Arrows: Move
//! - Mouse: Look around
//! - Left Click: Shoot
//! - Escape: Pause/Unpause

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gridfire".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.1, 0.1, 0.12)))
        // Physics
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        // Our game plugin
        .add_plugins(gridfire::GridfirePlugin)
        .run();
}

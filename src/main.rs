mod content;
mod core;
mod movement;
mod sprites;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Madlibby".to_string(),
                resolution: WindowResolution::new(1280, 720),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        // Pixel units; roughly one player width per meter
        .add_plugins(PhysicsPlugins::default().with_length_unit(20.0))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            sprites::SpritesPlugin,
        ))
        .run();
}

//! Movement domain: debug-only test room and live tuning helpers.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

use crate::content::{DATA_DIR, load_validated_movement};
use crate::movement::{
    GameLayer, Grabbable, Ground, MovementConfig, MovementState, Player, ReleaseHeldEvent,
    ReleaseStyle, object_layers,
};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let block_color = Color::srgb(0.85, 0.75, 0.35);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Object]);

    // Floor and platforms: (position, size, color)
    let surfaces = [
        (Vec2::new(0.0, -200.0), Vec2::new(800.0, 40.0), ground_color),
        (Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0), platform_color),
        (Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0), platform_color),
        (Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0), platform_color),
    ];

    for (position, size, color) in surfaces {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    // Word blocks to stand on and pick up
    for x in [-120.0, 140.0] {
        commands.spawn((
            Grabbable,
            Sprite {
                color: block_color,
                custom_size: Some(Vec2::new(32.0, 20.0)),
                ..default()
            },
            Transform::from_xyz(x, -170.0, 0.0),
            RigidBody::Dynamic,
            Collider::rectangle(32.0, 20.0),
            LockedAxes::ROTATION_LOCKED,
            object_layers(),
        ));
    }
}

/// F5 re-reads movement.ron and applies it through `MovementConfig::edit`
/// so derived values stay in sync.
pub(crate) fn reload_movement_config(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut config: ResMut<MovementConfig>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }

    let params = load_validated_movement(Path::new(DATA_DIR));
    config.edit(|current| *current = params);
    info!(
        "Reloaded movement config: jump_force={:.1}, gravity_scale={:.3}",
        config.derived().jump_force,
        config.derived().gravity_scale
    );
}

/// G puts down whatever the player is carrying.
pub(crate) fn drop_held_object(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(Entity, &MovementState), With<Player>>,
    mut release_events: MessageWriter<ReleaseHeldEvent>,
) {
    if !keyboard.just_pressed(KeyCode::KeyG) {
        return;
    }

    for (entity, state) in &query {
        if state.held.is_some() {
            release_events.write(ReleaseHeldEvent {
                holder: entity,
                style: ReleaseStyle::Drop,
            });
        }
    }
}

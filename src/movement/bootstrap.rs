//! Movement domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, MovementConfig, MovementState, PLAYER_SIZE, Player, PlayerVisual, SensorAnchors,
};
use crate::sprites::PlayerAnimator;

pub(crate) fn spawn_player(mut commands: Commands, config: Res<MovementConfig>) {
    info!(
        "Spawning player: run_max_speed={}, jump_height={}, gravity_scale={:.3}",
        config.params().run_max_speed,
        config.params().jump_height,
        config.derived().gravity_scale
    );

    commands
        .spawn((
            // Identity & Movement
            (
                Player,
                MovementState::default(),
                SensorAnchors::default(),
                PlayerAnimator::default(),
            ),
            Transform::from_xyz(0.0, 100.0, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(config.derived().gravity_scale),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Object]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerVisual,
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(PLAYER_SIZE),
                    ..default()
                },
                Transform::default(),
            ));
        });
}

//! Short-lived dust effects for jumps and landings.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::PlayerAnimator;
use crate::movement::{EffectKind, EffectRequestEvent};

/// Seconds an effect stays alive before it despawns itself.
pub const EFFECT_LIFETIME_SECS: f32 = 1.0;

#[derive(Component, Debug)]
pub struct EffectLifetime(pub Timer);

impl Default for EffectLifetime {
    fn default() -> Self {
        Self(Timer::from_seconds(EFFECT_LIFETIME_SECS, TimerMode::Once))
    }
}

pub fn effect_size(kind: EffectKind) -> Vec2 {
    match kind {
        EffectKind::Jump => Vec2::new(14.0, 6.0),
        EffectKind::Land => Vec2::new(28.0, 5.0),
    }
}

pub fn spawn_effects(
    mut commands: Commands,
    mut effect_events: MessageReader<EffectRequestEvent>,
    animators: Query<&PlayerAnimator>,
) {
    for event in effect_events.read() {
        let color = animators
            .get(event.source)
            .map(|animator| animator.foreground_color)
            .unwrap_or(Color::WHITE);

        commands.spawn((
            EffectLifetime::default(),
            Sprite {
                color,
                custom_size: Some(effect_size(event.kind)),
                ..default()
            },
            Transform::from_xyz(event.position.x, event.position.y, 1.0),
        ));
    }
}

pub fn expire_effects(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut EffectLifetime, &mut Sprite)>,
) {
    for (entity, mut lifetime, mut sprite) in &mut query {
        lifetime.0.tick(time.delta());

        if lifetime.0.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }

        // Fade out over the lifetime
        let alpha = 1.0 - lifetime.0.fraction();
        sprite.color.set_alpha(alpha);
    }
}

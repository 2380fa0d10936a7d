//! Movement domain: relay from controller transitions to the animator.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    AnimationCue, AnimationCueEvent, AnimationTrigger, EffectKind, EffectRequestEvent,
    MovementState, PLAYER_SIZE, Player, TransitionFlags,
};

impl TransitionFlags {
    /// Take the highest-priority pending transition, clearing only that one.
    pub fn take_next(&mut self) -> Option<AnimationTrigger> {
        if std::mem::take(&mut self.started_jumping) {
            Some(AnimationTrigger::Jump)
        } else if std::mem::take(&mut self.just_landed) {
            Some(AnimationTrigger::Land)
        } else if std::mem::take(&mut self.started_grabbing) {
            Some(AnimationTrigger::Grab)
        } else if std::mem::take(&mut self.started_throwing) {
            Some(AnimationTrigger::Throw)
        } else {
            None
        }
    }
}

impl MovementState {
    /// At most one trigger per frame; otherwise the fall speed for blending.
    pub fn take_animation_cue(&mut self, velocity_y: f32) -> AnimationCue {
        match self.transitions.take_next() {
            Some(trigger) => AnimationCue::Trigger(trigger),
            None => AnimationCue::VerticalVelocity(velocity_y),
        }
    }
}

/// Where the dust effect for a trigger spawns, if it has one.
pub fn effect_for(trigger: AnimationTrigger, origin: Vec2) -> Option<(EffectKind, Vec2)> {
    match trigger {
        AnimationTrigger::Jump => Some((EffectKind::Jump, origin - Vec2::Y * PLAYER_SIZE.y / 2.0)),
        AnimationTrigger::Land => Some((EffectKind::Land, origin - Vec2::Y * PLAYER_SIZE.y / 1.5)),
        AnimationTrigger::Grab | AnimationTrigger::Throw => None,
    }
}

pub(crate) fn relay_animation(
    mut query: Query<(Entity, &Transform, &LinearVelocity, &mut MovementState), With<Player>>,
    mut cue_events: MessageWriter<AnimationCueEvent>,
    mut effect_events: MessageWriter<EffectRequestEvent>,
) {
    for (entity, transform, velocity, mut state) in &mut query {
        let cue = state.take_animation_cue(velocity.y);

        let effect = match cue {
            AnimationCue::Trigger(trigger) => effect_for(trigger, transform.translation.truncate()),
            AnimationCue::VerticalVelocity(_) => None,
        };
        if let Some((kind, position)) = effect {
            effect_events.write(EffectRequestEvent {
                source: entity,
                kind,
                position,
            });
        }

        cue_events.write(AnimationCueEvent { entity, cue });
    }
}

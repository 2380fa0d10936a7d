//! Animation state machine for the player.
//!
//! Receives one-shot triggers and the vertical velocity from the movement
//! relay, and drives the visual child: tilt while running, flip to facing.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::Pausable;
use crate::movement::{
    AnimationCue, AnimationCueEvent, AnimationTrigger, Facing, MovementConfig, MovementState,
    PlayerVisual,
};

/// How long a triggered animation plays before velocity blending resumes.
pub const ONE_SHOT_DURATION: f32 = 0.25;

/// Vertical speed beyond which the animator leaves idle.
pub const AIRBORNE_BLEND_SPEED: f32 = 10.0;

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Jump,
    Fall,
    Land,
    Grab,
    Throw,
}

impl AnimationState {
    pub fn from_trigger(trigger: AnimationTrigger) -> Self {
        match trigger {
            AnimationTrigger::Jump => AnimationState::Jump,
            AnimationTrigger::Land => AnimationState::Land,
            AnimationTrigger::Grab => AnimationState::Grab,
            AnimationTrigger::Throw => AnimationState::Throw,
        }
    }

    /// Idle/jump/fall blend from the vertical velocity.
    pub fn from_vertical_velocity(velocity_y: f32) -> Self {
        if velocity_y > AIRBORNE_BLEND_SPEED {
            AnimationState::Jump
        } else if velocity_y < -AIRBORNE_BLEND_SPEED {
            AnimationState::Fall
        } else {
            AnimationState::Idle
        }
    }
}

/// Animator for the player, stored on the player entity.
#[derive(Component, Debug)]
pub struct PlayerAnimator {
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Seconds spent in the current state.
    pub state_timer: f32,
    /// Last vertical velocity forwarded by the relay.
    pub vertical_velocity: f32,
    /// Lean in degrees at full run speed.
    pub max_tilt: f32,
    /// 0..1 fraction of the remaining lean applied per frame.
    pub tilt_speed: f32,
    /// Color of particle effects spawned for this player.
    pub foreground_color: Color,
    pub paused: bool,
}

impl Default for PlayerAnimator {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            previous_state: AnimationState::Idle,
            state_timer: 0.0,
            vertical_velocity: 0.0,
            max_tilt: 10.0,
            tilt_speed: 0.5,
            foreground_color: Color::srgb(0.95, 0.95, 0.85),
            paused: false,
        }
    }
}

impl PlayerAnimator {
    /// Set the animation state, resetting the timer if it changed.
    /// Returns `true` on a change.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }
        self.previous_state = self.state;
        self.state = state;
        self.state_timer = 0.0;
        true
    }

    /// A triggered state still playing out.
    pub fn is_playing_one_shot(&self) -> bool {
        matches!(
            self.state,
            AnimationState::Land | AnimationState::Grab | AnimationState::Throw
        ) && self.state_timer < ONE_SHOT_DURATION
    }

    /// Returns `true` if the state changed.
    pub fn apply_cue(&mut self, cue: AnimationCue) -> bool {
        match cue {
            AnimationCue::Trigger(trigger) => {
                // A repeated trigger restarts the animation
                let changed = self.set_state(AnimationState::from_trigger(trigger));
                self.state_timer = 0.0;
                changed
            }
            AnimationCue::VerticalVelocity(velocity_y) => {
                self.vertical_velocity = velocity_y;
                if self.is_playing_one_shot() {
                    return false;
                }
                self.set_state(AnimationState::from_vertical_velocity(velocity_y))
            }
        }
    }

    /// Lean angle in degrees for a horizontal velocity, positive when moving left.
    pub fn tilt_for(&self, velocity_x: f32, run_max_speed: f32) -> f32 {
        let progress = inverse_lerp(-run_max_speed, run_max_speed, velocity_x);
        -(progress * self.max_tilt * 2.0 - self.max_tilt)
    }
}

impl Pausable for PlayerAnimator {
    fn on_pause(&mut self) {
        self.paused = true;
    }

    fn on_unpause(&mut self) {
        self.paused = false;
    }
}

pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    ((value - a) / (b - a)).clamp(0.0, 1.0)
}

pub fn apply_animation_cues(
    mut cue_events: MessageReader<AnimationCueEvent>,
    mut query: Query<&mut PlayerAnimator>,
) {
    for event in cue_events.read() {
        let Ok(mut animator) = query.get_mut(event.entity) else {
            continue;
        };

        if animator.apply_cue(event.cue) {
            debug!(
                "Animation {:?}: {:?} -> {:?}",
                event.entity, animator.previous_state, animator.state
            );
        }
    }
}

pub fn update_animation_timers(time: Res<Time>, mut query: Query<&mut PlayerAnimator>) {
    for mut animator in &mut query {
        if !animator.paused {
            animator.state_timer += time.delta_secs();
        }
    }
}

/// Lean the visual into the run and flip it to the facing direction.
pub fn sync_player_visuals(
    config: Res<MovementConfig>,
    players: Query<(&MovementState, &LinearVelocity, &PlayerAnimator, &Children)>,
    mut visuals: Query<(&mut Transform, &mut Sprite), With<PlayerVisual>>,
) {
    let run_max_speed = config.params().run_max_speed;

    for (state, velocity, animator, children) in &players {
        if animator.paused {
            continue;
        }

        let target = animator.tilt_for(velocity.x, run_max_speed).to_radians();

        for child in children.iter() {
            let Ok((mut transform, mut sprite)) = visuals.get_mut(child) else {
                continue;
            };

            sprite.flip_x = state.facing == Facing::Left;

            let (_, _, current) = transform.rotation.to_euler(EulerRot::XYZ);
            let angle = current + (target - current) * animator.tilt_speed;
            transform.rotation = Quat::from_rotation_z(angle);
        }
    }
}

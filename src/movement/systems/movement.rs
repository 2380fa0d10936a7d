//! Movement domain: velocity integration for running and gravity.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementConfig, MovementState, Player};

/// Speeds below this count as "no input" when choosing accel vs decel.
pub const INPUT_EPSILON: f32 = 0.01;

/// Which gravity rule applies this frame, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityMode {
    /// Falling with down held
    FastFall,
    /// Jump released early
    JumpCut,
    /// Near the apex of a jump
    Hang,
    Fall,
    Default,
}

impl GravityMode {
    pub fn scale(self, config: &MovementConfig) -> f32 {
        let params = config.params();
        let base = config.derived().gravity_scale;
        match self {
            GravityMode::FastFall => base * params.fast_fall_gravity_mult,
            GravityMode::JumpCut => base * params.jump_cut_gravity_mult,
            GravityMode::Hang => base * params.jump_hang_gravity_mult,
            GravityMode::Fall => base * params.fall_gravity_mult,
            GravityMode::Default => base,
        }
    }

    /// Maximum downward speed while this mode is active, if capped.
    pub fn fall_cap(self, config: &MovementConfig) -> Option<f32> {
        match self {
            GravityMode::FastFall => Some(config.params().max_fast_fall_speed),
            GravityMode::JumpCut | GravityMode::Fall => Some(config.params().max_fall_speed),
            GravityMode::Hang | GravityMode::Default => None,
        }
    }
}

impl MovementState {
    pub fn gravity_mode(&self, config: &MovementConfig, velocity_y: f32) -> GravityMode {
        if velocity_y < 0.0 && self.move_input.y < 0.0 {
            GravityMode::FastFall
        } else if self.is_jump_cut {
            GravityMode::JumpCut
        } else if self.is_in_jump_hang(velocity_y, config) {
            GravityMode::Hang
        } else if velocity_y < 0.0 {
            GravityMode::Fall
        } else {
            GravityMode::Default
        }
    }

    /// Horizontal force for one fixed step.
    pub fn run_force(&self, config: &MovementConfig, velocity: Vec2) -> f32 {
        let params = config.params();
        let derived = config.derived();

        let mut target_speed = self.move_input.x * params.run_max_speed;
        let has_input = target_speed.abs() > INPUT_EPSILON;

        let mut accel_rate = match (self.is_grounded(), has_input) {
            (true, true) => derived.run_accel_amount,
            (true, false) => derived.run_deccel_amount,
            (false, true) => derived.run_accel_amount * params.accel_in_air,
            (false, false) => derived.run_deccel_amount * params.deccel_in_air,
        };

        // More control and a little extra speed at the top of a jump
        if self.is_in_jump_hang(velocity.y, config) {
            accel_rate *= params.jump_hang_acceleration_mult;
            target_speed *= params.jump_hang_max_speed_mult;
        }

        if self.conserves_momentum(config, velocity.x, target_speed) {
            accel_rate = 0.0;
        }

        (target_speed - velocity.x) * accel_rate
    }

    /// Horizontal velocity change from integrating `run_force` over `dt` on
    /// a unit-mass body. With `dt` at most one fixed step this never carries
    /// the speed past its target.
    pub fn run_step(&self, config: &MovementConfig, velocity: Vec2, dt: f32) -> f32 {
        self.run_force(config, velocity) * dt
    }

    /// Airborne and already faster than the target in the same direction:
    /// keep the speed instead of braking. Letting go of the stick counts as
    /// a target of zero in the direction of travel.
    fn conserves_momentum(&self, config: &MovementConfig, velocity_x: f32, target: f32) -> bool {
        let same_direction =
            target.abs() <= INPUT_EPSILON || velocity_x.signum() == target.signum();

        config.params().do_conserve_momentum
            && self.last_on_ground_time < 0.0
            && velocity_x.abs() > target.abs()
            && same_direction
    }
}

pub(crate) fn apply_gravity(
    config: Res<MovementConfig>,
    mut query: Query<(&MovementState, &mut LinearVelocity, &mut GravityScale), With<Player>>,
) {
    for (state, mut velocity, mut gravity_scale) in &mut query {
        let mode = state.gravity_mode(&config, velocity.y);
        gravity_scale.0 = mode.scale(&config);

        if let Some(cap) = mode.fall_cap(&config) {
            velocity.y = velocity.y.max(-cap);
        }
    }
}

/// Runs in `FixedUpdate`. The force is integrated over the step here so it
/// behaves like a continuous force rather than a velocity snap.
pub(crate) fn apply_run(
    time: Res<Time>,
    config: Res<MovementConfig>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        velocity.x += state.run_step(&config, velocity.0, dt);
    }
}

pub(crate) fn sync_world_gravity(config: Res<MovementConfig>, mut gravity: ResMut<Gravity>) {
    gravity.0 = Vec2::NEG_Y * config.params().world_gravity;
}

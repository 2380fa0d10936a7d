//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::MovementParams;

/// Rate the horizontal integrator runs at. Acceleration amounts are scaled
/// so that `run_acceleration == run_max_speed` reaches full speed in one step.
pub const FIXED_STEP_HZ: f32 = 50.0;

/// Lower bound for run rates and other divisors.
pub const MIN_RUN_RATE: f32 = 0.01;

/// Physics values computed from `MovementParams`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedMovement {
    /// Downward acceleration needed for the configured jump arc (negative)
    pub gravity_strength: f32,
    /// Gravity scale relative to the world gravity
    pub gravity_scale: f32,
    /// Multiplied by the speed difference for the accelerating force
    pub run_accel_amount: f32,
    /// Multiplied by the speed difference for the braking force
    pub run_deccel_amount: f32,
    /// Upward impulse of a jump from rest
    pub jump_force: f32,
}

impl DerivedMovement {
    pub fn from_params(params: &MovementParams) -> Self {
        let gravity_strength =
            -(2.0 * params.jump_height) / (params.jump_time_to_apex * params.jump_time_to_apex);

        Self {
            gravity_strength,
            gravity_scale: gravity_strength / -params.world_gravity,
            run_accel_amount: FIXED_STEP_HZ * params.run_acceleration / params.run_max_speed,
            run_deccel_amount: FIXED_STEP_HZ * params.run_decceleration / params.run_max_speed,
            jump_force: gravity_strength.abs() * params.jump_time_to_apex,
        }
    }
}

/// Movement tuning read by the controller systems.
///
/// Primary values can only change through `new` or `edit`, both of which
/// clamp degenerate values and recompute the derived physics.
#[derive(Resource, Debug, Clone)]
pub struct MovementConfig {
    params: MovementParams,
    derived: DerivedMovement,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self::new(MovementParams::default())
    }
}

impl MovementConfig {
    pub fn new(mut params: MovementParams) -> Self {
        clamp_params(&mut params);
        let derived = DerivedMovement::from_params(&params);
        Self { params, derived }
    }

    pub fn params(&self) -> &MovementParams {
        &self.params
    }

    pub fn derived(&self) -> &DerivedMovement {
        &self.derived
    }

    /// Change primary values, then re-clamp and re-derive.
    pub fn edit(&mut self, f: impl FnOnce(&mut MovementParams)) {
        f(&mut self.params);
        clamp_params(&mut self.params);
        self.derived = DerivedMovement::from_params(&self.params);
    }
}

/// Keep every divisor away from zero and the run rates inside
/// `[MIN_RUN_RATE, run_max_speed]`.
fn clamp_params(params: &mut MovementParams) {
    params.run_max_speed = params.run_max_speed.max(MIN_RUN_RATE);
    params.run_acceleration = params
        .run_acceleration
        .clamp(MIN_RUN_RATE, params.run_max_speed);
    params.run_decceleration = params
        .run_decceleration
        .clamp(MIN_RUN_RATE, params.run_max_speed);
    params.jump_time_to_apex = params.jump_time_to_apex.max(MIN_RUN_RATE);
    params.world_gravity = params.world_gravity.max(MIN_RUN_RATE);
}

/// Raw input for the current frame, written by `read_input`.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub grab_just_pressed: bool,
}

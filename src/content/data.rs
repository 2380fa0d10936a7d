//! Data definitions for RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. Missing fields fall back to the defaults below.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Movement (movement.ron)
// ============================================================================

/// Hand-tuned movement constants. Derived physics values are computed from
/// these by `MovementConfig`, never stored here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MovementParams {
    // Gravity
    /// Magnitude of the world gravity the physics engine integrates
    pub world_gravity: f32,
    /// Gravity multiplier while falling
    pub fall_gravity_mult: f32,
    pub max_fall_speed: f32,
    /// Gravity multiplier while falling with down held
    pub fast_fall_gravity_mult: f32,
    pub max_fast_fall_speed: f32,

    // Run
    pub run_max_speed: f32,
    /// Set equal to run_max_speed for instant acceleration
    pub run_acceleration: f32,
    /// Set equal to run_max_speed to stop on a dime
    pub run_decceleration: f32,
    /// 0..1 multiplier on acceleration while airborne
    pub accel_in_air: f32,
    /// 0..1 multiplier on deceleration while airborne
    pub deccel_in_air: f32,
    pub do_conserve_momentum: bool,

    // Jump
    pub jump_height: f32,
    /// Also controls gravity strength and jump force
    pub jump_time_to_apex: f32,
    /// Gravity multiplier after jump is released early
    pub jump_cut_gravity_mult: f32,
    /// 0..1 gravity multiplier near the apex
    pub jump_hang_gravity_mult: f32,
    /// Vertical speed under which the jump counts as hanging at the apex
    pub jump_hang_time_threshold: f32,
    pub jump_hang_acceleration_mult: f32,
    pub jump_hang_max_speed_mult: f32,

    // Assists
    pub coyote_time: f32,
    pub jump_input_buffer_time: f32,
    pub grab_input_buffer_time: f32,

    // Grab
    /// Real seconds of hit-stop when an object is grabbed
    pub grab_sleep_time: f32,
}

impl Default for MovementParams {
    fn default() -> Self {
        Self {
            world_gravity: 980.0,
            fall_gravity_mult: 1.5,
            max_fall_speed: 900.0,
            fast_fall_gravity_mult: 2.0,
            max_fast_fall_speed: 1200.0,
            run_max_speed: 320.0,
            run_acceleration: 160.0,
            run_decceleration: 200.0,
            accel_in_air: 0.65,
            deccel_in_air: 0.65,
            do_conserve_momentum: true,
            jump_height: 120.0,
            jump_time_to_apex: 0.35,
            jump_cut_gravity_mult: 2.0,
            jump_hang_gravity_mult: 0.5,
            jump_hang_time_threshold: 40.0,
            jump_hang_acceleration_mult: 1.1,
            jump_hang_max_speed_mult: 1.3,
            coyote_time: 0.1,
            jump_input_buffer_time: 0.1,
            grab_input_buffer_time: 0.1,
            grab_sleep_time: 0.05,
        }
    }
}

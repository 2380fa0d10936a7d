//! Movement domain: jump state machine.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{JumpPhase, MovementConfig, MovementState, Player};

impl MovementState {
    pub fn can_jump(&self) -> bool {
        self.is_grounded() && !self.is_jumping
    }

    /// Near the apex of a jump, either side of it.
    pub fn is_in_jump_hang(&self, velocity_y: f32, config: &MovementConfig) -> bool {
        (self.is_jumping || self.is_jump_falling)
            && velocity_y.abs() < config.params().jump_hang_time_threshold
    }

    pub fn jump_phase(&self, velocity_y: f32, config: &MovementConfig) -> JumpPhase {
        if self.is_in_jump_hang(velocity_y, config) {
            JumpPhase::HangApex
        } else if self.is_jumping {
            JumpPhase::Rising
        } else if self.is_jump_falling || !self.is_grounded() {
            JumpPhase::Falling
        } else {
            JumpPhase::Grounded
        }
    }

    /// Rising turns into falling once the body moves down, and touching
    /// ground outside a jump clears the per-jump flags.
    pub fn update_jump_phase(&mut self, velocity_y: f32) {
        if self.is_jumping && velocity_y < 0.0 {
            self.is_jumping = false;
            self.is_jump_falling = true;
        }

        if self.is_grounded() && !self.is_jumping {
            self.is_jump_cut = false;
            self.is_jump_falling = false;
        }
    }

    /// Fire a buffered jump if coyote time and the jump buffer are both armed.
    ///
    /// Returns the upward velocity change for a unit-mass body. Any downward
    /// velocity is added on top, so a jump taken while still falling reaches
    /// the same height as one from rest.
    pub fn try_jump(&mut self, config: &MovementConfig, velocity_y: f32) -> Option<f32> {
        if !self.can_jump() || self.last_pressed_jump_time <= 0.0 {
            return None;
        }

        self.is_jumping = true;
        self.is_jump_cut = false;
        self.is_jump_falling = false;
        // One press, one jump
        self.last_pressed_jump_time = 0.0;
        self.last_on_ground_time = 0.0;
        self.transitions.started_jumping = true;

        let mut force = config.derived().jump_force;
        if velocity_y < 0.0 {
            force -= velocity_y;
        }
        Some(force)
    }
}

pub(crate) fn update_jump_state(
    config: Res<MovementConfig>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        state.update_jump_phase(velocity.y);

        if let Some(impulse) = state.try_jump(&config, velocity.y) {
            velocity.y += impulse;
            debug!("Jump: impulse={:.1}, velocity_y={:.1}", impulse, velocity.y);
        }
    }
}

//! Movement domain: input sampling for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Facing, MovementConfig, MovementInput, MovementState, Player};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (down held = fast fall)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyC);
    input.jump_just_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyC);
    input.grab_just_pressed =
        keyboard.just_pressed(KeyCode::KeyF) || keyboard.just_pressed(KeyCode::ShiftLeft);
}

impl MovementState {
    /// Count every timer down by `dt`. Timers are allowed to go negative;
    /// how far below zero the ground timer is tells how long we were airborne.
    pub fn tick_timers(&mut self, dt: f32) {
        self.last_on_ground_time -= dt;
        self.last_pressed_jump_time -= dt;
        self.last_pressed_grab_time -= dt;
    }

    pub fn set_move_input(&mut self, axis: Vec2) {
        self.move_input = axis.clamp(Vec2::NEG_ONE, Vec2::ONE);

        if self.move_input.x != 0.0 {
            self.check_direction_to_face(self.move_input.x > 0.0);
        }
    }

    pub fn check_direction_to_face(&mut self, is_moving_right: bool) {
        self.facing = if is_moving_right {
            Facing::Right
        } else {
            Facing::Left
        };
    }

    pub fn on_jump_input(&mut self, config: &MovementConfig) {
        self.last_pressed_jump_time = config.params().jump_input_buffer_time;
    }

    /// Releasing jump while still going up cuts the jump short.
    pub fn on_jump_up_input(&mut self, velocity_y: f32) {
        if self.can_jump_cut(velocity_y) {
            self.is_jump_cut = true;
        }
    }

    pub fn on_grab_input(&mut self, config: &MovementConfig) {
        self.last_pressed_grab_time = config.params().grab_input_buffer_time;
    }

    pub fn can_jump_cut(&self, velocity_y: f32) -> bool {
        self.is_jumping && velocity_y > 0.0
    }

    /// The whole input step for one frame: timers first, then edges.
    pub fn sample(
        &mut self,
        input: &MovementInput,
        config: &MovementConfig,
        dt: f32,
        velocity_y: f32,
    ) {
        self.tick_timers(dt);
        self.set_move_input(input.axis);

        if input.jump_just_pressed {
            self.on_jump_input(config);
        }
        if input.jump_just_released {
            self.on_jump_up_input(velocity_y);
        }
        if input.grab_just_pressed {
            self.on_grab_input(config);
        }
    }
}

pub(crate) fn sample_input(
    time: Res<Time>,
    input: Res<MovementInput>,
    config: Res<MovementConfig>,
    mut query: Query<(&mut MovementState, &LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, velocity) in &mut query {
        state.sample(&input, &config, dt, velocity.y);
    }
}

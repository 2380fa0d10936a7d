//! Movement domain: the player controller plugin wiring and public exports.
//!
//! Per frame, in order: input sampling, ground/object sensing, the jump and
//! grab state machines, gravity selection and the animation relay. The
//! horizontal run force is integrated separately in `FixedUpdate`.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod systems;


pub use components::{
    Facing, GameLayer, Grabbable, Ground, HeldBy, JumpPhase, MovementState, PLAYER_SIZE, Player,
    PlayerVisual, SensorAnchors, SensorBox, TransitionFlags, held_layers, object_layers,
};
pub use events::{
    AnimationCue, AnimationCueEvent, AnimationTrigger, EffectKind, EffectRequestEvent,
    ObjectGrabbedEvent, ReleaseHeldEvent, ReleaseStyle,
};
pub use resources::{DerivedMovement, FIXED_STEP_HZ, MIN_RUN_RATE, MovementConfig, MovementInput};
pub use systems::collisions::LANDING_THRESHOLD;
pub use systems::movement::{GravityMode, INPUT_EPSILON};

use bevy::prelude::*;

use crate::core::{Pausable, RegisterPausable, gameplay_active};
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_gravity, apply_run, attach_grabbed_objects, detect_ground, read_input, relay_animation,
    release_held_objects, release_removed_freezes, sample_input, sync_world_gravity, try_grab,
    update_jump_state,
};

impl Pausable for MovementState {
    /// Nothing pressed before the pause may fire after it.
    fn on_pause(&mut self) {
        self.move_input = Vec2::ZERO;
        self.last_pressed_jump_time = 0.0;
        self.last_pressed_grab_time = 0.0;
    }
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .insert_resource(Time::<Fixed>::from_hz(FIXED_STEP_HZ as f64))
            .add_message::<AnimationCueEvent>()
            .add_message::<EffectRequestEvent>()
            .add_message::<ObjectGrabbedEvent>()
            .add_message::<ReleaseHeldEvent>()
            .register_pausable::<MovementState>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    read_input,
                    sample_input,
                    detect_ground,
                    update_jump_state,
                    try_grab,
                    attach_grabbed_objects,
                    release_held_objects,
                    apply_gravity,
                    relay_animation,
                )
                    .chain()
                    .run_if(gameplay_active),
            )
            .add_systems(
                Update,
                (
                    release_removed_freezes,
                    sync_world_gravity.run_if(resource_exists_and_changed::<MovementConfig>),
                ),
            )
            .add_systems(FixedUpdate, apply_run);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room).add_systems(
            Update,
            (dev::reload_movement_config, dev::drop_held_object).before(release_held_objects),
        );
    }
}

//! Movement domain: system modules for the controller's per-frame passes.

pub(crate) mod animation;
pub(crate) mod collisions;
pub(crate) mod grab;
pub(crate) mod input;
pub(crate) mod jump;
pub(crate) mod movement;

pub(crate) use animation::relay_animation;
pub(crate) use collisions::detect_ground;
pub(crate) use grab::{
    attach_grabbed_objects, release_held_objects, release_removed_freezes, try_grab,
};
pub(crate) use input::{read_input, sample_input};
pub(crate) use jump::update_jump_state;
pub(crate) use movement::{apply_gravity, apply_run, sync_world_gravity};

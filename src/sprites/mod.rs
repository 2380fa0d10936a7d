//! Sprites module for the player's animator and visual effects.
//!
//! This module handles:
//! - Turning movement cues into animation states
//! - Tilt and facing of the player sprite
//! - Jump and landing dust effects

pub mod animation;
pub mod effects;


use bevy::prelude::*;

pub use animation::*;
pub use effects::*;

use crate::core::{RegisterPausable, gameplay_active};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.register_pausable::<PlayerAnimator>()
            .add_systems(
                Update,
                (
                    apply_animation_cues,
                    update_animation_timers,
                    sync_player_visuals.run_if(gameplay_active),
                    spawn_effects,
                    expire_effects,
                )
                    .chain(),
            );
    }
}

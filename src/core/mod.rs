//! Core domain: camera, pause flow and the virtual clock scheduler.

mod events;
mod pause;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use pause::{Pausable, RegisterPausable};
pub use resources::{TimeScaleScheduler, gameplay_active};

use bevy::prelude::*;

use crate::core::events::PauseChangedEvent;
use crate::core::pause::toggle_pause;
use crate::core::systems::{apply_time_scale, setup_camera, tick_time_scale};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TimeScaleScheduler>()
            .add_message::<PauseChangedEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(PreUpdate, tick_time_scale)
            .add_systems(Update, toggle_pause)
            .add_systems(PostUpdate, apply_time_scale);
    }
}

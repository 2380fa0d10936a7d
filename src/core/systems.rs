//! Core domain: camera setup and virtual clock upkeep.

use bevy::prelude::*;

use crate::core::resources::TimeScaleScheduler;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Hit-stop is measured in real seconds so it can expire while the
/// virtual clock is stopped.
pub(crate) fn tick_time_scale(real: Res<Time<Real>>, mut scheduler: ResMut<TimeScaleScheduler>) {
    let was_frozen = scheduler.is_frozen();
    scheduler.tick(real.delta_secs());

    if was_frozen && !scheduler.is_frozen() {
        debug!("Hit-stop finished");
    }
}

pub(crate) fn apply_time_scale(
    scheduler: Res<TimeScaleScheduler>,
    mut time: ResMut<Time<Virtual>>,
) {
    let speed = scheduler.speed();
    if time.relative_speed() != speed {
        time.set_relative_speed(speed);
    }
}

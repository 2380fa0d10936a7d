//! Content domain: data-driven tuning loaded from RON files.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::MovementParams;
pub use loader::{ContentLoadError, load_movement_params};
pub use validation::{ValidationError, validate_movement};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementConfig;

/// Directory holding the RON data files, relative to the working directory.
pub const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MovementParams>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load movement tuning and validate it.
/// Any failure is logged and the built-in defaults are used instead.
pub fn load_validated_movement(base_path: &Path) -> MovementParams {
    let params = match load_movement_params(base_path) {
        Ok(params) => params,
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            return MovementParams::default();
        }
    };

    let errors = validate_movement(&params);
    if errors.is_empty() {
        return params;
    }

    for error in &errors {
        error!("Validation error: {}", error);
    }
    warn!(
        "Movement tuning has {} validation errors, using defaults",
        errors.len()
    );
    MovementParams::default()
}

fn load_content(mut commands: Commands) {
    let config = MovementConfig::new(load_validated_movement(Path::new(DATA_DIR)));
    let derived = config.derived();

    info!(
        "Loaded movement config: run_max_speed={}, jump_force={:.1}, gravity_scale={:.3}",
        config.params().run_max_speed,
        derived.jump_force,
        derived.gravity_scale
    );

    commands.insert_resource(config);
}

//! Movement domain: ground and object overlap sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementConfig, MovementState, Player, SensorAnchors};

/// How far below zero the ground timer must be before touching ground
/// again counts as a landing. Filters out a single frame of timer underflow.
pub const LANDING_THRESHOLD: f32 = -0.1;

impl MovementState {
    /// Feed this frame's overlap result into the coyote timer.
    ///
    /// The sensor is ignored while rising from a jump, so a jump that starts
    /// inside the ground box cannot re-ground itself. Returns `true` on a
    /// landing.
    pub fn sense_ground(&mut self, touching: bool, config: &MovementConfig) -> bool {
        if self.is_jumping || !touching {
            return false;
        }

        let landed = self.last_on_ground_time < LANDING_THRESHOLD;
        if landed {
            self.transitions.just_landed = true;
        }

        self.last_on_ground_time = config.params().coyote_time;
        landed
    }

    pub fn is_grounded(&self) -> bool {
        self.last_on_ground_time > 0.0
    }
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    config: Res<MovementConfig>,
    mut query: Query<(&Transform, &SensorAnchors, &mut MovementState), With<Player>>,
) {
    // Standing on objects counts as ground too
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let object_filter = SpatialQueryFilter::from_mask(GameLayer::Object);

    for (transform, anchors, mut state) in &mut query {
        if state.is_jumping {
            continue;
        }

        let origin = transform.translation.truncate();
        let ground = anchors.ground_check;
        let object = anchors.object_check;

        let touching = !spatial_query
            .shape_intersections(
                &ground.collider(),
                ground.center(origin),
                0.0,
                &ground_filter,
            )
            .is_empty()
            || !spatial_query
                .shape_intersections(
                    &object.collider(),
                    object.center(origin),
                    0.0,
                    &object_filter,
                )
                .is_empty();

        if state.sense_ground(touching, &config) {
            debug!("Landed at ({:.1}, {:.1})", origin.x, origin.y);
        }
    }
}

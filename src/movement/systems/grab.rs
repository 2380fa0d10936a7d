//! Movement domain: grab state machine and the carried-object hand-off.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::TimeScaleScheduler;
use crate::movement::{
    GameLayer, Grabbable, HeldBy, MovementConfig, MovementState, ObjectGrabbedEvent, Player,
    ReleaseHeldEvent, ReleaseStyle, SensorAnchors, held_layers, object_layers,
};

impl MovementState {
    pub fn can_grab(&self) -> bool {
        self.is_grounded() && !self.is_grabbing
    }

    /// Grounded, hands free and a grab press still buffered.
    pub fn wants_grab(&self) -> bool {
        self.can_grab() && self.last_pressed_grab_time > 0.0
    }

    /// `Idle -> Held`. Does nothing and returns `false` unless the transition
    /// fires, so calling it while already holding is a no-op.
    ///
    /// Grabbing cancels the rise of a jump in progress.
    pub fn begin_grab(&mut self, object: Entity) -> bool {
        if !self.wants_grab() {
            return false;
        }

        self.is_grabbing = true;
        self.held = Some(object);
        self.last_pressed_grab_time = 0.0;
        self.is_jumping = false;
        self.is_jump_cut = false;
        self.is_jump_falling = true;
        self.transitions.started_grabbing = true;
        true
    }

    /// `Held -> Idle`. Forgets the carried object and hands it back.
    pub fn release_held(&mut self, style: ReleaseStyle) -> Option<Entity> {
        let object = self.held.take()?;
        self.is_grabbing = false;

        if style == ReleaseStyle::Throw {
            self.transitions.started_throwing = true;
        }
        Some(object)
    }
}

pub(crate) fn try_grab(
    spatial_query: SpatialQuery,
    config: Res<MovementConfig>,
    mut scheduler: ResMut<TimeScaleScheduler>,
    grabbables: Query<(), (With<Grabbable>, Without<HeldBy>)>,
    mut query: Query<(Entity, &Transform, &SensorAnchors, &mut MovementState), With<Player>>,
    mut grabbed_events: MessageWriter<ObjectGrabbedEvent>,
) {
    let object_filter = SpatialQueryFilter::from_mask(GameLayer::Object);

    for (entity, transform, anchors, mut state) in &mut query {
        if !state.wants_grab() {
            continue;
        }

        let check = anchors.object_check;
        let origin = transform.translation.truncate();
        let Some(object) = spatial_query
            .shape_intersections(&check.collider(), check.center(origin), 0.0, &object_filter)
            .into_iter()
            .find(|candidate| grabbables.contains(*candidate))
        else {
            continue;
        };

        if let Some(event) = grab_object(entity, object, &mut state, &config, &mut scheduler) {
            grabbed_events.write(event);
        }
    }
}

/// Fire `Idle -> Held` for `holder` and request the grab hit-stop.
/// Returns the grab message, or `None` when the transition did not fire.
pub(crate) fn grab_object(
    holder: Entity,
    object: Entity,
    state: &mut MovementState,
    config: &MovementConfig,
    scheduler: &mut TimeScaleScheduler,
) -> Option<ObjectGrabbedEvent> {
    if !state.begin_grab(object) {
        return None;
    }

    let sleep = config.params().grab_sleep_time;
    if scheduler.request_freeze(holder, sleep) {
        debug!("Hit-stop: {:.3}s for grab by {:?}", sleep, holder);
    }

    debug!("Grab: {:?} picked up {:?}", holder, object);
    Some(ObjectGrabbedEvent { holder, object })
}

/// Move a freshly grabbed object onto the holder's hold spot and take it
/// out of the simulation.
pub(crate) fn attach_grabbed_objects(
    mut commands: Commands,
    mut grabbed_events: MessageReader<ObjectGrabbedEvent>,
    holders: Query<&SensorAnchors>,
) {
    for event in grabbed_events.read() {
        let Ok(anchors) = holders.get(event.holder) else {
            continue;
        };

        let hold = anchors.hold_spot.offset;
        commands.entity(event.holder).add_child(event.object);
        commands.entity(event.object).insert((
            HeldBy(event.holder),
            Transform::from_xyz(hold.x, hold.y, 1.0),
            LinearVelocity::ZERO,
            RigidBodyDisabled,
            ColliderDisabled,
            held_layers(),
        ));
    }
}

/// Hand carried objects back to the world at their current position.
pub(crate) fn release_held_objects(
    mut commands: Commands,
    mut release_events: MessageReader<ReleaseHeldEvent>,
    mut holders: Query<&mut MovementState>,
    objects: Query<&GlobalTransform>,
) {
    for event in release_events.read() {
        let Ok(mut state) = holders.get_mut(event.holder) else {
            warn!("Release requested for non-player {:?}", event.holder);
            continue;
        };

        let Some(object) = state.release_held(event.style) else {
            warn!("Release requested but {:?} holds nothing", event.holder);
            continue;
        };

        let Ok(global) = objects.get(object) else {
            warn!("Held object {:?} no longer exists", object);
            continue;
        };
        let world_transform = global.compute_transform();

        debug!("Release ({:?}): {:?} let go of {:?}", event.style, event.holder, object);
        commands
            .entity(object)
            .remove::<(ChildOf, HeldBy, RigidBodyDisabled, ColliderDisabled)>()
            .insert((world_transform, object_layers()));
    }
}

/// Freeze requests never outlive their owner.
pub(crate) fn release_removed_freezes(
    mut removed: RemovedComponents<Player>,
    mut scheduler: ResMut<TimeScaleScheduler>,
) {
    for entity in removed.read() {
        if scheduler.release_owner(entity) {
            debug!("Dropped hit-stop held by removed player {:?}", entity);
        }
    }
}

//! Movement domain: events emitted by the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Discrete animation triggers understood by the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTrigger {
    Jump,
    Land,
    Grab,
    Throw,
}

/// What the relay sends the animator in one frame: a trigger, or the
/// vertical velocity for idle/fall blending when nothing fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationCue {
    Trigger(AnimationTrigger),
    VerticalVelocity(f32),
}

#[derive(Debug)]
pub struct AnimationCueEvent {
    pub entity: Entity,
    pub cue: AnimationCue,
}

impl Message for AnimationCueEvent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Jump,
    Land,
}

/// Request for a short-lived visual effect at a world position
#[derive(Debug)]
pub struct EffectRequestEvent {
    pub source: Entity,
    pub kind: EffectKind,
    pub position: Vec2,
}

impl Message for EffectRequestEvent {}

/// Event emitted when a player picks up an object
#[derive(Debug)]
pub struct ObjectGrabbedEvent {
    pub holder: Entity,
    pub object: Entity,
}

impl Message for ObjectGrabbedEvent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseStyle {
    /// Put the object back into the world where it is
    #[default]
    Drop,
    /// Same hand-back, plus the throw animation cue
    Throw,
}

/// Ask a holder to hand its carried object back to the world.
///
/// No throw physics are applied; the object keeps its current position and
/// simply resumes simulation.
#[derive(Debug)]
pub struct ReleaseHeldEvent {
    pub holder: Entity,
    pub style: ReleaseStyle,
}

impl Message for ReleaseHeldEvent {}

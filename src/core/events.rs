//! Core domain: events for pause flow.

use bevy::ecs::message::Message;

/// Event fired when gameplay is paused or resumed
#[derive(Debug, Clone, Copy)]
pub struct PauseChangedEvent {
    pub paused: bool,
}

impl Message for PauseChangedEvent {}

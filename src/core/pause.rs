//! Core domain: pause capability shared by any component that cares.

use bevy::ecs::component::Mutable;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::events::PauseChangedEvent;
use crate::core::resources::TimeScaleScheduler;

/// Pause source registered by the pause key.
pub const PLAYER_PAUSE_SOURCE: &str = "player";

/// Anything that reacts to the game being paused implements this.
pub trait Pausable {
    fn on_pause(&mut self);

    fn on_unpause(&mut self) {}
}

/// Registers the notification system for a `Pausable` component type.
pub trait RegisterPausable {
    fn register_pausable<T>(&mut self) -> &mut Self
    where
        T: Component<Mutability = Mutable> + Pausable;
}

impl RegisterPausable for App {
    fn register_pausable<T>(&mut self) -> &mut Self
    where
        T: Component<Mutability = Mutable> + Pausable,
    {
        self.add_systems(Update, notify_pausables::<T>.after(toggle_pause))
    }
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut scheduler: ResMut<TimeScaleScheduler>,
    mut pause_events: MessageWriter<PauseChangedEvent>,
) {
    if !keyboard.just_pressed(KeyCode::KeyP) {
        return;
    }

    let paused = !scheduler.is_paused();
    if paused {
        scheduler.pause(PLAYER_PAUSE_SOURCE);
    } else {
        scheduler.unpause(PLAYER_PAUSE_SOURCE);
    }

    info!("Gameplay {}", if paused { "paused" } else { "resumed" });
    pause_events.write(PauseChangedEvent { paused });
}

pub(crate) fn notify_pausables<T>(
    mut pause_events: MessageReader<PauseChangedEvent>,
    mut query: Query<&mut T>,
) where
    T: Component<Mutability = Mutable> + Pausable,
{
    for event in pause_events.read() {
        for mut pausable in &mut query {
            if event.paused {
                pausable.on_pause();
            } else {
                pausable.on_unpause();
            }
        }
    }
}

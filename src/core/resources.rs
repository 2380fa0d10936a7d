//! Core domain: the single owner of the virtual clock's speed.

use bevy::prelude::*;
use std::collections::HashSet;

/// A hit-stop request held by one owner, counted down in real seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreezeRequest {
    pub owner: Entity,
    pub remaining: f32,
}

/// Owns the relative speed of `Time<Virtual>`.
///
/// Gameplay is stopped while any pause source is registered or any freeze
/// request is still running. Freeze requests are keyed by owner so a second
/// request from the same owner extends the first instead of stacking.
/// `apply_time_scale` is the only system that writes the virtual clock.
#[derive(Resource, Debug)]
pub struct TimeScaleScheduler {
    base_speed: f32,
    pause_sources: HashSet<String>,
    freezes: Vec<FreezeRequest>,
}

impl Default for TimeScaleScheduler {
    fn default() -> Self {
        Self::with_base_speed(1.0)
    }
}

impl TimeScaleScheduler {
    pub fn with_base_speed(base_speed: f32) -> Self {
        Self {
            base_speed: base_speed.max(0.0),
            pause_sources: HashSet::new(),
            freezes: Vec::new(),
        }
    }

    pub fn is_paused(&self) -> bool {
        !self.pause_sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.pause_sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.pause_sources.remove(&source.into());
    }

    /// Request a freeze of `duration` real seconds on behalf of `owner`.
    /// Returns `true` only when this call started a new freeze for that owner.
    pub fn request_freeze(&mut self, owner: Entity, duration: f32) -> bool {
        if duration <= 0.0 {
            return false;
        }

        if let Some(existing) = self.freezes.iter_mut().find(|r| r.owner == owner) {
            existing.remaining = existing.remaining.max(duration);
            return false;
        }

        self.freezes.push(FreezeRequest {
            owner,
            remaining: duration,
        });
        true
    }

    /// Drop every request held by `owner`. Returns `true` if one was dropped.
    pub fn release_owner(&mut self, owner: Entity) -> bool {
        let before = self.freezes.len();
        self.freezes.retain(|r| r.owner != owner);
        self.freezes.len() != before
    }

    /// Count down freeze requests by elapsed real time, expiring finished ones.
    pub fn tick(&mut self, real_delta: f32) {
        for request in &mut self.freezes {
            request.remaining -= real_delta;
        }
        self.freezes.retain(|r| r.remaining > 0.0);
    }

    pub fn is_frozen(&self) -> bool {
        !self.freezes.is_empty()
    }

    pub fn active_freezes(&self) -> usize {
        self.freezes.len()
    }

    pub fn base_speed(&self) -> f32 {
        self.base_speed
    }

    /// The relative speed the virtual clock should run at right now.
    pub fn speed(&self) -> f32 {
        if self.is_paused() || self.is_frozen() {
            0.0
        } else {
            self.base_speed
        }
    }
}

/// Run condition: true unless a pause source is registered.
///
/// Hit-stop does not count here: input is still sampled during a freeze,
/// only the clock stops.
pub fn gameplay_active(scheduler: Res<TimeScaleScheduler>) -> bool {
    !scheduler.is_paused()
}

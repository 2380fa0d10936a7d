//! Core domain: tests for the virtual clock scheduler.

use bevy::prelude::*;

use super::TimeScaleScheduler;

fn two_entities() -> (Entity, Entity) {
    let mut world = World::new();
    (world.spawn_empty().id(), world.spawn_empty().id())
}

// -----------------------------------------------------------------------------
// Freeze requests
// -----------------------------------------------------------------------------

#[test]
fn test_scheduler_default_runs_at_base_speed() {
    let scheduler = TimeScaleScheduler::default();
    assert!(!scheduler.is_frozen());
    assert!(!scheduler.is_paused());
    assert_eq!(scheduler.speed(), 1.0);
}

#[test]
fn test_freeze_stops_clock_until_expired() {
    let (owner, _) = two_entities();
    let mut scheduler = TimeScaleScheduler::default();

    assert!(scheduler.request_freeze(owner, 0.1));
    assert_eq!(scheduler.speed(), 0.0);

    scheduler.tick(0.05);
    assert!(scheduler.is_frozen());

    scheduler.tick(0.06);
    assert!(!scheduler.is_frozen());
    assert_eq!(scheduler.speed(), 1.0);
}

#[test]
fn test_same_owner_freeze_does_not_stack() {
    let (owner, _) = two_entities();
    let mut scheduler = TimeScaleScheduler::default();

    assert!(scheduler.request_freeze(owner, 0.1));
    assert!(!scheduler.request_freeze(owner, 0.1));
    assert_eq!(scheduler.active_freezes(), 1);

    // A single tick past the duration restores time, no double-apply
    scheduler.tick(0.11);
    assert_eq!(scheduler.speed(), 1.0);
}

#[test]
fn test_same_owner_freeze_extends_to_longer_request() {
    let (owner, _) = two_entities();
    let mut scheduler = TimeScaleScheduler::default();

    scheduler.request_freeze(owner, 0.05);
    scheduler.request_freeze(owner, 0.2);
    scheduler.tick(0.1);
    assert!(scheduler.is_frozen());
    scheduler.tick(0.11);
    assert!(!scheduler.is_frozen());
}

#[test]
fn test_overlapping_freezes_compose() {
    let (a, b) = two_entities();
    let mut scheduler = TimeScaleScheduler::default();

    assert!(scheduler.request_freeze(a, 0.1));
    assert!(scheduler.request_freeze(b, 0.3));
    assert_eq!(scheduler.active_freezes(), 2);

    scheduler.tick(0.15);
    assert_eq!(scheduler.active_freezes(), 1);
    assert_eq!(scheduler.speed(), 0.0);

    scheduler.tick(0.2);
    assert_eq!(scheduler.active_freezes(), 0);
    assert_eq!(scheduler.speed(), 1.0);
}

#[test]
fn test_release_owner_restores_time() {
    let (owner, other) = two_entities();
    let mut scheduler = TimeScaleScheduler::default();

    scheduler.request_freeze(owner, 10.0);
    assert!(!scheduler.release_owner(other));
    assert!(scheduler.release_owner(owner));
    assert_eq!(scheduler.speed(), 1.0);
}

#[test]
fn test_zero_duration_freeze_is_ignored() {
    let (owner, _) = two_entities();
    let mut scheduler = TimeScaleScheduler::default();

    assert!(!scheduler.request_freeze(owner, 0.0));
    assert!(!scheduler.is_frozen());
}

// -----------------------------------------------------------------------------
// Pause sources
// -----------------------------------------------------------------------------

#[test]
fn test_pause_sources() {
    let mut scheduler = TimeScaleScheduler::default();

    scheduler.pause("menu");
    scheduler.pause("dialogue");
    assert!(scheduler.is_paused());

    scheduler.unpause("menu");
    assert!(scheduler.is_paused());

    scheduler.unpause("dialogue");
    assert!(!scheduler.is_paused());
}

#[test]
fn test_pause_and_freeze_compose() {
    let (owner, _) = two_entities();
    let mut scheduler = TimeScaleScheduler::with_base_speed(0.5);

    scheduler.pause("menu");
    scheduler.request_freeze(owner, 0.1);
    scheduler.tick(0.2);
    // Freeze expired but pause still holds the clock
    assert_eq!(scheduler.speed(), 0.0);

    scheduler.unpause("menu");
    assert_eq!(scheduler.speed(), 0.5);
}

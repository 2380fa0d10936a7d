//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Size of the player's body collider and placeholder sprite.
pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Objects the player can stand on or pick up (word blocks, enemies)
    Object,
    /// Objects currently carried; collides with nothing
    Held,
    /// Player character
    Player,
}

/// Collision layers for a free-standing object in the world.
pub fn object_layers() -> CollisionLayers {
    CollisionLayers::new(
        GameLayer::Object,
        [GameLayer::Ground, GameLayer::Object, GameLayer::Player],
    )
}

/// Collision layers for an object while it is carried.
pub fn held_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Held, LayerMask::NONE)
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for the child entity that carries the player's sprite.
/// The physics body itself never rotates; the visual does.
#[derive(Component, Debug)]
pub struct PlayerVisual;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Anything that can be picked up by the player
#[derive(Component, Debug, Default)]
pub struct Grabbable;

/// Present on a grabbable while it is carried
#[derive(Component, Debug, Clone, Copy)]
pub struct HeldBy(pub Entity);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// One-shot transitions waiting for the animation relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionFlags {
    pub started_jumping: bool,
    pub just_landed: bool,
    pub started_grabbing: bool,
    pub started_throwing: bool,
}

/// Coarse view of the jump state machine, derived from `MovementState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    Grounded,
    Rising,
    Falling,
    /// Near the apex of a jump, rising or falling
    HangApex,
}

/// Per-player controller state. Timers count down every frame and are
/// armed while positive.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub facing: Facing,
    pub is_jumping: bool,
    pub is_jump_falling: bool,
    pub is_jump_cut: bool,
    pub is_grabbing: bool,
    /// The carried object. The world owns it; this is a back-reference.
    pub held: Option<Entity>,
    /// Coyote countdown, refreshed while touching ground
    pub last_on_ground_time: f32,
    /// Jump input buffer countdown
    pub last_pressed_jump_time: f32,
    /// Grab input buffer countdown
    pub last_pressed_grab_time: f32,
    pub move_input: Vec2,
    pub transitions: TransitionFlags,
}

/// An axis-aligned overlap box relative to the owner's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorBox {
    pub offset: Vec2,
    pub size: Vec2,
}

impl SensorBox {
    pub fn center(&self, origin: Vec2) -> Vec2 {
        origin + self.offset
    }

    pub fn collider(&self) -> Collider {
        Collider::rectangle(self.size.x, self.size.y)
    }
}

/// Where the controller probes for ground and objects, and where carried
/// objects sit.
#[derive(Component, Debug, Clone)]
pub struct SensorAnchors {
    pub ground_check: SensorBox,
    pub object_check: SensorBox,
    pub hold_spot: SensorBox,
}

impl Default for SensorAnchors {
    fn default() -> Self {
        let feet = -PLAYER_SIZE.y / 2.0;
        Self {
            ground_check: SensorBox {
                offset: Vec2::new(0.0, feet),
                size: Vec2::new(PLAYER_SIZE.x * 0.98, 1.5),
            },
            object_check: SensorBox {
                offset: Vec2::new(0.0, feet - 1.0),
                size: Vec2::new(PLAYER_SIZE.x * 0.98, 1.5),
            },
            hold_spot: SensorBox {
                offset: Vec2::new(0.0, PLAYER_SIZE.y / 2.0 + 14.0),
                size: Vec2::new(PLAYER_SIZE.x * 2.77, PLAYER_SIZE.x * 0.77),
            },
        }
    }
}

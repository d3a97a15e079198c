//! Game entities: ship, bullets, asteroids
//!
//! All three share the same per-tick kinematics style: position and angle
//! integrate once per fixed tick, with no delta-time scaling. The ship and
//! asteroids live on a torus; bullets fly off the edge and die there.

pub mod asteroid;
pub mod bullet;
pub mod ship;

pub use asteroid::{Asteroid, AsteroidClass};
pub use bullet::Bullet;
pub use ship::Ship;

use arcade_kit::prelude::Vec2;

/// Arena extent in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    /// Width in pixels
    pub width: f32,

    /// Height in pixels
    pub height: f32,
}

impl Arena {
    /// Create an arena of the given size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of the arena
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Teleport a position to the opposite edge once the entity is wholly past
/// an edge by its own width or height.
pub(crate) fn wrap(pos: &mut Vec2, width: f32, height: f32, arena: Arena) {
    if pos.x < -width {
        pos.x = arena.width;
    } else if pos.x > arena.width {
        pos.x = -width;
    }

    if pos.y < -height {
        pos.y = arena.height;
    } else if pos.y > arena.height {
        pos.y = -height;
    }
}

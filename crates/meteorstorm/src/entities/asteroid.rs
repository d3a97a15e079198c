//! Asteroids and their size classes

use super::{wrap, Arena};
use arcade_kit::prelude::{Rect, Vec2};
use rand::Rng;

/// Asteroid size class.
///
/// The class is the single table driving score value, collision box,
/// tumble rate, drift speed, and what (if anything) the asteroid splits
/// into when destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidClass {
    /// Large asteroid (splits into two medium)
    Big,

    /// Medium asteroid (splits into two small)
    Medium,

    /// Small asteroid (destroyed outright)
    Small,
}

impl AsteroidClass {
    /// Points awarded when an asteroid of this class is destroyed
    pub fn score(self) -> u32 {
        match self {
            Self::Big => 10,
            Self::Medium => 50,
            Self::Small => 100,
        }
    }

    /// The class of the two fragments, or `None` for the smallest
    pub fn split(self) -> Option<Self> {
        match self {
            Self::Big => Some(Self::Medium),
            Self::Medium => Some(Self::Small),
            Self::Small => None,
        }
    }

    /// Collision box dimensions, matching the sprite for each class
    pub fn size(self) -> (f32, f32) {
        match self {
            Self::Big => (101.0, 84.0),
            Self::Medium => (43.0, 43.0),
            Self::Small => (18.0, 18.0),
        }
    }

    /// Tumble rate scale; bigger rocks turn slower
    fn rotation_scale(self) -> f32 {
        match self {
            Self::Big | Self::Medium => 0.05,
            Self::Small => 0.1,
        }
    }

    /// Drift speed scale; bigger rocks drift slower
    fn velocity_scale(self) -> f32 {
        match self {
            Self::Big => 0.1,
            Self::Medium => 0.3,
            Self::Small => 0.5,
        }
    }
}

/// A drifting, tumbling rock
#[derive(Debug, Clone)]
pub struct Asteroid {
    pos: Vec2,
    velocity: Vec2,
    rotation_speed: f32,
    angle: f32,
    class: AsteroidClass,
    destroyed: bool,
    width: f32,
    height: f32,
}

impl Asteroid {
    /// Spawn an asteroid at `pos` with randomized drift, tumble, and
    /// initial heading
    pub fn new(pos: Vec2, class: AsteroidClass, rng: &mut impl Rng) -> Self {
        let (width, height) = class.size();
        let scale = class.velocity_scale();
        Self {
            pos,
            velocity: Vec2::new(
                rng.gen_range(0..10) as f32 * scale,
                rng.gen_range(0..10) as f32 * scale,
            ),
            rotation_speed: rng.gen_range(0..10) as f32 * class.rotation_scale(),
            angle: rng.gen_range(0..360) as f32,
            class,
            destroyed: false,
            width,
            height,
        }
    }

    /// Advance one tick: drift, tumble, wrap around the arena
    pub fn update(&mut self, arena: Arena) {
        self.pos += self.velocity;
        self.angle = (self.angle + self.rotation_speed).rem_euclid(360.0);
        wrap(&mut self.pos, self.width, self.height, arena);
    }

    /// Replace the drift velocity (fragments get theirs from the split)
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Flag this asteroid destroyed; scoring and fragment spawning happen
    /// when the session observes the flag
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Whether the destroyed flag is set
    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    /// Size class
    pub fn class(&self) -> AsteroidClass {
        self.class
    }

    /// Current position
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Current tumble angle in degrees
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Collision box
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

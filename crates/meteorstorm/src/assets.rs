//! Sprite assets
//!
//! All art is loaded once at startup; a missing file aborts with the
//! offending path in the error instead of drawing nothing later.

use crate::entities::AsteroidClass;
use arcade_kit::prelude::{RenderError, SpriteId, Surface};

const BACKGROUND: &str = "assets/Backgrounds/black.png";
const SHIP: &str = "assets/PNG/playerShip1_blue.png";
const BULLET: &str = "assets/PNG/laser.png";
const METEOR_BIG: &str = "assets/PNG/Meteors/meteorBrown_big1.png";
const METEOR_MEDIUM: &str = "assets/PNG/Meteors/meteorBrown_med1.png";
const METEOR_SMALL: &str = "assets/PNG/Meteors/meteorBrown_tiny1.png";

/// Handles to every sprite the game draws
pub struct Sprites {
    /// Full-screen backdrop
    pub background: SpriteId,

    /// Player ship
    pub ship: SpriteId,

    /// Bullet
    pub bullet: SpriteId,

    /// Big meteor
    pub meteor_big: SpriteId,

    /// Medium meteor
    pub meteor_medium: SpriteId,

    /// Small meteor
    pub meteor_small: SpriteId,
}

impl Sprites {
    /// Load every sprite the game needs
    pub fn load(surface: &mut Surface<'_, '_>) -> Result<Self, RenderError> {
        Ok(Self {
            background: surface.load_sprite(BACKGROUND)?,
            ship: surface.load_sprite(SHIP)?,
            bullet: surface.load_sprite(BULLET)?,
            meteor_big: surface.load_sprite(METEOR_BIG)?,
            meteor_medium: surface.load_sprite(METEOR_MEDIUM)?,
            meteor_small: surface.load_sprite(METEOR_SMALL)?,
        })
    }

    /// The meteor sprite for a size class
    pub fn meteor(&self, class: AsteroidClass) -> SpriteId {
        match class {
            AsteroidClass::Big => self.meteor_big,
            AsteroidClass::Medium => self.meteor_medium,
            AsteroidClass::Small => self.meteor_small,
        }
    }
}

//! Bullets

use super::{Arena, Asteroid};
use arcade_kit::prelude::{Rect, Vec2};

/// Bullet collision box width in pixels
pub const BULLET_WIDTH: f32 = 4.0;

/// Bullet collision box height in pixels
pub const BULLET_HEIGHT: f32 = 27.0;

/// A projectile flying in a straight line.
///
/// The firing angle is fixed at creation; bullets never wrap, and one
/// wholly outside the arena is destroyed.
#[derive(Debug, Clone)]
pub struct Bullet {
    pos: Vec2,
    speed: f32,
    angle: f32,
    destroyed: bool,
    width: f32,
    height: f32,
}

impl Bullet {
    /// Create a bullet at `pos` heading along `angle`
    pub fn new(pos: Vec2, angle: f32, speed: f32) -> Self {
        Self {
            pos,
            speed,
            angle,
            destroyed: false,
            width: BULLET_WIDTH,
            height: BULLET_HEIGHT,
        }
    }

    /// Advance one tick along the firing angle; cull once wholly outside
    /// the arena
    pub fn update(&mut self, arena: Arena) {
        let rad = self.angle.to_radians();
        let direction = Vec2::new(-rad.cos(), -rad.sin());
        self.pos += direction * self.speed;

        if self.pos.x < -self.width
            || self.pos.x > arena.width
            || self.pos.y < -self.height
            || self.pos.y > arena.height
        {
            self.destroyed = true;
        }
    }

    /// Destroy the first live asteroid this bullet overlaps, and the
    /// bullet with it. At most one asteroid per bullet per tick.
    pub fn collide(&mut self, asteroids: &mut [Asteroid]) {
        if self.destroyed {
            return;
        }
        for asteroid in asteroids.iter_mut() {
            if !asteroid.destroyed() && self.rect().overlaps(&asteroid.rect()) {
                asteroid.destroy();
                self.destroyed = true;
                return;
            }
        }
    }

    /// Whether the destroyed flag is set
    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    /// Firing angle in degrees
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Collision box
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AsteroidClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ARENA: Arena = Arena::new(1024.0, 768.0);

    #[test]
    fn test_update_moves_along_firing_angle() {
        // Angle 90 is "up": direction (-cos 90, -sin 90) = (0, -1)
        let mut bullet = Bullet::new(Vec2::new(500.0, 400.0), 90.0, 15.0);
        bullet.update(ARENA);
        assert!((bullet.pos.x - 500.0).abs() < 1e-3);
        assert!((bullet.pos.y - 385.0).abs() < 1e-3);
    }

    #[test]
    fn test_direction_never_changes() {
        let mut bullet = Bullet::new(Vec2::new(500.0, 400.0), 90.0, 15.0);
        for _ in 0..5 {
            bullet.update(ARENA);
        }
        assert!((bullet.pos.y - (400.0 - 5.0 * 15.0)).abs() < 1e-3);
    }

    #[test]
    fn test_culled_when_wholly_off_screen() {
        let mut bullet = Bullet::new(Vec2::new(500.0, 10.0), 90.0, 15.0);
        bullet.update(ARENA);
        assert!(!bullet.destroyed());
        for _ in 0..3 {
            bullet.update(ARENA);
        }
        assert!(bullet.destroyed());
    }

    #[test]
    fn test_collide_destroys_first_overlap_only() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut bullet = Bullet::new(Vec2::new(100.0, 100.0), 90.0, 15.0);
        let mut asteroids = vec![
            Asteroid::new(Vec2::new(60.0, 60.0), AsteroidClass::Big, &mut rng),
            Asteroid::new(Vec2::new(70.0, 70.0), AsteroidClass::Big, &mut rng),
        ];
        bullet.collide(&mut asteroids);
        assert!(bullet.destroyed());
        assert!(asteroids[0].destroyed());
        assert!(!asteroids[1].destroyed());
    }

    #[test]
    fn test_collide_skips_already_destroyed() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut bullet = Bullet::new(Vec2::new(100.0, 100.0), 90.0, 15.0);
        let mut asteroids = vec![
            Asteroid::new(Vec2::new(60.0, 60.0), AsteroidClass::Big, &mut rng),
            Asteroid::new(Vec2::new(70.0, 70.0), AsteroidClass::Big, &mut rng),
        ];
        asteroids[0].destroy();
        bullet.collide(&mut asteroids);
        assert!(asteroids[1].destroyed());
    }

    #[test]
    fn test_no_collision_without_overlap() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut bullet = Bullet::new(Vec2::new(100.0, 100.0), 90.0, 15.0);
        let mut asteroids = vec![Asteroid::new(
            Vec2::new(900.0, 700.0),
            AsteroidClass::Small,
            &mut rng,
        )];
        bullet.collide(&mut asteroids);
        assert!(!bullet.destroyed());
        assert!(!asteroids[0].destroyed());
    }
}

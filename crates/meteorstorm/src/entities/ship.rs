//! The player ship

use super::{wrap, Arena, Bullet};
use crate::config::Tuning;
use arcade_kit::prelude::{KeyCode, Rect, Vec2};

/// Ship collision box width in pixels
pub const SHIP_WIDTH: f32 = 49.0;

/// Ship collision box height in pixels
pub const SHIP_HEIGHT: f32 = 37.0;

/// Default facing angle in degrees; 90 points the nose up
const START_ANGLE: f32 = 90.0;

/// Linear drag applied per axis per tick while not thrusting
const DRAG_STEP: f32 = 0.25;

/// The player ship.
///
/// Input is a held-key state machine: thrust and rotation persist across
/// ticks until the matching key-up arrives. While the destroyed flag is
/// set the ship ignores input and updates; [`respawn`](Self::respawn)
/// brings it back once the delay has elapsed.
#[derive(Debug, Clone)]
pub struct Ship {
    pos: Vec2,
    velocity: Vec2,
    max_velocity: Vec2,
    speed: f32,
    rotation_speed: f32,
    rotation_dir: f32,
    angle: f32,
    thrusting: bool,
    drift_pos_x: bool,
    drift_pos_y: bool,
    destroyed: bool,
    respawn_delay: f32,
    respawn_timer: f32,
    shoot_cooldown: f32,
    shoot_timer: f32,
    bullet_speed: f32,
    width: f32,
    height: f32,
    muzzle: Vec2,
}

impl Ship {
    /// Create a ship at the center of the arena.
    ///
    /// The shoot timer starts at the cooldown threshold, so the first shot
    /// is available immediately.
    pub fn new(arena: Arena, tuning: &Tuning) -> Self {
        let width = SHIP_WIDTH;
        let height = SHIP_HEIGHT;
        Self {
            pos: center_spawn(arena, width, height),
            velocity: Vec2::zeros(),
            max_velocity: Vec2::new(tuning.ship_speed, tuning.ship_speed),
            speed: tuning.ship_speed,
            rotation_speed: tuning.ship_rotation_speed,
            rotation_dir: 0.0,
            angle: START_ANGLE,
            thrusting: false,
            drift_pos_x: true,
            drift_pos_y: true,
            destroyed: false,
            respawn_delay: tuning.respawn_delay_ms,
            respawn_timer: 0.0,
            shoot_cooldown: tuning.shoot_cooldown_ms,
            shoot_timer: tuning.shoot_cooldown_ms,
            bullet_speed: tuning.bullet_speed,
            width,
            height,
            muzzle: Vec2::new(width * 0.5, 0.0),
        }
    }

    /// Feed one key transition into the held-key state machine.
    ///
    /// Returns the bullet fired by a Space press that beat the cooldown.
    /// No-op while destroyed.
    pub fn input(&mut self, key: KeyCode, pressed: bool) -> Option<Bullet> {
        if self.destroyed {
            return None;
        }
        if pressed {
            match key {
                KeyCode::W => self.thrusting = true,
                KeyCode::A => self.rotation_dir = -self.rotation_speed,
                KeyCode::D => self.rotation_dir = self.rotation_speed,
                KeyCode::Space => return self.shoot(),
                _ => {}
            }
        } else {
            match key {
                KeyCode::W => self.thrusting = false,
                KeyCode::A | KeyCode::D => self.rotation_dir = 0.0,
                _ => {}
            }
        }
        None
    }

    /// Advance one tick: thrust or drag, integrate position and angle,
    /// wrap, accumulate the shoot cooldown. No-op while destroyed.
    pub fn update(&mut self, arena: Arena, tick_ms: f32) {
        if self.destroyed {
            return;
        }

        if self.thrusting {
            let rad = self.angle.to_radians();
            self.velocity = Vec2::new(-rad.cos(), -rad.sin()) * (self.speed * 0.25);

            // Clamp is an upper bound only
            if self.velocity.x > self.max_velocity.x {
                self.velocity.x = self.max_velocity.x;
            }
            if self.velocity.y > self.max_velocity.y {
                self.velocity.y = self.max_velocity.y;
            }

            self.drift_pos_x = self.velocity.x > 0.0;
            self.drift_pos_y = self.velocity.y > 0.0;
        } else {
            // Linear drag toward zero, gated on the drift-direction flags;
            // a positive component with a cleared flag snaps to zero
            if self.drift_pos_x && self.velocity.x > 0.0 {
                self.velocity.x -= DRAG_STEP;
            } else if self.velocity.x < 0.0 {
                self.velocity.x += DRAG_STEP;
            } else {
                self.velocity.x = 0.0;
            }

            if self.drift_pos_y && self.velocity.y > 0.0 {
                self.velocity.y -= DRAG_STEP;
            } else if self.velocity.y < 0.0 {
                self.velocity.y += DRAG_STEP;
            } else {
                self.velocity.y = 0.0;
            }
        }

        self.pos += self.velocity;
        if self.rotation_dir != 0.0 {
            self.angle += self.rotation_dir;
        }
        self.angle = self.angle.rem_euclid(360.0);

        wrap(&mut self.pos, self.width, self.height, arena);

        if self.shoot_timer < self.shoot_cooldown {
            self.shoot_timer += tick_ms;
        }
    }

    /// Fire a bullet from the muzzle if the cooldown has elapsed
    pub fn shoot(&mut self) -> Option<Bullet> {
        if self.shoot_timer < self.shoot_cooldown {
            return None;
        }
        self.shoot_timer = 0.0;
        Some(Bullet::new(
            self.pos + self.muzzle,
            self.angle,
            self.bullet_speed,
        ))
    }

    /// Accumulate the respawn delay while destroyed.
    ///
    /// Returns `true` on the tick the delay is observed elapsed: the ship
    /// is reset to the arena center and revived, and the caller deducts
    /// the life at that moment, not at collision time.
    pub fn respawn(&mut self, arena: Arena, tick_ms: f32) -> bool {
        if self.respawn_timer >= self.respawn_delay {
            self.destroyed = false;
            self.pos = center_spawn(arena, self.width, self.height);
            self.velocity = Vec2::zeros();
            self.angle = START_ANGLE;
            self.thrusting = false;
            self.drift_pos_x = true;
            self.drift_pos_y = true;
            self.rotation_dir = 0.0;
            self.respawn_timer = 0.0;
            true
        } else {
            self.respawn_timer += tick_ms;
            false
        }
    }

    /// Flag the ship destroyed; it stops moving and ignoring input until
    /// respawned
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Whether the destroyed flag is set
    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    /// Current facing angle in degrees
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Collision box
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

fn center_spawn(arena: Arena, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        arena.width * 0.5 - width * 0.5,
        arena.height * 0.5 - height * 0.5,
    )
}

//! Game session: score, lives, waves, and the per-tick pipeline
//!
//! All mutable game state lives here. The tick pipeline keeps the
//! two-phase destroy-flag-then-compact pattern: collisions only set flags,
//! and the session converts flagged asteroids into score and fragments
//! before compacting, so no scan ever mutates the collection it walks.

use crate::config::Tuning;
use crate::entities::{Arena, Asteroid, AsteroidClass, Bullet, Ship};
use arcade_kit::prelude::{KeyCode, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fragment drift scale; fragments of every class drift at the medium rate
const FRAGMENT_SPEED_SCALE: f32 = 0.3;

/// One play session from first start through any number of restarts
pub struct Session {
    score: u32,
    lives: i32,
    wave: u32,
    game_started: bool,
    wave_ended: bool,
    game_over: bool,
    wave_timer: f32,
    ship: Ship,
    bullets: Vec<Bullet>,
    asteroids: Vec<Asteroid>,
    arena: Arena,
    tuning: Tuning,
    rng: StdRng,
}

impl Session {
    /// Create a fresh session waiting for the start key
    pub fn new(arena: Arena, tuning: Tuning) -> Self {
        Self::with_rng(arena, tuning, StdRng::from_entropy())
    }

    /// Create a session with a caller-supplied RNG (deterministic replays
    /// and tests)
    pub fn with_rng(arena: Arena, tuning: Tuning, rng: StdRng) -> Self {
        let ship = Ship::new(arena, &tuning);
        Self {
            score: 0,
            lives: tuning.starting_lives,
            wave: 0,
            game_started: false,
            wave_ended: true,
            game_over: false,
            wave_timer: 0.0,
            ship,
            bullets: Vec::new(),
            asteroids: Vec::new(),
            arena,
            tuning,
            rng,
        }
    }

    /// Route one key transition according to the current state:
    /// Space starts the game, Escape restarts after game over, everything
    /// else goes to the ship's held-key machine
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !self.game_started {
            if pressed && key == KeyCode::Space {
                self.start_game();
            }
        } else if self.game_over {
            if pressed && key == KeyCode::Escape {
                self.restart();
            }
        } else if !self.ship.destroyed() {
            if let Some(bullet) = self.ship.input(key, pressed) {
                self.bullets.push(bullet);
            }
        }
    }

    /// Advance the whole session by one fixed tick
    pub fn tick(&mut self, tick_ms: f32) {
        if self.game_started && self.wave_ended {
            self.start_wave(tick_ms);
        }

        for bullet in &mut self.bullets {
            bullet.update(self.arena);
        }
        for asteroid in &mut self.asteroids {
            asteroid.update(self.arena);
        }
        self.ship.update(self.arena, tick_ms);

        if !self.ship.destroyed() {
            for asteroid in &mut self.asteroids {
                if self.ship.rect().overlaps(&asteroid.rect()) {
                    self.ship.destroy();
                    asteroid.destroy();
                }
            }
        }

        // Game over is decided before a respawn is attempted, so the last
        // collision never turns into a free revival
        if self.ship.destroyed() {
            if self.lives <= 0 {
                if !self.game_over {
                    log::info!("game over at wave {} with score {}", self.wave, self.score);
                }
                self.game_over = true;
            } else if self.ship.respawn(self.arena, tick_ms) {
                self.lives -= 1;
            }
        }

        for bullet in &mut self.bullets {
            bullet.collide(&mut self.asteroids);
        }

        self.bullets.retain(|bullet| !bullet.destroyed());

        // Flagged asteroids pay out score and split before compaction
        let mut fragments = Vec::new();
        for asteroid in &self.asteroids {
            if asteroid.destroyed() {
                self.score += asteroid.class().score();
                if let Some(class) = asteroid.class().split() {
                    fragments.extend(split_fragments(
                        asteroid.pos(),
                        class,
                        &mut self.rng,
                    ));
                }
            }
        }
        self.asteroids.retain(|asteroid| !asteroid.destroyed());
        self.asteroids.extend(fragments);

        if self.asteroids.is_empty() {
            self.wave_ended = true;
        }
    }

    /// Start the first wave countdown and flip the session into play
    fn start_game(&mut self) {
        log::info!("game started");
        self.game_started = true;
        self.start_wave(0.0);
    }

    /// Reset everything and go back to waiting for the start key
    fn restart(&mut self) {
        log::info!("session restarted");
        self.game_over = false;
        self.game_started = false;
        self.wave_ended = true;
        self.wave = 0;
        self.lives = self.tuning.starting_lives;
        self.score = 0;
        self.wave_timer = 0.0;
        self.bullets.clear();
        self.asteroids.clear();
        self.ship = Ship::new(self.arena, &self.tuning);
    }

    /// Accumulate the pre-wave delay; once it elapses, spawn the next wave
    /// as a ring of big asteroids around the arena center
    fn start_wave(&mut self, tick_ms: f32) {
        if self.wave_timer < self.tuning.wave_delay_ms {
            self.wave_timer += tick_ms;
            return;
        }

        self.wave += 1;
        self.wave_ended = false;
        self.wave_timer = 0.0;

        let count = (self.wave + 2).min(self.tuning.max_wave_asteroids) as usize;
        let (big_w, big_h) = AsteroidClass::Big.size();
        let center = self.arena.center();
        let radius = self.tuning.spawn_ring_radius;
        let jitter = self.tuning.spawn_jitter;

        for i in 0..count {
            let theta = std::f32::consts::TAU * i as f32 / count as f32;
            let x = (theta.cos() * radius).round() + center.x - big_w * 0.5
                + self.rng.gen_range(-jitter..=jitter) as f32;
            let y = (theta.sin() * radius).round() + center.y - big_h * 0.5
                + self.rng.gen_range(-jitter..=jitter) as f32;
            self.asteroids.push(Asteroid::new(
                Vec2::new(x, y),
                AsteroidClass::Big,
                &mut self.rng,
            ));
        }

        log::info!("wave {} started with {} asteroids", self.wave, count);
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Remaining lives
    pub fn lives(&self) -> i32 {
        self.lives
    }

    /// Current wave number (0 before the first wave)
    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Whether play has started
    pub fn game_started(&self) -> bool {
        self.game_started
    }

    /// Whether the next wave is counting down
    pub fn wave_ended(&self) -> bool {
        self.wave_ended
    }

    /// Whether the session has ended
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The player ship
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Live bullets
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    /// Live asteroids
    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    /// Arena extent
    pub fn arena(&self) -> Arena {
        self.arena
    }
}

/// Two fragments at the parent's position with independent random drifts,
/// the second negated so the pair scatters apart
fn split_fragments(pos: Vec2, class: AsteroidClass, rng: &mut StdRng) -> [Asteroid; 2] {
    let first_velocity = Vec2::new(
        rng.gen_range(0..10) as f32 * FRAGMENT_SPEED_SCALE,
        rng.gen_range(0..10) as f32 * FRAGMENT_SPEED_SCALE,
    );
    let second_velocity = Vec2::new(
        rng.gen_range(0..10) as f32 * -FRAGMENT_SPEED_SCALE,
        rng.gen_range(0..10) as f32 * -FRAGMENT_SPEED_SCALE,
    );
    let mut first = Asteroid::new(pos, class, rng);
    first.set_velocity(first_velocity);
    let mut second = Asteroid::new(pos, class, rng);
    second.set_velocity(second_velocity);
    [first, second]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK_MS: f32 = 30.0;

    fn session() -> Session {
        Session::with_rng(
            Arena::new(1024.0, 768.0),
            Tuning::default(),
            StdRng::seed_from_u64(1234),
        )
    }

    /// Ticks required to see the pre-wave delay elapse (100 accumulate the
    /// 3000 ms, the 101st observes it)
    const WAVE_DELAY_TICKS: usize = 101;

    fn run_ticks(session: &mut Session, n: usize) {
        for _ in 0..n {
            session.tick(TICK_MS);
        }
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), 2);
        assert_eq!(session.wave(), 0);
        assert!(!session.game_started());
        assert!(session.wave_ended());
        assert!(!session.game_over());
        assert!(session.asteroids().is_empty());
        assert!(session.bullets().is_empty());
    }

    #[test]
    fn test_space_starts_the_game() {
        let mut session = session();
        session.handle_key(KeyCode::Space, true);
        assert!(session.game_started());
        // The wave itself waits for the pre-wave delay
        assert!(session.asteroids().is_empty());
    }

    #[test]
    fn test_first_wave_spawns_three_big_asteroids() {
        let mut session = session();
        session.handle_key(KeyCode::Space, true);
        run_ticks(&mut session, WAVE_DELAY_TICKS);

        assert_eq!(session.wave(), 1);
        assert_eq!(session.asteroids().len(), 3);
        assert!(!session.wave_ended());
        for asteroid in session.asteroids() {
            assert_eq!(asteroid.class(), AsteroidClass::Big);
        }
    }

    #[test]
    fn test_wave_spawns_on_a_ring_away_from_center() {
        let mut session = session();
        session.handle_key(KeyCode::Space, true);
        run_ticks(&mut session, WAVE_DELAY_TICKS);

        let center = session.arena().center();
        let radius = session.tuning.spawn_ring_radius;
        let slack = session.tuning.spawn_jitter as f32 + 101.0;
        for asteroid in session.asteroids() {
            let offset = asteroid.pos() - center;
            let distance = (offset.x * offset.x + offset.y * offset.y).sqrt();
            assert!(
                (distance - radius).abs() <= slack + 2.0,
                "asteroid at distance {distance} from center"
            );
        }
    }

    #[test]
    fn test_wave_count_scales_and_caps() {
        let mut session = session();
        session.wave = 1;
        session.game_started = true;
        session.wave_timer = session.tuning.wave_delay_ms;
        session.start_wave(TICK_MS);
        assert_eq!(session.wave(), 2);
        assert_eq!(session.asteroids().len(), 4);

        session.asteroids.clear();
        session.wave = 30;
        session.wave_timer = session.tuning.wave_delay_ms;
        session.start_wave(TICK_MS);
        assert_eq!(session.asteroids().len(), 23);
    }

    #[test]
    fn test_bullet_kill_scores_and_splits() {
        let mut session = session();
        session.game_started = true;
        session.wave_ended = false;

        // A big rock parked where the bullet will be after one tick,
        // well away from the ship at the arena center
        let bullet = Bullet::new(Vec2::new(100.0, 400.0), 90.0, 15.0);
        let mut rock = Asteroid::new(Vec2::new(70.0, 350.0), AsteroidClass::Big, &mut session.rng);
        rock.set_velocity(Vec2::zeros());
        let rock_pos = rock.pos();
        session.bullets.push(bullet);
        session.asteroids.push(rock);

        session.tick(TICK_MS);

        assert_eq!(session.score(), 10);
        assert!(session.bullets().is_empty());
        assert_eq!(session.asteroids().len(), 2);
        for fragment in session.asteroids() {
            assert_eq!(fragment.class(), AsteroidClass::Medium);
            // Fragments spawn exactly at the parent's position
            assert_eq!(fragment.pos(), rock_pos);
        }
    }

    #[test]
    fn test_small_asteroid_leaves_no_fragments() {
        let mut session = session();
        session.game_started = true;
        session.wave_ended = false;

        let bullet = Bullet::new(Vec2::new(100.0, 400.0), 90.0, 15.0);
        let mut rock =
            Asteroid::new(Vec2::new(95.0, 380.0), AsteroidClass::Small, &mut session.rng);
        rock.set_velocity(Vec2::zeros());
        session.bullets.push(bullet);
        session.asteroids.push(rock);

        session.tick(TICK_MS);

        assert_eq!(session.score(), 100);
        assert!(session.asteroids().is_empty());
        // With the field cleared the wave is over
        assert!(session.wave_ended());
    }

    #[test]
    fn test_ramming_costs_the_ship_and_kills_the_rock() {
        let mut session = session();
        let ship_rect = session.ship.rect();
        let mut rock = Asteroid::new(
            Vec2::new(ship_rect.x, ship_rect.y),
            AsteroidClass::Small,
            &mut session.rng,
        );
        rock.set_velocity(Vec2::zeros());
        session.asteroids.push(rock);

        session.tick(TICK_MS);

        assert!(session.ship().destroyed());
        assert_eq!(session.score(), 100);
        assert!(session.asteroids().is_empty());
        // Lives are untouched until the respawn completes
        assert_eq!(session.lives(), 2);
    }

    #[test]
    fn test_life_deducted_when_respawn_completes() {
        let mut session = session();
        // The collision tick itself starts accumulating the delay
        destroy_ship_with_rock(&mut session);
        assert_eq!(session.lives(), 2);

        // 99 more ticks complete the 3000 ms accumulation; the life is
        // still untouched until the elapsed delay is observed
        run_ticks(&mut session, 99);
        assert!(session.ship().destroyed());
        assert_eq!(session.lives(), 2);

        session.tick(TICK_MS);
        assert!(!session.ship().destroyed());
        assert_eq!(session.lives(), 1);
    }

    #[test]
    fn test_third_collision_is_game_over() {
        let mut session = session();

        for expected_lives in [1, 0] {
            destroy_ship_with_rock(&mut session);
            run_ticks(&mut session, 101);
            assert!(!session.ship().destroyed());
            assert_eq!(session.lives(), expected_lives);
            assert!(!session.game_over());
        }

        destroy_ship_with_rock(&mut session);
        session.tick(TICK_MS);
        assert!(session.game_over());
        // No revival after the last life
        run_ticks(&mut session, 200);
        assert!(session.ship().destroyed());
        assert!(session.game_over());
    }

    #[test]
    fn test_shooting_through_the_session() {
        let mut session = session();
        session.game_started = true;
        session.wave_ended = false;

        session.handle_key(KeyCode::Space, true);
        assert_eq!(session.bullets().len(), 1);

        // Cooldown swallows an immediate second press
        session.handle_key(KeyCode::Space, true);
        assert_eq!(session.bullets().len(), 1);

        // After the cooldown elapses a new shot goes out; the first bullet
        // has long since flown off the top edge and been culled
        run_ticks(&mut session, 34);
        assert!(session.bullets().is_empty());
        session.handle_key(KeyCode::Space, true);
        assert_eq!(session.bullets().len(), 1);
    }

    #[test]
    fn test_wave_clear_rearms_the_countdown() {
        let mut session = session();
        session.handle_key(KeyCode::Space, true);
        run_ticks(&mut session, WAVE_DELAY_TICKS);
        assert_eq!(session.wave(), 1);

        session.asteroids.clear();
        session.tick(TICK_MS);
        assert!(session.wave_ended());

        run_ticks(&mut session, WAVE_DELAY_TICKS);
        assert_eq!(session.wave(), 2);
        assert_eq!(session.asteroids().len(), 4);
    }

    #[test]
    fn test_escape_restarts_after_game_over() {
        let mut session = session();
        session.game_started = true;
        session.score = 300;
        session.wave = 4;
        session.lives = 0;
        session.game_over = true;
        session.ship.destroy();
        session.bullets.push(Bullet::new(Vec2::new(0.0, 0.0), 90.0, 15.0));

        session.handle_key(KeyCode::Escape, true);

        assert!(!session.game_over());
        assert!(!session.game_started());
        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), 2);
        assert_eq!(session.wave(), 0);
        assert!(session.bullets().is_empty());
        assert!(!session.ship().destroyed());
    }

    #[test]
    fn test_ship_input_ignored_before_start_and_after_game_over() {
        let mut session = session();
        session.handle_key(KeyCode::W, true);
        assert!(session.bullets().is_empty());

        session.game_started = true;
        session.game_over = true;
        session.handle_key(KeyCode::Space, true);
        assert!(session.bullets().is_empty());
    }

    /// Park a zero-velocity small rock on the ship and let one tick
    /// resolve the collision
    fn destroy_ship_with_rock(session: &mut Session) {
        let ship_rect = session.ship.rect();
        let pos = Vec2::new(ship_rect.x, ship_rect.y);
        let mut rock = Asteroid::new(pos, AsteroidClass::Small, &mut session.rng);
        rock.set_velocity(Vec2::zeros());
        session.asteroids.push(rock);
        session.tick(TICK_MS);
        assert!(session.ship().destroyed());
    }
}

//! The game application: wiring the session to the platform loop

use crate::assets::Sprites;
use crate::config::GameConfig;
use crate::entities::Arena;
use crate::hud::Hud;
use crate::session::Session;
use arcade_kit::prelude::{AppError, AppEvent, Application, Engine};

/// Sprites are drawn with their facing angle offset so that angle 90
/// matches the art's "nose up" orientation
const SPRITE_ANGLE_OFFSET: f32 = -90.0;

/// The game application
pub struct MeteorstormApp {
    session: Session,
    sprites: Option<Sprites>,
    hud: Option<Hud>,
}

impl MeteorstormApp {
    /// Create the application from loaded configuration
    pub fn new(config: &GameConfig) -> Self {
        let arena = Arena::new(config.display.width as f32, config.display.height as f32);
        Self {
            session: Session::new(arena, config.tuning.clone()),
            sprites: None,
            hud: None,
        }
    }
}

impl Application for MeteorstormApp {
    fn initialize(&mut self, engine: &mut Engine<'_, '_>) -> Result<(), AppError> {
        let surface = engine.surface_mut();
        self.sprites = Some(Sprites::load(surface)?);
        self.hud = Some(Hud::new(surface, self.session.arena())?);
        log::info!("assets loaded, waiting for the start key");
        Ok(())
    }

    fn handle_event(
        &mut self,
        engine: &mut Engine<'_, '_>,
        event: AppEvent,
    ) -> Result<(), AppError> {
        match event {
            AppEvent::QuitRequested => engine.quit(),
            AppEvent::KeyDown(key) => self.session.handle_key(key, true),
            AppEvent::KeyUp(key) => self.session.handle_key(key, false),
        }
        Ok(())
    }

    fn update(&mut self, _engine: &mut Engine<'_, '_>, tick_ms: f32) -> Result<(), AppError> {
        self.session.tick(tick_ms);
        Ok(())
    }

    fn render(&mut self, engine: &mut Engine<'_, '_>) -> Result<(), AppError> {
        let (Some(sprites), Some(hud)) = (&self.sprites, &self.hud) else {
            return Ok(());
        };
        let surface = engine.surface_mut();

        surface.clear();
        surface.draw_fullscreen(sprites.background)?;

        for bullet in self.session.bullets() {
            surface.draw_rotated(
                sprites.bullet,
                bullet.rect(),
                bullet.angle() + SPRITE_ANGLE_OFFSET,
            )?;
        }
        for asteroid in self.session.asteroids() {
            surface.draw_rotated(
                sprites.meteor(asteroid.class()),
                asteroid.rect(),
                asteroid.angle() + SPRITE_ANGLE_OFFSET,
            )?;
        }
        let ship = self.session.ship();
        if !ship.destroyed() {
            surface.draw_rotated(sprites.ship, ship.rect(), ship.angle() + SPRITE_ANGLE_OFFSET)?;
        }

        hud.draw(surface, &self.session);
        Ok(())
    }
}

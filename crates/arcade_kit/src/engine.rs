//! Core engine implementation
//!
//! Owns the SDL window, the render surface, the event pump, and the tick
//! pacing. The loop is synchronous and single-threaded: poll all pending
//! events, update once, render once, present, sleep off the rest of the
//! tick.

use crate::application::{AppEvent, Application};
use crate::foundation::time::TickClock;
use crate::input::KeyCode;
use crate::render::Surface;
use sdl2::event::Event;
use thiserror::Error;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Tick interval in milliseconds
    pub tick_interval_ms: f32,

    /// Path of the TTF font used for all text
    pub font_path: String,

    /// Font point size
    pub font_point_size: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "arcade_kit".to_string(),
            width: 1024,
            height: 768,
            tick_interval_ms: 30.0,
            font_path: "assets/font.ttf".to_string(),
            font_point_size: 16,
        }
    }
}

/// Main engine struct
///
/// Created by [`Engine::run`]; applications receive it by mutable reference
/// in every lifecycle call.
pub struct Engine<'c, 'ttf> {
    surface: Surface<'c, 'ttf>,
    events: sdl2::EventPump,
    clock: TickClock,
    running: bool,
}

impl<'c, 'ttf> Engine<'c, 'ttf> {
    /// Run the fixed-tick main loop with the given application.
    ///
    /// Returns when the application calls [`quit`](Self::quit); the window
    /// close signal is delivered as [`AppEvent::QuitRequested`] first, so
    /// the application decides how to shut down.
    pub fn run<A: Application>(config: EngineConfig, app: &mut A) -> Result<(), EngineError> {
        log::info!(
            "initializing platform: {}x{} window, {} ms tick",
            config.width,
            config.height,
            config.tick_interval_ms
        );

        let sdl = sdl2::init().map_err(EngineError::Init)?;
        let video = sdl.video().map_err(EngineError::Init)?;
        let _image = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(EngineError::Init)?;
        let ttf = sdl2::ttf::init().map_err(|e| EngineError::Init(e.to_string()))?;

        let window = video
            .window(&config.title, config.width, config.height)
            .position_centered()
            .build()?;
        let canvas = window.into_canvas().accelerated().build()?;
        let creator = canvas.texture_creator();
        let font = ttf
            .load_font(&config.font_path, config.font_point_size)
            .map_err(|message| EngineError::Font {
                path: config.font_path.clone(),
                message,
            })?;
        let events = sdl.event_pump().map_err(EngineError::Init)?;

        let mut engine = Engine {
            surface: Surface::new(canvas, &creator, font),
            events,
            clock: TickClock::new(config.tick_interval_ms),
            running: true,
        };

        app.initialize(&mut engine)
            .map_err(|e| EngineError::Application(format!("initialization: {e}")))?;

        log::info!("entering main loop");
        while engine.running {
            engine.clock.begin();

            for event in engine.poll_events() {
                app.handle_event(&mut engine, event)
                    .map_err(|e| EngineError::Application(format!("event handling: {e}")))?;
            }

            let tick_ms = engine.clock.interval_ms();
            app.update(&mut engine, tick_ms)
                .map_err(|e| EngineError::Application(format!("update: {e}")))?;
            app.render(&mut engine)
                .map_err(|e| EngineError::Application(format!("render: {e}")))?;

            engine.surface.present();
            engine.clock.wait();
        }

        app.cleanup(&mut engine);
        log::info!("engine shutdown complete");
        Ok(())
    }

    /// Drain all pending events, translating them to [`AppEvent`]s
    fn poll_events(&mut self) -> Vec<AppEvent> {
        let mut out = Vec::new();
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. } => out.push(AppEvent::QuitRequested),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(key) = KeyCode::from_sdl(key) {
                        out.push(AppEvent::KeyDown(key));
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(key) = KeyCode::from_sdl(key) {
                        out.push(AppEvent::KeyUp(key));
                    }
                }
                _ => {}
            }
        }
        out
    }

    /// Mutable access to the render surface
    pub fn surface_mut(&mut self) -> &mut Surface<'c, 'ttf> {
        &mut self.surface
    }

    /// The configured tick interval in milliseconds
    pub fn tick_ms(&self) -> f32 {
        self.clock.interval_ms()
    }

    /// Stop the main loop after the current tick
    pub fn quit(&mut self) {
        log::info!("shutdown requested");
        self.running = false;
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// SDL subsystem initialization failed
    #[error("platform initialization failed: {0}")]
    Init(String),

    /// Window creation failed
    #[error("window creation failed: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),

    /// Canvas creation failed
    #[error("canvas creation failed: {0}")]
    Canvas(#[from] sdl2::IntegerOrSdlError),

    /// The font file could not be loaded
    #[error("failed to load font {path}: {message}")]
    Font {
        /// Path of the font that failed to load
        path: String,
        /// Platform error message
        message: String,
    },

    /// Error propagated from the application
    #[error("application error: {0}")]
    Application(String),
}

//! # Arcade Kit
//!
//! A small platform layer for fixed-tick 2D arcade games built on SDL2.
//!
//! The crate owns the window, the render/present surface, text
//! rasterization, keyboard events, and the tick pacing of the main loop.
//! Game logic lives entirely in the application: implement [`Application`]
//! and hand it to [`Engine::run`].
//!
//! ```rust,no_run
//! use arcade_kit::prelude::*;
//!
//! struct MyGame;
//!
//! impl Application for MyGame {
//!     fn initialize(&mut self, _engine: &mut Engine<'_, '_>) -> Result<(), AppError> {
//!         // Load sprites, bake static text
//!         Ok(())
//!     }
//!
//!     fn handle_event(&mut self, engine: &mut Engine<'_, '_>, event: AppEvent) -> Result<(), AppError> {
//!         if let AppEvent::QuitRequested = event {
//!             engine.quit();
//!         }
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine<'_, '_>, _tick_ms: f32) -> Result<(), AppError> {
//!         // Advance game state by one fixed tick
//!         Ok(())
//!     }
//!
//!     fn render(&mut self, _engine: &mut Engine<'_, '_>) -> Result<(), AppError> {
//!         // Draw the frame
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut game = MyGame;
//!     Engine::run(config, &mut game)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod render;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for platform users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::{
            math::{Rect, Vec2},
            time::TickClock,
        },
        input::KeyCode,
        render::{Color, LineId, RenderError, SpriteId, Surface},
        AppError, AppEvent, Application, Engine, EngineConfig, EngineError,
    };
}

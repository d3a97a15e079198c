//! Application trait and lifecycle events

use crate::config::ConfigError;
use crate::engine::Engine;
use crate::input::KeyCode;
use crate::render::RenderError;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to build a game on the fixed-tick loop. The engine
/// calls the methods in order every tick: pending events first, then one
/// [`update`](Self::update), then one [`render`](Self::render).
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the platform is up. Load sprites and bake static
    /// text here; asset failures abort startup.
    fn initialize(&mut self, engine: &mut Engine<'_, '_>) -> Result<(), AppError>;

    /// Handle one input event
    ///
    /// All events pending at the top of the tick are delivered before
    /// `update` runs. Key-down events repeat while a key is held down.
    fn handle_event(&mut self, engine: &mut Engine<'_, '_>, event: AppEvent)
        -> Result<(), AppError>;

    /// Advance game state by one fixed tick
    ///
    /// `tick_ms` is the configured tick interval in milliseconds; game
    /// timers accumulate it rather than measuring wall time.
    fn update(&mut self, engine: &mut Engine<'_, '_>, tick_ms: f32) -> Result<(), AppError>;

    /// Draw the current frame
    ///
    /// The engine presents the frame after this returns.
    fn render(&mut self, engine: &mut Engine<'_, '_>) -> Result<(), AppError>;

    /// Clean up before shutdown
    fn cleanup(&mut self, _engine: &mut Engine<'_, '_>) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Rendering error
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Custom application error
    #[error("application error: {0}")]
    Custom(String),
}

/// Input and window events delivered to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A key went down (repeats while held)
    KeyDown(KeyCode),

    /// A key was released
    KeyUp(KeyCode),

    /// The window close button was pressed
    QuitRequested,
}

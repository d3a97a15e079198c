//! Rendering and text rasterization
//!
//! The game consumes a narrow surface: load an image to a sprite handle,
//! draw textured rotated rectangles, rasterize text lines, clear/present.
//! Everything SDL2-specific stays behind [`Surface`].

mod surface;

pub use surface::Surface;

use thiserror::Error;

/// Handle to a sprite texture owned by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteId(pub(crate) usize);

/// Handle to a baked text line owned by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineId(pub(crate) usize);

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,

    /// Green channel
    pub g: u8,

    /// Blue channel
    pub b: u8,

    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Create a color from channel values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// An image file could not be loaded into a texture
    #[error("failed to load sprite {path}: {message}")]
    SpriteLoad {
        /// Path of the image that failed to load
        path: String,
        /// Platform error message
        message: String,
    },

    /// A text line could not be rasterized
    #[error("failed to rasterize text \"{text}\": {message}")]
    Rasterize {
        /// The line that failed
        text: String,
        /// Platform error message
        message: String,
    },

    /// A draw call failed
    #[error("draw failed: {0}")]
    Draw(String),
}

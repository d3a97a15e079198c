//! The SDL2-backed render surface

use crate::foundation::math::Rect;
use crate::render::{Color, LineId, RenderError, SpriteId};
use sdl2::image::LoadTexture;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

/// Render and text surface for one window.
///
/// Owns the canvas, the loaded sprites, and the baked text lines. Handles
/// returned by [`load_sprite`](Self::load_sprite) and
/// [`bake_line`](Self::bake_line) are only valid for the surface that
/// produced them.
pub struct Surface<'c, 'ttf> {
    canvas: Canvas<Window>,
    creator: &'c TextureCreator<WindowContext>,
    font: Font<'ttf, 'static>,
    sprites: Vec<Texture<'c>>,
    lines: Vec<Texture<'c>>,
}

impl<'c, 'ttf> Surface<'c, 'ttf> {
    pub(crate) fn new(
        canvas: Canvas<Window>,
        creator: &'c TextureCreator<WindowContext>,
        font: Font<'ttf, 'static>,
    ) -> Self {
        Self {
            canvas,
            creator,
            font,
            sprites: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Load an image file into a sprite texture.
    ///
    /// A missing or unreadable file is an error; asset problems surface at
    /// startup instead of as invisible draws later.
    pub fn load_sprite(&mut self, path: &str) -> Result<SpriteId, RenderError> {
        let texture = self
            .creator
            .load_texture(path)
            .map_err(|message| RenderError::SpriteLoad {
                path: path.to_string(),
                message,
            })?;
        self.sprites.push(texture);
        Ok(SpriteId(self.sprites.len() - 1))
    }

    /// Rasterize a text line once and keep it for repeated drawing
    pub fn bake_line(&mut self, text: &str, color: Color) -> Result<LineId, RenderError> {
        let texture = self.rasterize(text, color)?;
        self.lines.push(texture);
        Ok(LineId(self.lines.len() - 1))
    }

    /// Clear the frame to black
    pub fn clear(&mut self) {
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGBA(0, 0, 0, 255));
        self.canvas.clear();
    }

    /// Present the finished frame
    pub fn present(&mut self) {
        self.canvas.present();
    }

    /// Stretch a sprite over the whole frame
    pub fn draw_fullscreen(&mut self, id: SpriteId) -> Result<(), RenderError> {
        self.canvas
            .copy(&self.sprites[id.0], None, None)
            .map_err(RenderError::Draw)
    }

    /// Draw a sprite into `dest`, rotated around its center by
    /// `angle_degrees`
    pub fn draw_rotated(
        &mut self,
        id: SpriteId,
        dest: Rect,
        angle_degrees: f32,
    ) -> Result<(), RenderError> {
        self.canvas
            .copy_ex(
                &self.sprites[id.0],
                None,
                Some(to_sdl_rect(dest)),
                f64::from(angle_degrees),
                None,
                false,
                false,
            )
            .map_err(RenderError::Draw)
    }

    /// Draw a previously baked text line
    pub fn draw_line(&mut self, id: LineId, dest: Rect) -> Result<(), RenderError> {
        self.canvas
            .copy(&self.lines[id.0], None, Some(to_sdl_rect(dest)))
            .map_err(RenderError::Draw)
    }

    /// Rasterize and draw a one-shot text line.
    ///
    /// The texture is dropped as soon as the draw is issued; callers that
    /// regenerate text every tick (score, lives, wave counters) use this.
    pub fn draw_text(&mut self, text: &str, color: Color, dest: Rect) -> Result<(), RenderError> {
        let texture = self.rasterize(text, color)?;
        self.canvas
            .copy(&texture, None, Some(to_sdl_rect(dest)))
            .map_err(RenderError::Draw)
    }

    fn rasterize(&self, text: &str, color: Color) -> Result<Texture<'c>, RenderError> {
        let rendered = self
            .font
            .render(text)
            .solid(to_sdl_color(color))
            .map_err(|e| RenderError::Rasterize {
                text: text.to_string(),
                message: e.to_string(),
            })?;
        self.creator
            .create_texture_from_surface(&rendered)
            .map_err(|e| RenderError::Rasterize {
                text: text.to_string(),
                message: e.to_string(),
            })
    }
}

fn to_sdl_rect(rect: Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(rect.x as i32, rect.y as i32, rect.w as u32, rect.h as u32)
}

fn to_sdl_color(color: Color) -> sdl2::pixels::Color {
    sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a)
}

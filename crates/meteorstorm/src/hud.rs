//! HUD text: counters and state banners
//!
//! The score, lives, and wave counters are rasterized fresh every tick;
//! at this scale the cost is irrelevant and it keeps the HUD stateless.
//! State banners never change, so they are baked once at startup. A text
//! line that fails to rasterize is logged and skipped; the HUD never takes
//! the frame down.

use crate::entities::Arena;
use crate::session::Session;
use arcade_kit::prelude::{Color, LineId, Rect, RenderError, Surface};

/// Counter glyph advance in pixels
const GLYPH_W: f32 = 16.0;

/// Counter line height in pixels
const GLYPH_H: f32 = 16.0;

/// Banner glyph advance in pixels
const BANNER_GLYPH_W: f32 = 32.0;

/// Banner line height in pixels
const BANNER_GLYPH_H: f32 = 32.0;

/// Margin between the edge counters and the window border
const MARGIN: f32 = 20.0;

const TEXT_COLOR: Color = Color::WHITE;

/// A baked banner and where it goes
struct Banner {
    line: LineId,
    rect: Rect,
}

/// All HUD state: the baked banners
pub struct Hud {
    new_wave: Banner,
    game_over: Banner,
    start_game: Banner,
    press_space: Banner,
    restart: Banner,
}

impl Hud {
    /// Bake the static banners for the given arena
    pub fn new(surface: &mut Surface<'_, '_>, arena: Arena) -> Result<Self, RenderError> {
        let mut bake = |text: &str, rect: Rect| -> Result<Banner, RenderError> {
            Ok(Banner {
                line: surface.bake_line(text, TEXT_COLOR)?,
                rect,
            })
        };

        let new_wave = bake("New Wave", banner_rect(arena.width, "New Wave", 200.0))?;
        let start_game = bake("Start Game", banner_rect(arena.width, "Start Game", 200.0))?;
        let press_space = bake(
            "Press space to start",
            banner_rect(arena.width, "Press space to start", 300.0),
        )?;
        let restart = bake(
            "Press Escape to restart",
            banner_rect(arena.width, "Press Escape to restart", 300.0),
        )?;
        let game_over = bake("Game Over", game_over_rect(arena))?;

        Ok(Self {
            new_wave,
            game_over,
            start_game,
            press_space,
            restart,
        })
    }

    /// Draw the counters and whichever banners the session state calls for
    pub fn draw(&self, surface: &mut Surface<'_, '_>, session: &Session) {
        let arena = session.arena();

        let score = session.score().to_string();
        draw_counter(surface, &score, score_rect(arena.width, score.len()));

        let lives = session.lives().to_string();
        draw_counter(surface, &lives, lives_rect(lives.len()));

        let wave = session.wave().to_string();
        draw_counter(surface, &wave, wave_rect(arena.width, wave.len()));

        if !session.game_started() {
            draw_banner(surface, &self.start_game);
            draw_banner(surface, &self.press_space);
        } else if session.wave_ended() {
            draw_banner(surface, &self.new_wave);
        }

        if session.game_over() {
            draw_banner(surface, &self.game_over);
            draw_banner(surface, &self.restart);
        }
    }
}

fn draw_banner(surface: &mut Surface<'_, '_>, banner: &Banner) {
    if let Err(e) = surface.draw_line(banner.line, banner.rect) {
        log::warn!("banner draw skipped: {e}");
    }
}

fn draw_counter(surface: &mut Surface<'_, '_>, text: &str, rect: Rect) {
    if let Err(e) = surface.draw_text(text, TEXT_COLOR, rect) {
        log::warn!("counter draw skipped: {e}");
    }
}

/// Score counter: centered along the top edge
fn score_rect(arena_width: f32, len: usize) -> Rect {
    let w = len as f32 * GLYPH_W;
    Rect::new(arena_width * 0.5 - w * 0.5, MARGIN, w, GLYPH_H)
}

/// Lives counter: top-left corner
fn lives_rect(len: usize) -> Rect {
    Rect::new(MARGIN, MARGIN, len as f32 * GLYPH_W, GLYPH_H)
}

/// Wave counter: top-right corner
fn wave_rect(arena_width: f32, len: usize) -> Rect {
    let w = len as f32 * GLYPH_W;
    Rect::new(arena_width - MARGIN - w, MARGIN, w, GLYPH_H)
}

/// A banner line centered horizontally at the given y
fn banner_rect(arena_width: f32, text: &str, y: f32) -> Rect {
    let w = text.len() as f32 * BANNER_GLYPH_W;
    Rect::new(arena_width * 0.5 - w * 0.5, y, w, BANNER_GLYPH_H)
}

/// The "Game Over" line, centered on the arena at counter size
fn game_over_rect(arena: Arena) -> Rect {
    let w = "Game Over".len() as f32 * GLYPH_W;
    Rect::new(
        arena.width * 0.5 - w * 0.5,
        arena.height * 0.5 - GLYPH_H * 0.5,
        w,
        GLYPH_H,
    )
}

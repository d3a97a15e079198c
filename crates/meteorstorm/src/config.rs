//! Game configuration
//!
//! Defaults reproduce the classic tuning; a `meteorstorm.toml` next to the
//! binary overrides them field by field.

use arcade_kit::prelude::{Config, EngineConfig};
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// Window and timing settings
    pub display: DisplayConfig,

    /// Gameplay tuning
    pub tuning: Tuning,
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file is absent or unreadable
    pub fn load_or_default(path: &str) -> Self {
        if !std::path::Path::new(path).exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("loaded configuration from {path}");
                config
            }
            Err(e) => {
                log::warn!("ignoring {path}: {e}");
                Self::default()
            }
        }
    }

    /// Build the platform configuration for this game
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            title: self.display.title.clone(),
            width: self.display.width,
            height: self.display.height,
            tick_interval_ms: self.display.tick_interval_ms,
            font_path: self.display.font_path.clone(),
            font_point_size: self.display.font_point_size,
        }
    }
}

/// Window and timing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Window title
    pub title: String,

    /// Arena width in pixels
    pub width: u32,

    /// Arena height in pixels
    pub height: u32,

    /// Tick interval in milliseconds
    pub tick_interval_ms: f32,

    /// Path of the HUD font
    pub font_path: String,

    /// Font point size
    pub font_point_size: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Meteorstorm".to_string(),
            width: 1024,
            height: 768,
            tick_interval_ms: 30.0,
            font_path: "assets/Bonus/kenvector_future.ttf".to_string(),
            font_point_size: 16,
        }
    }
}

/// Gameplay tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives granted beyond the first ship
    pub starting_lives: i32,

    /// Delay before each wave spawns, in milliseconds
    pub wave_delay_ms: f32,

    /// Delay between ship destruction and respawn, in milliseconds
    pub respawn_delay_ms: f32,

    /// Minimum time between shots, in milliseconds
    pub shoot_cooldown_ms: f32,

    /// Ship speed scale; thrust is a quarter of this per tick
    pub ship_speed: f32,

    /// Ship rotation rate in degrees per tick
    pub ship_rotation_speed: f32,

    /// Bullet travel distance per tick
    pub bullet_speed: f32,

    /// Radius of the ring waves spawn on, in pixels
    pub spawn_ring_radius: f32,

    /// Per-axis spawn jitter bound, in pixels
    pub spawn_jitter: i32,

    /// Upper bound on asteroids spawned per wave
    pub max_wave_asteroids: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 2,
            wave_delay_ms: 3000.0,
            respawn_delay_ms: 3000.0,
            shoot_cooldown_ms: 1000.0,
            ship_speed: 16.0,
            ship_rotation_speed: 4.0,
            bullet_speed: 15.0,
            spawn_ring_radius: 350.0,
            spawn_jitter: 50,
            max_wave_asteroids: 23,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.display.width, 1024);
        assert_eq!(config.display.height, 768);
        assert_eq!(config.tuning.starting_lives, 2);
        assert_eq!(config.tuning.max_wave_asteroids, 23);
        assert!((config.display.tick_interval_ms - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_or_default("no/such/meteorstorm.toml");
        assert_eq!(config.display.width, 1024);
    }
}

//! Meteorstorm: a wave-based arcade space shooter.
//!
//! Rotate with A/D, thrust with W, shoot with Space. Clear a wave and the
//! next one spawns bigger; run out of lives and Escape starts over.

mod app;
mod assets;
mod config;
mod entities;
mod hud;
mod session;

use app::MeteorstormApp;
use arcade_kit::prelude::Engine;
use config::GameConfig;

const CONFIG_PATH: &str = "meteorstorm.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = GameConfig::load_or_default(CONFIG_PATH);
    let mut app = MeteorstormApp::new(&config);
    Engine::run(config.engine_config(), &mut app)?;
    Ok(())
}

//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file. Every value has a safe
//! default so a missing or partial file never prevents the game from
//! starting.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! vsync = true
//!
//! [game]
//! words = EGER, BUDAPEST, DUNA
//! seed = 42
//!
//! [animation]
//! time_step = 0.02
//! time_scale = 1.0
//!
//! [assets]
//! wood_texture = ./assets/textures/hardwood.png
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::wordpool::WordPool;
use crate::resources::worldtime::FRAME_STEP;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_WOOD_TEXTURE: &str = "./assets/textures/hardwood.png";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Target frames per second; one animation step runs per frame.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Comma separated word list replacing the built-in pool.
    pub words: Option<String>,
    /// Seed for the word draw and the grass layout.
    pub seed: Option<u64>,
    /// Secret word of the first round; command line only.
    pub start_word: Option<String>,
    /// Animation clock advance per frame.
    pub time_step: f32,
    /// Multiplier applied to `time_step`.
    pub time_scale: f32,
    /// Optional gibbet texture; a solid colour is used if it fails to load.
    pub wood_texture: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            words: None,
            seed: None,
            start_word: None,
            time_step: FRAME_STEP,
            time_scale: DEFAULT_TIME_SCALE,
            wood_texture: PathBuf::from(DEFAULT_WOOD_TEXTURE),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, step={}, scale={}, seed={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.time_step,
            self.time_scale,
            self.seed
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = window_dim(config, "width") {
            self.window_width = width;
        }
        if let Some(height) = window_dim(config, "height") {
            self.window_height = height;
        }
        if let Some(fps) = window_dim(config, "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [game] section
        if let Some(words) = config.get("game", "words") {
            self.words = Some(words);
        }
        if let Some(seed) = config.getuint("game", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        // [animation] section
        if let Some(step) = config.getfloat("animation", "time_step").ok().flatten() {
            if step > 0.0 {
                self.time_step = step as f32;
            }
        }
        if let Some(scale) = config.getfloat("animation", "time_scale").ok().flatten() {
            if scale >= 0.0 {
                self.time_scale = scale as f32;
            }
        }

        // [assets] section
        if let Some(path) = config.get("assets", "wood_texture") {
            self.wood_texture = PathBuf::from(path);
        }
    }

    /// Word pool described by this configuration.
    pub fn word_pool(&self) -> WordPool {
        match &self.words {
            Some(csv) => WordPool::from_csv(csv),
            None => WordPool::default(),
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Positive `[window]` value that also fits raylib's `i32` sizes.
fn window_dim(config: &Ini, key: &str) -> Option<u32> {
    let value = config.getuint("window", key).ok().flatten()?;
    match i32::try_from(value) {
        Ok(v) if v > 0 => Some(v as u32),
        _ => {
            warn!("Ignoring [window] {} = {}: out of range", key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 640\n[game]\nseed = 9\n")
            .unwrap();
        assert_eq!(config.window_size(), (640, DEFAULT_WINDOW_HEIGHT));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.time_step, FRAME_STEP);
        assert_eq!(config.word_pool(), WordPool::default());
    }

    #[test]
    fn words_and_animation_overrides() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[game]\nwords = eger,duna\n[animation]\ntime_step = 0.05\ntime_scale = -3\n")
            .unwrap();
        assert_eq!(config.word_pool().words(), &["EGER", "DUNA"]);
        assert!((config.time_step - 0.05).abs() < 1e-6);
        assert_eq!(config.time_scale, DEFAULT_TIME_SCALE);
    }

    #[test]
    fn out_of_range_window_values_keep_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 0\nheight = 4294967296\ntarget_fps = 0\n")
            .unwrap();
        assert_eq!(config.window_size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
        assert_eq!(config.target_fps, DEFAULT_TARGET_FPS);

        config.load_from_str("[window]\nwidth = 3000000000\n").unwrap();
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }
}

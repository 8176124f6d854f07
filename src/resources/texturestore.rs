//! Loaded textures keyed by name.
//!
//! Textures are decorative: a texture that fails to load is simply absent
//! from the store, and the renderer falls back to the shape's solid colour.

use log::{info, warn};
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;
use std::path::Path;

/// Key of the gibbet wood texture.
pub const WOOD: &str = "wood";

/// Non-send store of GPU textures.
#[derive(Default)]
pub struct TextureStore {
    pub map: FxHashMap<&'static str, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: &'static str, texture: Texture2D) {
        self.map.insert(key, texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    /// Load `path` under `key`. On failure nothing is stored.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        key: &'static str,
        path: &Path,
    ) -> Result<(), String> {
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Texture path is not valid UTF-8: {}", path.display()))?;
        let texture = rl
            .load_texture(th, path_str)
            .map_err(|e| format!("Failed to load texture '{}': {}", path.display(), e))?;
        info!(
            "Loaded texture '{}' ({}x{}) from {}",
            key,
            texture.width,
            texture.height,
            path.display()
        );
        self.insert(key, texture);
        Ok(())
    }

    /// Like [`load`](Self::load) but downgrades failure to a warning.
    pub fn load_optional(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        key: &'static str,
        path: &Path,
    ) -> bool {
        match self.load(rl, th, key, path) {
            Ok(()) => true,
            Err(e) => {
                warn!("{}; using solid colour for '{}'", e, key);
                false
            }
        }
    }
}

//! Off-screen surface the 3D scene is drawn into.
//!
//! The surface is sized by the [`Viewport`](crate::resources::viewport::Viewport)
//! rather than the window: the scene occupies a fraction of the window and
//! the HUD is drawn around it. When the viewport changes the texture is
//! recreated at the new size before the next frame is drawn.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Non-send resource holding the render texture.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        let target = Self {
            texture,
            width,
            height,
        };
        target.apply_filter();
        Ok(target)
    }

    /// Bilinear filtering; the surface is drawn 1:1 but may land on
    /// fractional coordinates.
    fn apply_filter(&self) {
        unsafe {
            ffi::SetTextureFilter(
                self.texture.texture,
                TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
            );
        }
    }

    pub fn matches(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    /// Recreate the texture at a new size. The old texture is kept if
    /// creation fails.
    pub fn recreate(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<(), String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to recreate render texture: {}", e))?;

        self.texture = texture;
        self.width = width;
        self.height = height;
        self.apply_filter();

        Ok(())
    }

    /// Source rectangle with negative height to flip the Y axis,
    /// compensating for OpenGL's inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.width as f32,
            height: -(self.height as f32),
        }
    }
}

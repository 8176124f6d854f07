//! Window size resource.
//!
//! Tracks the OS window dimensions in device-independent pixels as last
//! reported by the resize poll. The 3D output surface is a fraction of this;
//! see [`Viewport`](crate::resources::viewport::Viewport).

use bevy_ecs::prelude::Resource;

/// Smallest window dimension the layout code works with.
pub const MIN_WINDOW_DIM: i32 = 1;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Window size with degenerate dimensions clamped to [`MIN_WINDOW_DIM`].
    pub fn clamped(w: i32, h: i32) -> Self {
        Self {
            w: w.max(MIN_WINDOW_DIM),
            h: h.max(MIN_WINDOW_DIM),
        }
    }
}

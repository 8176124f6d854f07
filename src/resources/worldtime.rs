//! Animation clock.
//!
//! The scene is animated against a scalar accumulator that advances by a
//! fixed step once per presented frame, not by wall-clock time. A slow frame
//! therefore slows the animation down instead of making it jump.

use bevy_ecs::prelude::Resource;

/// Clock advance per frame at `time_scale == 1.0`.
pub const FRAME_STEP: f32 = 0.02;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Accumulated animation time.
    pub elapsed: f32,
    /// Advance per frame before scaling.
    pub step: f32,
    pub time_scale: f32,
    /// Frames the animation loop has run.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            step: FRAME_STEP,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

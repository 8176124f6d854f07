//! Session-scoped handles.
//!
//! The animation loop and the window resize subscription exist exactly while
//! a session is running: [`crate::game::setup`] inserts them once and
//! [`crate::game::teardown`] removes them once. Systems gated on these
//! resources stop the moment they are released, so no frame callback or
//! resize listener outlives the session.

use bevy_ecs::prelude::{Res, Resource};

/// Presence means the per-frame animation loop is registered.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct AnimationLoop {
    /// Frames run since the loop was registered.
    pub frames: u64,
}

/// Presence means resize notifications are applied to the viewport.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ResizeSubscription;

/// Run condition: the animation loop is registered.
pub fn animation_loop_active(handle: Option<Res<AnimationLoop>>) -> bool {
    handle.is_some()
}

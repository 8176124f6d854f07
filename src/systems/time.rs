//! Animation clock system.
//!
//! Advances [`WorldTime`] by one fixed step per frame while the
//! [`AnimationLoop`] handle is registered. Once the handle is released the
//! clock stops.
use bevy_ecs::prelude::*;

use crate::resources::handles::AnimationLoop;
use crate::resources::worldtime::WorldTime;

/// Advance the clock by `step * time_scale` and count the frame.
pub fn update_world_time(
    mut world_time: ResMut<WorldTime>,
    animation_loop: Option<ResMut<AnimationLoop>>,
) {
    let Some(mut animation_loop) = animation_loop else {
        return;
    };
    let step = world_time.step * world_time.time_scale;
    world_time.elapsed += step;
    world_time.frame_count += 1;
    animation_loop.frames += 1;
}

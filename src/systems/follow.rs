//! System for entities that follow another entity.
//!
//! Copies the target's [`Position3D`] onto every entity
//! with a [`Follow`] component. The sun light uses it to track the sun.
//! Runs after the animation system so the copy sees this frame's position.

use bevy_ecs::prelude::*;

use crate::components::follow::Follow;
use crate::components::position::Position3D;

pub fn follow_system(
    mut followers: Query<(&Follow, &mut Position3D)>,
    targets: Query<&Position3D, Without<Follow>>,
) {
    for (follow, mut position) in followers.iter_mut() {
        if let Ok(target) = targets.get(follow.target) {
            position.pos = target.pos;
        }
    }
}

//! Component for rigidly coupling an entity's position to another entity.
//!
//! The sun light uses this to sit exactly where the sun sphere is each frame
//! instead of being simulated on its own.

use bevy_ecs::prelude::{Component, Entity};

/// Makes this entity's [`Position3D`](super::position::Position3D) track the
/// target's position.
#[derive(Debug, Clone, Copy, Component)]
pub struct Follow {
    /// The entity to follow.
    pub target: Entity,
}

impl Follow {
    pub fn new(target: Entity) -> Self {
        Self { target }
    }
}

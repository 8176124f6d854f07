use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Local position of a scene node. Relative to the parent when the entity
/// has a [`ChildOf`](bevy_ecs::hierarchy::ChildOf), world space otherwise.
#[derive(Component, Clone, Copy, Debug)]
pub struct Position3D {
    pub pos: Vector3,
}

impl Position3D {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vector3 { x, y, z },
        }
    }
}

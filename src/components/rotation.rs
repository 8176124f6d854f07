use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Euler rotation in radians, applied in X, then Y, then Z order.
#[derive(Component, Clone, Debug, Copy)]
pub struct Rotation3D {
    pub euler: Vector3,
}

impl Rotation3D {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            euler: Vector3 { x, y, z },
        }
    }
}

impl Default for Rotation3D {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

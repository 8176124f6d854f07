use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

#[derive(Component, Clone, Debug, Copy)]
pub struct Scale3D {
    pub scale: Vector3,
}
impl Scale3D {
    pub fn new(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            scale: Vector3 {
                x: sx,
                y: sy,
                z: sz,
            },
        }
    }
}
impl Default for Scale3D {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

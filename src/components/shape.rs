//! Drawable primitive attached to a scene node.
//!
//! A [`Shape`] is drawn centred on its entity's
//! [`GlobalTransform3D`](super::globaltransform3d::GlobalTransform3D).
//! Cylinders and cones are aligned with the local Y axis.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Geometry of a primitive, in local units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    /// Axis-aligned box.
    Box { width: f32, height: f32, depth: f32 },
    /// Truncated cone along Y.
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        sides: i32,
    },
    /// Cone along Y with its apex up.
    Cone { radius: f32, height: f32, sides: i32 },
    Sphere { radius: f32 },
    /// Cylinder with hemispherical caps along Y; `length` excludes the caps.
    Capsule { radius: f32, length: f32 },
    /// Flat rectangle in the XZ plane.
    Plane { width: f32, depth: f32 },
}

/// How a primitive is coloured.
///
/// `texture` names an entry of the
/// [`TextureStore`](crate::resources::texturestore::TextureStore). When the
/// texture is missing the solid `color` is used instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub color: Color,
    pub texture: Option<&'static str>,
    /// Ignore scene lighting (emissive look, used for the sun).
    pub unlit: bool,
}

impl Surface {
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            texture: None,
            unlit: false,
        }
    }

    pub const fn unlit(color: Color) -> Self {
        Self {
            color,
            texture: None,
            unlit: true,
        }
    }

    pub const fn textured(key: &'static str, fallback: Color) -> Self {
        Self {
            color: fallback,
            texture: Some(key),
            unlit: false,
        }
    }
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub primitive: Primitive,
    pub surface: Surface,
}

impl Shape {
    pub const fn new(primitive: Primitive, surface: Surface) -> Self {
        Self { primitive, surface }
    }
}

/// Build an opaque colour from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> Color {
    Color {
        r: ((hex >> 16) & 0xff) as u8,
        g: ((hex >> 8) & 0xff) as u8,
        b: (hex & 0xff) as u8,
        a: 255,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_splits_channels() {
        let c = rgb(0x87CEEB);
        assert_eq!((c.r, c.g, c.b, c.a), (0x87, 0xCE, 0xEB, 255));
    }
}

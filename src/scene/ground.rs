//! Ground plane and the grass field.
//!
//! Blade placement is random but generated once per session from the
//! session RNG, so a fixed seed reproduces the field.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use raylib::prelude::Color;

use crate::components::actor::MotionProfile;
use crate::components::shape::{Primitive, Surface, rgb};
use crate::scene::node::NodeSpec;

const TURF: Color = rgb(0x2d5a27);
const BLADE: Color = rgb(0x3a7a35);

pub const GROUND_Y: f32 = -2.0;
pub const BLADE_COUNT: usize = 1000;
pub const BLADE_Y: f32 = -1.85;
/// Blades are scattered over `[-X, X] x [-Z, Z]`.
pub const BLADE_HALF_X: f32 = 12.5;
pub const BLADE_HALF_Z: f32 = 9.0;

pub fn ground() -> NodeSpec {
    NodeSpec::mesh(
        "ground",
        Primitive::Plane {
            width: 28.0,
            depth: 20.0,
        },
        Surface::solid(TURF),
    )
    .at(0.0, GROUND_Y, 0.0)
}

/// A single blade: a thin card laid flat (quarter turn about X) whose sway
/// angle is the Z rotation.
pub fn blade(x: f32, z: f32, base_angle: f32, index: u32) -> NodeSpec {
    NodeSpec::mesh(
        "blade",
        Primitive::Box {
            width: 0.1,
            height: 0.3,
            depth: 0.005,
        },
        Surface::solid(BLADE),
    )
    .at(x, BLADE_Y, z)
    .rotated(FRAC_PI_2, 0.0, base_angle)
    .animated(MotionProfile::GrassBlade, index)
}

pub fn grass_field(rng: &mut fastrand::Rng) -> NodeSpec {
    let blades = (0..BLADE_COUNT).map(|i| {
        let x = (rng.f32() - 0.5) * 2.0 * BLADE_HALF_X;
        let z = (rng.f32() - 0.5) * 2.0 * BLADE_HALF_Z;
        let base = rng.f32() * FRAC_PI_4;
        blade(x, z, base, i as u32)
    });
    NodeSpec::group("grass").with_children(blades)
}

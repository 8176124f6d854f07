//! The gibbet the figure hangs from.

use std::f32::consts::FRAC_PI_4;

use raylib::prelude::Color;

use crate::components::shape::{Primitive, Surface, rgb};
use crate::resources::figurerig::ROPE_POINT;
use crate::resources::texturestore::WOOD;
use crate::scene::node::NodeSpec;

/// Used when the wood texture is not loaded.
const WOOD_FALLBACK: Color = rgb(0x966F33);
const ROPE: Color = rgb(0x8B4513);

pub const GALLOWS_ORIGIN: (f32, f32, f32) = (-2.0, 0.0, -1.0);

fn beam(name: &'static str, width: f32, height: f32, depth: f32) -> NodeSpec {
    NodeSpec::mesh(
        name,
        Primitive::Box {
            width,
            height,
            depth,
        },
        Surface::textured(WOOD, WOOD_FALLBACK),
    )
}

pub fn gallows() -> NodeSpec {
    let (gx, gy, gz) = GALLOWS_ORIGIN;
    NodeSpec::group("gallows")
        .at(gx, gy, gz)
        .child(beam("base", 3.0, 0.3, 1.0).at(0.0, -1.9, 0.0))
        .child(beam("post", 0.3, 4.0, 0.3).at(-1.0, 0.0, 0.0))
        .child(beam("crossbeam", 2.0, 0.3, 0.3).at(0.0, 1.9, 0.0))
        .child(
            beam("brace", 0.2, 1.8, 0.2)
                .at(-1.0, 1.2, 0.0)
                .rotated(0.0, 0.0, FRAC_PI_4),
        )
        .child(
            NodeSpec::mesh(
                "rope",
                Primitive::Cylinder {
                    radius_top: 0.02,
                    radius_bottom: 0.02,
                    height: 0.5,
                    sides: 8,
                },
                Surface::solid(ROPE),
            )
            .at(ROPE_POINT.x - gx, ROPE_POINT.y - gy, ROPE_POINT.z - gz),
        )
}

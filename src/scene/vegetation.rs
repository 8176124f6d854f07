//! Trees around the courtyard.

use raylib::prelude::Color;

use crate::components::shape::{Primitive, Surface, rgb};
use crate::scene::node::NodeSpec;

const BARK: Color = rgb(0x8B4513);
const FOLIAGE: Color = rgb(0x228B22);

/// Ground positions `(x, z)` of the trees.
pub const TREE_POSITIONS: [(f32, f32); 6] = [
    (-10.0, -10.0),
    (-8.0, -8.0),
    (10.0, -10.0),
    (8.0, -8.0),
    (-9.0, 4.0),
    (9.0, 4.0),
];

pub fn tree(x: f32, z: f32) -> NodeSpec {
    NodeSpec::group("tree")
        .at(x, 0.0, z)
        .child(
            NodeSpec::mesh(
                "trunk",
                Primitive::Cylinder {
                    radius_top: 0.2,
                    radius_bottom: 0.3,
                    height: 2.0,
                    sides: 8,
                },
                Surface::solid(BARK),
            )
            .at(0.0, -1.0, 0.0),
        )
        .child(
            NodeSpec::mesh(
                "foliage",
                Primitive::Cone {
                    radius: 1.0,
                    height: 2.0,
                    sides: 8,
                },
                Surface::solid(FOLIAGE),
            )
            .at(0.0, 0.5, 0.0),
        )
}

pub fn trees() -> NodeSpec {
    NodeSpec::group("trees").with_children(TREE_POSITIONS.iter().map(|&(x, z)| tree(x, z)))
}

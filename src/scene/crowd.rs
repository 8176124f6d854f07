//! Background actors: the executioner, the royal party with guards, and
//! two dogs.
//!
//! Each actor is a group whose origin sits at ground-eye level; the body
//! parts hang below it, so the motion curves bob and tilt the whole figure.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use raylib::prelude::Color;

use crate::components::actor::MotionProfile;
use crate::components::shape::{Primitive, Surface, rgb};
use crate::scene::node::NodeSpec;

const ROBE: Color = rgb(0x000000);
const WOOD: Color = rgb(0x8B4513);
const STEEL: Color = rgb(0x808080);
const SKIN: Color = rgb(0xFFE4C4);
const FUR: Color = rgb(0x8B4513);

const GOLD: Color = rgb(0xFFD700);
const PURPLE: Color = rgb(0x800080);
const DARK_RED: Color = rgb(0x8B0000);

/// Colour, position `(x, z)` and scale of king, queen and the two guards.
/// The order is the animation index.
pub const CROWD_MEMBERS: [(&str, Color, f32, f32, f32); 4] = [
    ("king", GOLD, 4.0, -3.0, 1.2),
    ("queen", PURPLE, 5.0, -3.0, 1.1),
    ("guard", DARK_RED, -4.0, -3.0, 1.0),
    ("guard", DARK_RED, -5.0, -3.0, 1.0),
];

pub const DOG_POSITIONS: [(f32, f32); 2] = [(3.5, -2.0), (5.5, -2.0)];

pub fn executioner() -> NodeSpec {
    NodeSpec::group("executioner")
        .at(-5.0, 0.0, 0.0)
        .animated(MotionProfile::Executioner, 0)
        .child(
            NodeSpec::mesh(
                "robe",
                Primitive::Cylinder {
                    radius_top: 0.3,
                    radius_bottom: 0.4,
                    height: 1.5,
                    sides: 16,
                },
                Surface::solid(ROBE),
            )
            .at(0.0, -1.0, 0.0),
        )
        .child(
            NodeSpec::mesh(
                "hood",
                Primitive::Cone {
                    radius: 0.3,
                    height: 0.6,
                    sides: 8,
                },
                Surface::solid(ROBE),
            )
            .at(0.0, -0.2, 0.0),
        )
        .child(
            NodeSpec::mesh(
                "axe handle",
                Primitive::Cylinder {
                    radius_top: 0.05,
                    radius_bottom: 0.05,
                    height: 1.2,
                    sides: 8,
                },
                Surface::solid(WOOD),
            )
            .at(0.4, -0.8, 0.0)
            .rotated(0.0, 0.0, FRAC_PI_4),
        )
        .child(
            NodeSpec::mesh(
                "axe head",
                Primitive::Cone {
                    radius: 0.2,
                    height: 0.4,
                    sides: 4,
                },
                Surface::solid(STEEL),
            )
            .at(0.8, -0.6, 0.0)
            .rotated(0.0, 0.0, -FRAC_PI_2),
        )
}

/// A standing person. `scale` enlarges the geometry, not the group, so the
/// parts keep their offsets.
pub fn person(name: &'static str, color: Color, x: f32, z: f32, scale: f32, index: u32) -> NodeSpec {
    NodeSpec::group(name)
        .at(x, 0.0, z)
        .animated(MotionProfile::Crowd, index)
        .child(
            NodeSpec::mesh(
                "body",
                Primitive::Cylinder {
                    radius_top: 0.2 * scale,
                    radius_bottom: 0.3 * scale,
                    height: scale,
                    sides: 16,
                },
                Surface::solid(color),
            )
            .at(0.0, -1.5, 0.0),
        )
        .child(
            NodeSpec::mesh("head", Primitive::Sphere { radius: 0.2 * scale }, Surface::solid(SKIN))
                .at(0.0, -0.9, 0.0),
        )
}

pub fn dog(x: f32, z: f32, index: u32) -> NodeSpec {
    NodeSpec::group("dog")
        .at(x, 0.0, z)
        .animated(MotionProfile::Animal, index)
        .child(
            NodeSpec::mesh(
                "body",
                Primitive::Capsule {
                    radius: 0.15,
                    length: 0.4,
                },
                Surface::solid(FUR),
            )
            .at(0.0, -1.7, 0.0)
            .rotated(0.0, 0.0, FRAC_PI_2),
        )
        .child(
            NodeSpec::mesh("head", Primitive::Sphere { radius: 0.15 }, Surface::solid(FUR))
                .at(0.3, -1.7, 0.0),
        )
}

/// Executioner, royal party and dogs under one root.
pub fn crowd() -> NodeSpec {
    let people = CROWD_MEMBERS
        .iter()
        .enumerate()
        .map(|(i, &(name, color, x, z, scale))| person(name, color, x, z, scale, i as u32));
    let dogs = DOG_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &(x, z))| dog(x, z, i as u32));

    NodeSpec::group("crowd")
        .child(executioner())
        .with_children(people)
        .with_children(dogs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_actor_category_is_indexed_from_zero() {
        let crowd = crowd();
        let indices = |profile| {
            crowd
                .children
                .iter()
                .filter_map(|c| c.motion)
                .filter(|(p, _)| *p == profile)
                .map(|(_, i)| i)
                .collect::<Vec<_>>()
        };
        assert_eq!(indices(MotionProfile::Crowd), vec![0, 1, 2, 3]);
        assert_eq!(indices(MotionProfile::Animal), vec![0, 1]);
        assert_eq!(indices(MotionProfile::Executioner), vec![0]);
    }

    #[test]
    fn king_geometry_is_scaled() {
        let king = person("king", GOLD, 4.0, -3.0, 1.2, 0);
        let body = king.find("body").unwrap();
        assert!(matches!(
            body.shape.unwrap().primitive,
            Primitive::Cylinder { height, .. } if (height - 1.2).abs() < 1e-6
        ));
    }
}

//! Hanged-figure geometry.
//!
//! Each [`BodyPart`] maps to a small node tree built fresh on every rebuild.

use std::f32::consts::PI;

use raylib::prelude::Color;

use crate::components::actor::MotionProfile;
use crate::components::bodypart::BodyPart;
use crate::components::shape::{Primitive, Surface, rgb};
use crate::resources::figurerig::figure_anchor;
use crate::scene::node::NodeSpec;

const SKIN: Color = rgb(0xFFE4C4);
const CLOTH: Color = rgb(0xFF0000);
const EYE: Color = rgb(0x000000);

/// Top radius, bottom radius and length of the limb cylinders.
const ARM: (f32, f32, f32) = (0.08, 0.06, 0.5);
const LEG: (f32, f32, f32) = (0.09, 0.07, 0.8);

/// Empty figure group at its anchor. Parts are attached under it.
pub fn figure_root() -> NodeSpec {
    let anchor = figure_anchor();
    NodeSpec::group("hanged figure")
        .at(anchor.x, anchor.y, anchor.z)
        .animated(MotionProfile::HangedFigure, 0)
}

fn eye(name: &'static str, x: f32) -> NodeSpec {
    NodeSpec::mesh(name, Primitive::Sphere { radius: 0.05 }, Surface::solid(EYE))
        .at(x, 0.0, 0.25)
        .scaled(0.8, 1.0, 0.1)
}

/// A limb group at the part offset holding one tilted cylinder.
fn limb(
    name: &'static str,
    part: BodyPart,
    (top, bottom, length): (f32, f32, f32),
    drop: f32,
    tilt: f32,
) -> NodeSpec {
    let offset = part.offset();
    NodeSpec::group(name).at(offset.x, offset.y, offset.z).child(
        NodeSpec::mesh(
            "limb",
            Primitive::Cylinder {
                radius_top: top,
                radius_bottom: bottom,
                height: length,
                sides: 12,
            },
            Surface::solid(CLOTH),
        )
        .at(0.0, -drop, 0.0)
        .rotated(0.0, 0.0, tilt),
    )
}

/// Node tree for one body part, positioned relative to the figure origin.
pub fn part(part: BodyPart) -> NodeSpec {
    let offset = part.offset();
    match part {
        BodyPart::Head => NodeSpec::group(part.name())
            .at(offset.x, offset.y, offset.z)
            .child(NodeSpec::mesh(
                "skull",
                Primitive::Sphere { radius: 0.3 },
                Surface::solid(SKIN),
            ))
            .child(eye("left eye", -0.1))
            .child(eye("right eye", 0.1)),
        BodyPart::Torso => NodeSpec::mesh(
            part.name(),
            Primitive::Cylinder {
                radius_top: 0.15,
                radius_bottom: 0.25,
                height: 1.2,
                sides: 16,
            },
            Surface::solid(CLOTH),
        )
        .at(offset.x, offset.y, offset.z),
        BodyPart::LeftArm => limb(part.name(), part, ARM, 0.2, PI / 6.0),
        BodyPart::RightArm => limb(part.name(), part, ARM, 0.2, -PI / 6.0),
        BodyPart::LeftLeg => limb(part.name(), part, LEG, 0.4, PI / 12.0),
        BodyPart::RightLeg => limb(part.name(), part, LEG, 0.4, -PI / 12.0),
    }
}

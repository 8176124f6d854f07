//! Ambient light, the sun sphere and the sun light that follows it.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector3};

use crate::components::actor::MotionProfile;
use crate::components::follow::Follow;
use crate::components::group::Group;
use crate::components::light::{AmbientLight, DirectionalLight};
use crate::components::position::Position3D;
use crate::components::shape::{Primitive, Surface, rgb};
use crate::scene::node::NodeSpec;

pub const AMBIENT: AmbientLight = AmbientLight {
    color: rgb(0xffffff),
    intensity: 0.4,
};
pub const SUNLIGHT: DirectionalLight = DirectionalLight {
    color: rgb(0xffd500),
    intensity: 1.0,
};
const SUN_COLOR: Color = rgb(0xffff00);
pub const SUN_START: Vector3 = Vector3 {
    x: 15.0,
    y: 12.0,
    z: 5.0,
};

pub fn sun() -> NodeSpec {
    NodeSpec::mesh("sun", Primitive::Sphere { radius: 1.0 }, Surface::unlit(SUN_COLOR))
        .at(SUN_START.x, SUN_START.y, SUN_START.z)
        .animated(MotionProfile::Sun, 0)
}

/// Spawn the lights. Returns the sun sphere entity.
pub fn spawn_lighting(commands: &mut Commands) -> Entity {
    commands.spawn((Group::LIGHTS, AMBIENT));

    let sun = sun().spawn(commands, None);
    commands.entity(sun).insert(Group::LIGHTS);

    commands.spawn((
        Group::LIGHTS,
        SUNLIGHT,
        Position3D { pos: SUN_START },
        Follow::new(sun),
    ));
    sun
}

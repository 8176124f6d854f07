//! Scene construction.
//!
//! The environment builder assembles the static courtyard once per session:
//! castle, trees, crowd, ground and grass, gallows and lights. Every root is
//! tagged with a [`Group`] so teardown can find it. Builders return
//! [`NodeSpec`] trees; only [`build_environment`] and the figure assembly
//! observer touch the world.
//!
//! Submodules:
//! - [`node`] – node descriptions and spawning
//! - [`castle`], [`vegetation`], [`crowd`], [`ground`], [`gallows`] – static
//!   geometry
//! - [`lighting`] – ambient light, sun sphere and sun light
//! - [`figure`] – hanged-figure parts

pub mod castle;
pub mod crowd;
pub mod figure;
pub mod gallows;
pub mod ground;
pub mod lighting;
pub mod node;
pub mod vegetation;

use bevy_ecs::prelude::*;
use log::info;

use crate::components::group::Group;
use crate::scene::node::NodeSpec;

/// Static scene roots paired with their group tags. Grass placement draws
/// from `rng`.
pub fn environment(rng: &mut fastrand::Rng) -> Vec<(Group, NodeSpec)> {
    vec![
        (Group::CASTLE, castle::castle()),
        (Group::TREES, vegetation::trees()),
        (Group::CROWD, crowd::crowd()),
        (Group::GROUND, ground::ground()),
        (Group::GRASS, ground::grass_field(rng)),
        (Group::GALLOWS, gallows::gallows()),
    ]
}

/// Spawn the whole static environment, lights included. Returns the sun
/// entity.
pub fn build_environment(commands: &mut Commands, rng: &mut fastrand::Rng) -> Entity {
    let mut nodes = 0;
    for (group, spec) in environment(rng) {
        nodes += spec.node_count();
        let root = spec.spawn(commands, None);
        commands.entity(root).insert(group);
    }
    let sun = lighting::spawn_lighting(commands);
    info!("Environment built: {} nodes", nodes);
    sun
}

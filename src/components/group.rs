//! Group tag for scene roots.
//!
//! Every root node spawned by the environment builder or the figure assembly
//! carries a [`Group`]. Session teardown despawns exactly the tagged roots,
//! so anything without a group (observers, registered systems) survives.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);

impl Group {
    pub const CASTLE: Group = Group("castle");
    pub const TREES: Group = Group("trees");
    pub const CROWD: Group = Group("crowd");
    pub const GROUND: Group = Group("ground");
    pub const GRASS: Group = Group("grass");
    pub const GALLOWS: Group = Group("gallows");
    pub const LIGHTS: Group = Group("lights");
    pub const FIGURE: Group = Group("figure");
}

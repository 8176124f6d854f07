//! Hanged-figure rig bookkeeping.
//!
//! Owned by the figure assembly observer
//! ([`rebuild_figure_observer`](crate::events::figure::rebuild_figure_observer)):
//! it records the root entity the parts hang from, which parts are currently
//! attached and how many full rebuilds have happened.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::{Entity, Resource};
use raylib::prelude::Vector3;

use crate::components::bodypart::BodyPart;

/// World position of the bottom of the gibbet's rope stub.
pub const ROPE_POINT: Vector3 = Vector3 {
    x: -1.0,
    y: 1.65,
    z: -1.0,
};

/// Figure origin relative to [`ROPE_POINT`].
pub const FIGURE_ANCHOR_OFFSET: Vector3 = Vector3 {
    x: 0.0,
    y: -1.55,
    z: 0.0,
};

/// World position of the figure group origin.
pub fn figure_anchor() -> Vector3 {
    Vector3 {
        x: ROPE_POINT.x + FIGURE_ANCHOR_OFFSET.x,
        y: ROPE_POINT.y + FIGURE_ANCHOR_OFFSET.y,
        z: ROPE_POINT.z + FIGURE_ANCHOR_OFFSET.z,
    }
}

#[derive(Resource, Debug, Clone)]
pub struct FigureRig {
    pub root: Entity,
    /// Parts attached by the last rebuild, in catalog order.
    pub attached: ArrayVec<BodyPart, 6>,
    /// Number of rebuilds since the rig was created.
    pub rebuilds: u32,
}

impl FigureRig {
    pub fn new(root: Entity) -> Self {
        Self {
            root,
            attached: ArrayVec::new(),
            rebuilds: 0,
        }
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }
}

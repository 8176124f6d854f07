//! Transform propagation for parent-child entity hierarchies.
//!
//! Computes [`GlobalTransform3D`] for every scene node: roots (no
//! [`ChildOf`]) take their local transform as is, descendants compose their
//! local transform onto their parent's world transform.
//!
//! # Schedule position
//!
//! Runs **after** animation and follow systems and **before** rendering so
//! the renderer sees this frame's world transforms.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use raylib::math::Vector3;

use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::position::Position3D;
use crate::components::rotation::Rotation3D;
use crate::components::scale::Scale3D;

const ZERO: Vector3 = Vector3 {
    x: 0.0,
    y: 0.0,
    z: 0.0,
};
const ONE: Vector3 = Vector3 {
    x: 1.0,
    y: 1.0,
    z: 1.0,
};

type LocalTransform<'a> = (
    &'a Position3D,
    Option<&'a Rotation3D>,
    Option<&'a Scale3D>,
    Option<&'a Children>,
);

fn local(pos: &Position3D, rot: Option<&Rotation3D>, scale: Option<&Scale3D>) -> GlobalTransform3D {
    GlobalTransform3D::from_trs(
        pos.pos,
        rot.map(|r| r.euler).unwrap_or(ZERO),
        scale.map(|s| s.scale).unwrap_or(ONE),
    )
}

/// Propagate transforms from roots down through the hierarchy.
///
/// Entities that already have a `GlobalTransform3D` are updated in place.
/// Entities missing the component get it inserted via deferred [`Commands`]
/// (visible next frame).
pub fn propagate_transforms(
    roots: Query<(Entity, LocalTransform), Without<ChildOf>>,
    children_query: Query<LocalTransform, With<ChildOf>>,
    mut globals: Query<&mut GlobalTransform3D>,
    mut commands: Commands,
) {
    for (root_entity, (pos, rot, scale, children)) in roots.iter() {
        let root_gt = local(pos, rot, scale);
        store(root_entity, root_gt, &mut globals, &mut commands);

        if let Some(children) = children {
            propagate_children(&root_gt, children, &children_query, &mut globals, &mut commands);
        }
    }
}

fn store(
    entity: Entity,
    gt: GlobalTransform3D,
    globals: &mut Query<&mut GlobalTransform3D>,
    commands: &mut Commands,
) {
    if let Ok(mut current) = globals.get_mut(entity) {
        *current = gt;
    } else {
        commands.entity(entity).insert(gt);
    }
}

fn propagate_children(
    parent_gt: &GlobalTransform3D,
    children: &Children,
    children_query: &Query<LocalTransform, With<ChildOf>>,
    globals: &mut Query<&mut GlobalTransform3D>,
    commands: &mut Commands,
) {
    for child_entity in children.iter() {
        let Ok((pos, rot, scale, grandchildren)) = children_query.get(child_entity) else {
            continue;
        };

        let child_gt = parent_gt.mul(&local(pos, rot, scale));
        store(child_entity, child_gt, globals, commands);

        if let Some(grandchildren) = grandchildren {
            propagate_children(&child_gt, grandchildren, children_query, globals, commands);
        }
    }
}

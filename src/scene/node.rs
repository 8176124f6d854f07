//! Composable scene-node descriptions.
//!
//! Builders in [`crate::scene`] return [`NodeSpec`] trees instead of
//! spawning directly. A tree is plain data: it can be inspected in tests,
//! and [`NodeSpec::spawn`] turns it into entities linked by
//! [`ChildOf`], each carrying a local transform, an identity
//! [`GlobalTransform3D`] and, when set, a [`Shape`] and an [`Actor`].

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::name::Name;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::components::actor::{Actor, MotionProfile, Pose};
use crate::components::globaltransform3d::GlobalTransform3D;
use crate::components::position::Position3D;
use crate::components::rotation::Rotation3D;
use crate::components::scale::Scale3D;
use crate::components::shape::{Primitive, Shape, Surface};

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

#[derive(Clone, Debug, PartialEq)]
pub struct NodeSpec {
    pub name: &'static str,
    pub position: Vector3,
    /// XYZ Euler radians.
    pub rotation: Vector3,
    pub scale: Vector3,
    pub shape: Option<Shape>,
    /// Motion profile and index within its category.
    pub motion: Option<(MotionProfile, u32)>,
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// Empty grouping node.
    pub fn group(name: &'static str) -> Self {
        Self {
            name,
            position: ZERO,
            rotation: ZERO,
            scale: ONE,
            shape: None,
            motion: None,
            children: Vec::new(),
        }
    }

    /// Node drawing a single primitive.
    pub fn mesh(name: &'static str, primitive: Primitive, surface: Surface) -> Self {
        Self {
            shape: Some(Shape::new(primitive, surface)),
            ..Self::group(name)
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vector3 { x, y, z };
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vector3 { x, y, z };
        self
    }

    pub fn scaled(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vector3 { x, y, z };
        self
    }

    pub fn animated(mut self, profile: MotionProfile, index: u32) -> Self {
        self.motion = Some((profile, index));
        self
    }

    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeSpec>) -> Self {
        self.children.extend(children);
        self
    }

    /// Nodes in this tree, including the root.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(NodeSpec::node_count).sum::<usize>()
    }

    /// Nodes in this tree that draw something.
    pub fn shape_count(&self) -> usize {
        usize::from(self.shape.is_some())
            + self.children.iter().map(NodeSpec::shape_count).sum::<usize>()
    }

    /// Depth-first search by name.
    pub fn find(&self, name: &str) -> Option<&NodeSpec> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    pub fn rest_pose(&self) -> Pose {
        Pose::at(self.position).with_rotation(self.rotation)
    }

    /// Spawn this tree, attached to `parent` when given. Returns the root
    /// entity.
    pub fn spawn(&self, commands: &mut Commands, parent: Option<Entity>) -> Entity {
        let mut entity = commands.spawn((
            Name::new(self.name),
            Position3D { pos: self.position },
            Rotation3D {
                euler: self.rotation,
            },
            Scale3D { scale: self.scale },
            GlobalTransform3D::IDENTITY,
        ));
        if let Some(shape) = self.shape {
            entity.insert(shape);
        }
        if let Some((profile, index)) = self.motion {
            entity.insert(Actor::new(profile, index, self.rest_pose()));
        }
        if let Some(parent) = parent {
            entity.insert(ChildOf(parent));
        }
        let id = entity.id();

        for child in &self.children {
            child.spawn(commands, Some(id));
        }
        id
    }
}

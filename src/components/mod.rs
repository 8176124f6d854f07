//! ECS components for entities.
//!
//! This module groups all component types that can be attached to scene
//! nodes: local transforms, the computed world transform, drawable shapes,
//! lights and the markers the animation and figure systems look for.
//!
//! Submodules overview:
//! - [`actor`] – motion profile and rest pose of animated nodes
//! - [`bodypart`] – hanged-figure part catalog and part markers
//! - [`follow`] – couple a node's position to another node
//! - [`globaltransform3d`] – world-space transform computed from the hierarchy
//! - [`group`] – tag for scene roots, used by teardown
//! - [`light`] – ambient and directional lights, CPU shading
//! - [`position`] – local position
//! - [`rotation`] – local XYZ Euler rotation
//! - [`scale`] – local per-axis scale
//! - [`shape`] – drawable primitive and its surface

pub mod actor;
pub mod bodypart;
pub mod follow;
pub mod globaltransform3d;
pub mod group;
pub mod light;
pub mod position;
pub mod rotation;
pub mod scale;
pub mod shape;

//! Animated scene participants.
//!
//! An [`Actor`] is any node whose transform is rewritten every frame by the
//! [`animate_actors`](crate::systems::animation::animate_actors) system. The
//! pose is a pure function of the world clock, the actor's index within its
//! category and whether the round is over; nothing else is stored between
//! frames.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Which motion curve drives an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionProfile {
    /// Ground cover; sways around its own base angle.
    GrassBlade,
    /// The hanged figure group; swings gently while it has parts.
    HangedFigure,
    /// King, queen and guards; idle sway, bounce and spin once over.
    Crowd,
    /// Dogs; idle wobble, jump and spin once over.
    Animal,
    /// Constant small sway, never escalates.
    Executioner,
    /// Orbits the courtyard; the sun light follows it.
    Sun,
}

/// Position and Euler rotation (radians) of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vector3,
    pub rotation: Vector3,
}

impl Pose {
    pub fn at(position: Vector3) -> Self {
        Self {
            position,
            rotation: Vector3 {
                x: 0.0,
                y: 0.0,
                z: 0.0,
            },
        }
    }

    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self
    }
}

#[derive(Component, Clone, Copy, Debug)]
pub struct Actor {
    pub profile: MotionProfile,
    /// Position of the actor within its category; offsets its phase.
    pub index: u32,
    /// Pose the motion curve is applied on top of.
    pub rest: Pose,
}

impl Actor {
    pub fn new(profile: MotionProfile, index: u32, rest: Pose) -> Self {
        Self {
            profile,
            index,
            rest,
        }
    }

    /// Pose at clock value `t`. `is_over` selects the escalated curves.
    pub fn pose(&self, t: f32, is_over: bool) -> Pose {
        self.profile.pose(t, self.index, is_over, self.rest)
    }
}

impl MotionProfile {
    /// Evaluate the motion curve on top of `rest`.
    ///
    /// Angles are XYZ Euler radians: roll is about Z, pitch about X and
    /// yaw about Y. Blades lie flat (rotated about X), so their sway angle
    /// is the Z component.
    pub fn pose(self, t: f32, index: u32, is_over: bool, rest: Pose) -> Pose {
        let i = index as f32;
        let mut pose = rest;
        match self {
            MotionProfile::GrassBlade => {
                pose.rotation.z = rest.rotation.z + (t + i * 0.1).sin() * 0.1;
            }
            MotionProfile::HangedFigure => {
                pose.rotation.z = rest.rotation.z + t.sin() * 0.1;
                pose.rotation.x = rest.rotation.x + (0.5 * t).sin() * 0.05;
            }
            MotionProfile::Crowd => {
                pose.rotation.z = rest.rotation.z + (1.5 * t + i).sin() * 0.03;
                pose.rotation.x = rest.rotation.x + (t + i).cos() * 0.02;
                pose.position.x = rest.position.x + (1.5 * t + i).sin() * 0.02;
                if is_over {
                    pose.position.y = rest.position.y + (8.0 * t + 2.0 * i).sin() * 1.5;
                    pose.rotation.y = rest.rotation.y + 2.0 * t;
                }
            }
            MotionProfile::Animal => {
                pose.rotation.z = rest.rotation.z + (1.5 * t + i).sin() * 0.05;
                if is_over {
                    pose.position.y = rest.position.y + (8.0 * t + 2.0 * i).sin();
                    pose.rotation.y = rest.rotation.y + 4.0 * t;
                }
            }
            MotionProfile::Executioner => {
                pose.rotation.z = rest.rotation.z + (1.2 * t).sin() * 0.02;
            }
            MotionProfile::Sun => {
                pose.position.x = 15.0 * (0.1 * t).cos();
                pose.position.y = 12.0 + 2.0 * (0.1 * t).sin();
            }
        }
        pose
    }
}
